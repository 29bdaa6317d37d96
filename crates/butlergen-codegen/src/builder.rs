//! Namespace tree construction.
//!
//! A dotted method name `A.B.C` becomes nested containers
//! `<Category>.A.B.C`, built from the last segment outwards. The leaf `C`
//! carries the method's content. Containers are `partial`, so independently
//! emitted units reopen the same `A` and `B` without a merge pass.
//!
//! ```text
//! Requests                      public static partial class
//! └── Profile                   public static partial class
//!     └── List                  public static partial class (doc, Id)
//!         ├── Request           ctor, SendAsync, params
//!         └── Response          ctor, result fields
//! ```

use crate::error::{CodegenError, CodegenResult};
use crate::ir::{
    ClassMember, ClassNode, ConstantMember, EnumMember, EnumNode, EnumValueMember, MethodMember,
    PropertyMember, TypeNode,
};
use crate::patches::enum_patches;
use crate::types::{ReferenceResolver, TypeMapper};
use crate::unit::Category;
use butlergen_core::{
    EnumTypeSpec, FieldSpec, GeneratorConfig, NotificationSpec, RequestSpec, SchemaDocument,
    StructTypeSpec,
};
use std::iter;

const ID_CONSTANT: &str = "Id";
const REQUEST_CLASS: &str = "Request";
const RESPONSE_CLASS: &str = "Response";

/// Builds one type tree per schema entity
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    base_namespace: String,
    requests: TypeMapper,
    notifications: TypeMapper,
    catalog: TypeMapper,
}

impl TreeBuilder {
    /// Prepare per-category type mappers for `document`
    pub fn new(document: &SchemaDocument, config: &GeneratorConfig) -> Self {
        let enum_names = || document.enum_types.iter().map(|e| e.name.as_str());

        let requests = ReferenceResolver::for_methods(
            document.requests.iter().map(|r| r.method.as_str()),
            &[Category::Requests.as_str(), REQUEST_CLASS, RESPONSE_CLASS],
            enum_names(),
        );
        let notifications = ReferenceResolver::for_methods(
            document.notifications.iter().map(|n| n.method.as_str()),
            &[Category::Notifications.as_str()],
            enum_names(),
        );

        Self {
            base_namespace: config.base_namespace.clone(),
            requests: TypeMapper::new(requests),
            notifications: TypeMapper::new(notifications),
            catalog: TypeMapper::default(),
        }
    }

    /// `Requests.<segments>` with `Id`, `Request` and `Response` at the leaf
    pub fn build_request(&self, spec: &RequestSpec) -> CodegenResult<TypeNode> {
        let (leaf_name, outer) = split_method(&spec.method)?;

        let send = MethodMember::named("SendAsync", format!("Task<{RESPONSE_CLASS}>"))
            .with_parameter("jsonRpc", "JsonRpc")
            .with_body_line(format!(
                "return jsonRpc.InvokeWithParameterObjectAsync<{RESPONSE_CLASS}>({leaf_name}.{ID_CONSTANT}, this);"
            ));

        let mut request = ClassNode::new(REQUEST_CLASS).with_member(ClassMember::Method(send));
        request
            .members
            .extend(properties(&spec.params.fields, &self.requests)?);

        let mut response = ClassNode::new(RESPONSE_CLASS);
        response
            .members
            .extend(properties(&spec.result.fields, &self.requests)?);

        let leaf = ClassNode::new(leaf_name)
            .with_doc(spec.doc.as_str())
            .static_class()
            .partial()
            .with_member(id_constant(&spec.method))
            .with_member(ClassMember::Nested(
                unique_members(request)?.with_json_constructor(true).into(),
            ))
            .with_member(ClassMember::Nested(
                unique_members(response)?.with_json_constructor(false).into(),
            ));

        Ok(self.nest(unique_members(leaf)?, &outer, Category::Requests, true))
    }

    /// `Notifications.<segments>` with `Id` and the params at the leaf
    pub fn build_notification(&self, spec: &NotificationSpec) -> CodegenResult<TypeNode> {
        let (leaf_name, outer) = split_method(&spec.method)?;

        let mut leaf = ClassNode::new(leaf_name)
            .with_doc(spec.doc.as_str())
            .partial()
            .with_member(id_constant(&spec.method));
        leaf.members
            .extend(properties(&spec.params.fields, &self.notifications)?);

        Ok(self.nest(
            unique_members(leaf)?.with_json_constructor(false),
            &outer,
            Category::Notifications,
            false,
        ))
    }

    /// `public class <Name>` in the `Structs` namespace
    pub fn build_struct(&self, spec: &StructTypeSpec) -> CodegenResult<TypeNode> {
        let mut class = ClassNode::new(spec.name.as_str())
            .with_doc(spec.doc.as_str())
            .with_namespace(Category::Structs.namespace(&self.base_namespace));
        class.members.extend(properties(&spec.fields, &self.catalog)?);

        Ok(unique_members(class)?.with_json_constructor(false).into())
    }

    /// `public enum <Name>` in the `Enums` namespace, patches first
    pub fn build_enum(&self, spec: &EnumTypeSpec) -> CodegenResult<TypeNode> {
        let mut node = EnumNode::new(spec.name.as_str())
            .with_doc(spec.doc.as_str())
            .with_namespace(Category::Enums.namespace(&self.base_namespace));

        node.members.extend(
            enum_patches(&spec.name).map(|patch| EnumMember::Value(patch.to_member())),
        );
        node.members.extend(spec.values.iter().map(|value| {
            EnumMember::Value(EnumValueMember {
                name: value.name.clone(),
                value: value.value.clone(),
                doc: value.doc.clone(),
            })
        }));

        Ok(node.into())
    }

    /// Wrap `leaf` in one container per outer segment plus the category root
    fn nest(&self, leaf: ClassNode, outer: &[&str], category: Category, is_static: bool) -> TypeNode {
        let mut current = leaf;

        for name in outer.iter().rev().copied().chain(iter::once(category.as_str())) {
            let mut container = ClassNode::new(name).partial();
            container.is_static = is_static;
            current = container.with_member(ClassMember::Nested(current.into()));
        }

        current
            .with_namespace(category.namespace(&self.base_namespace))
            .into()
    }
}

/// Split `A.B.C` into the leaf `C` and the outer segments `[A, B]`
pub fn split_method(method: &str) -> CodegenResult<(&str, Vec<&str>)> {
    let mut segments: Vec<&str> = method.split('.').collect();
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(CodegenError::EmptySegment(method.to_string()));
    }

    match segments.pop() {
        Some(leaf) => Ok((leaf, segments)),
        None => Err(CodegenError::EmptySegment(method.to_string())),
    }
}

/// Reject a class whose members would share a declared name
fn unique_members(class: ClassNode) -> CodegenResult<ClassNode> {
    match class.duplicate_member() {
        Some(name) => Err(CodegenError::DuplicateMember {
            container: class.name,
            name,
        }),
        None => Ok(class),
    }
}

fn id_constant(method: &str) -> ClassMember {
    ClassMember::Constant(ConstantMember {
        name: ID_CONSTANT.to_string(),
        ty: "string".to_string(),
        value: format!("\"{method}\""),
        doc: String::new(),
    })
}

fn properties(fields: &[FieldSpec], mapper: &TypeMapper) -> CodegenResult<Vec<ClassMember>> {
    fields
        .iter()
        .map(|field| {
            Ok(ClassMember::Property(PropertyMember {
                name: field.name.clone(),
                ty: mapper.field_type(field)?,
                doc: field.doc.clone(),
            }))
        })
        .collect()
}
