//! Intermediate representation for emitted types.
//!
//! One tree is built per output unit and handed to the emitter. Ownership is
//! strictly downward: a member never points at its enclosing type; the emitter
//! passes the enclosing type in when a member needs it (property renaming,
//! constructor headers).
//!
//! # Structure
//!
//! - [`TypeNode`]: a class or an enum
//! - [`ClassMember`]: nested type, constant, property or method
//! - [`EnumMember`]: nested type or value
//!
//! Member kinds are closed enums, so the emitter's matches are exhaustive.

use crate::naming::{parameter_name, property_name};
use std::collections::HashSet;

/// Attribute placed on synthesized constructors
const JSON_CONSTRUCTOR_ATTRIBUTE: &str = "[JsonConstructor]";

/// A class or enum definition
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Class(ClassNode),
    Enum(EnumNode),
}

impl TypeNode {
    pub fn name(&self) -> &str {
        match self {
            TypeNode::Class(class) => &class.name,
            TypeNode::Enum(enumeration) => &enumeration.name,
        }
    }

    pub fn doc(&self) -> &str {
        match self {
            TypeNode::Class(class) => &class.doc,
            TypeNode::Enum(enumeration) => &enumeration.doc,
        }
    }

    /// Namespace of a unit root; `None` for nested types
    pub fn namespace(&self) -> Option<&str> {
        match self {
            TypeNode::Class(class) => class.namespace.as_deref(),
            TypeNode::Enum(enumeration) => enumeration.namespace.as_deref(),
        }
    }

    pub fn as_class(&self) -> Option<&ClassNode> {
        match self {
            TypeNode::Class(class) => Some(class),
            TypeNode::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumNode> {
        match self {
            TypeNode::Enum(enumeration) => Some(enumeration),
            TypeNode::Class(_) => None,
        }
    }
}

impl From<ClassNode> for TypeNode {
    fn from(class: ClassNode) -> Self {
        TypeNode::Class(class)
    }
}

impl From<EnumNode> for TypeNode {
    fn from(enumeration: EnumNode) -> Self {
        TypeNode::Enum(enumeration)
    }
}

/// A class definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassNode {
    pub name: String,
    pub namespace: Option<String>,
    pub doc: String,
    pub is_static: bool,
    pub is_partial: bool,
    pub members: Vec<ClassMember>,
}

/// Something declared inside a class
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Nested(TypeNode),
    Constant(ConstantMember),
    Property(PropertyMember),
    Method(MethodMember),
}

/// `public const <ty> <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantMember {
    pub name: String,
    pub ty: String,
    /// Literal source text, quotes included for strings
    pub value: String,
    pub doc: String,
}

/// A get/set property backed by a schema field
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    /// Field name as written in the schema (the JSON key)
    pub name: String,
    /// Mapped C# type
    pub ty: String,
    pub doc: String,
}

impl PropertyMember {
    /// Name the property is declared with inside `enclosing_type`
    pub fn display_name(&self, enclosing_type: &str) -> String {
        property_name(&self.name, enclosing_type)
    }

    pub fn is_optional(&self) -> bool {
        self.ty.ends_with('?')
    }
}

/// What kind of method a [`MethodMember`] declares
#[derive(Debug, Clone, PartialEq)]
pub enum MethodKind {
    /// Named after the enclosing class; no return type
    Constructor,
    Named { name: String, return_type: String },
}

/// A method with a caller-supplied body
#[derive(Debug, Clone, PartialEq)]
pub struct MethodMember {
    pub kind: MethodKind,
    pub parameters: Vec<Parameter>,
    /// Attribute lines written above the declaration, e.g. `[JsonConstructor]`
    pub attributes: Vec<String>,
    /// Body statements, one per line, written inside the method block
    pub body: Vec<String>,
    pub doc: String,
}

impl MethodMember {
    pub fn named(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            kind: MethodKind::Named {
                name: name.into(),
                return_type: return_type.into(),
            },
            parameters: Vec::new(),
            attributes: Vec::new(),
            body: Vec::new(),
            doc: String::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn with_body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, MethodKind::Constructor)
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

impl Parameter {
    /// Nullable parameters are emitted with a `= null` default
    pub fn is_optional(&self) -> bool {
        self.ty.ends_with('?')
    }
}

/// An enum definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumNode {
    pub name: String,
    pub namespace: Option<String>,
    pub doc: String,
    pub members: Vec<EnumMember>,
}

/// Something declared inside an enum
#[derive(Debug, Clone, PartialEq)]
pub enum EnumMember {
    Nested(TypeNode),
    Value(EnumValueMember),
}

/// One enum value
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueMember {
    pub name: String,
    /// Literal as written in the schema: `3` or `"queued"`
    pub value: String,
    pub doc: String,
}

impl EnumValueMember {
    pub fn is_string_literal(&self) -> bool {
        self.value.contains('"')
    }
}

impl EnumNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn values(&self) -> impl Iterator<Item = &EnumValueMember> {
        self.members.iter().filter_map(|member| match member {
            EnumMember::Value(value) => Some(value),
            EnumMember::Nested(_) => None,
        })
    }

    /// Whether the enum must serialize through its string literals
    pub fn serializes_as_string(&self) -> bool {
        self.values().any(EnumValueMember::is_string_literal)
    }
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Mark the class `static`
    pub fn static_class(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the class `partial`, so other units can reopen it
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    pub fn with_member(mut self, member: ClassMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyMember> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Property(property) => Some(property),
            _ => None,
        })
    }

    pub fn constructor(&self) -> Option<&MethodMember> {
        self.members.iter().find_map(|member| match member {
            ClassMember::Method(method) if method.is_constructor() => Some(method),
            _ => None,
        })
    }

    /// Declared name of each member; constructors have none
    fn member_names(&self) -> impl Iterator<Item = String> + '_ {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Nested(node) => Some(node.name().to_string()),
            ClassMember::Constant(constant) => Some(constant.name.clone()),
            ClassMember::Property(property) => Some(property.display_name(&self.name)),
            ClassMember::Method(method) => match &method.kind {
                MethodKind::Named { name, .. } => Some(name.clone()),
                MethodKind::Constructor => None,
            },
        })
    }

    /// First member name that is declared more than once, after normalization.
    ///
    /// `id` and `Id` both declare `Id`, as do `install-location` and
    /// `installLocation`.
    pub fn duplicate_member(&self) -> Option<String> {
        let mut seen = HashSet::new();
        self.member_names().find(|name| !seen.insert(name.clone()))
    }

    /// Insert the synthesized JSON constructor as the first member.
    ///
    /// Parameters follow property declaration order, with every optional
    /// property moved after the required ones (stable), so defaulted
    /// parameters come last. The body assigns each parameter to its property.
    /// Classes without properties are left alone unless `always` is set.
    pub fn with_json_constructor(mut self, always: bool) -> Self {
        if self.constructor().is_some() {
            return self;
        }

        let properties: Vec<&PropertyMember> = self.properties().collect();
        if properties.is_empty() && !always {
            return self;
        }

        let mut ordered = properties.clone();
        ordered.sort_by_key(|property| property.is_optional());

        let parameters = ordered
            .iter()
            .map(|property| Parameter {
                name: parameter_name(&property.name),
                ty: property.ty.clone(),
            })
            .collect();

        let body = properties
            .iter()
            .map(|property| {
                format!(
                    "this.{} = {};",
                    property.display_name(&self.name),
                    parameter_name(&property.name)
                )
            })
            .collect();

        let constructor = MethodMember {
            kind: MethodKind::Constructor,
            parameters,
            attributes: vec![JSON_CONSTRUCTOR_ATTRIBUTE.to_string()],
            body,
            doc: String::new(),
        };

        self.members.insert(0, ClassMember::Method(constructor));
        self
    }
}

#[cfg(test)]
#[path = "ir/ir_tests.rs"]
mod ir_tests;
