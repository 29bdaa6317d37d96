//! C# source emission from the type tree.
//!
//! Every unit is written the same way: the `using` list, a blank line, then
//! `namespace <root namespace>` wrapping the root type. Inside a type, members
//! appear in declaration order with one blank line between them.

use crate::error::{CodegenError, CodegenResult};
use crate::ir::{
    ClassMember, ClassNode, ConstantMember, EnumMember, EnumNode, EnumValueMember, MethodKind,
    MethodMember, PropertyMember, TypeNode,
};
use crate::naming::to_pascal_case;
use crate::writer::SourceWriter;
use butlergen_core::GeneratorConfig;

const STRING_ENUM_CONVERTER: &str = "[JsonConverter(typeof(StringEnumConverter))]";

/// Renders type trees as C# compilation units
#[derive(Debug, Clone)]
pub struct CSharpEmitter {
    indent: String,
    usings: Vec<String>,
}

impl CSharpEmitter {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            indent: config.indent.clone(),
            usings: config.usings(),
        }
    }

    /// Render one unit rooted at `root`.
    ///
    /// The root must carry a namespace. A nested type inside an enum fails the
    /// unit with [`CodegenError::InvalidMember`].
    pub fn emit_unit(&self, root: &TypeNode) -> CodegenResult<String> {
        let namespace = root
            .namespace()
            .ok_or_else(|| CodegenError::MissingNamespace(root.name().to_string()))?;

        let mut writer = SourceWriter::new(self.indent.as_str());
        for using in &self.usings {
            writer.using(using);
        }
        writer.blank();
        writer.block(format!("namespace {namespace}"), |w| emit_type(w, root))?;

        Ok(writer.finish())
    }
}

/// Render a type definition at the writer's current depth
pub fn emit_type(w: &mut SourceWriter, node: &TypeNode) -> CodegenResult<()> {
    match node {
        TypeNode::Class(class) => emit_class(w, class),
        TypeNode::Enum(enumeration) => emit_enum(w, enumeration),
    }
}

fn emit_class(w: &mut SourceWriter, class: &ClassNode) -> CodegenResult<()> {
    w.doc(&class.doc);

    let mut header = String::from("public");
    if class.is_static {
        header.push_str(" static");
    }
    if class.is_partial {
        header.push_str(" partial");
    }
    header.push_str(" class ");
    header.push_str(&class.name);

    w.block(header, |w| {
        for (i, member) in class.members.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            emit_class_member(w, member, class)?;
        }
        Ok(())
    })
}

fn emit_class_member(w: &mut SourceWriter, member: &ClassMember, class: &ClassNode) -> CodegenResult<()> {
    match member {
        ClassMember::Nested(nested) => emit_type(w, nested),
        ClassMember::Constant(constant) => {
            emit_constant(w, constant);
            Ok(())
        }
        ClassMember::Property(property) => {
            emit_property(w, property, &class.name);
            Ok(())
        }
        ClassMember::Method(method) => emit_method(w, method, &class.name),
    }
}

fn emit_constant(w: &mut SourceWriter, constant: &ConstantMember) {
    w.doc(&constant.doc);
    w.line(format!(
        "public const {} {} = {};",
        constant.ty, constant.name, constant.value
    ));
}

fn emit_property(w: &mut SourceWriter, property: &PropertyMember, enclosing_type: &str) {
    w.doc(&property.doc);

    let display = property.display_name(enclosing_type);
    if display != property.name {
        w.line(format!("[JsonProperty(\"{}\")]", property.name));
    }
    w.line(format!("public {} {} {{ get; set; }}", property.ty, display));
}

fn emit_method(w: &mut SourceWriter, method: &MethodMember, enclosing_type: &str) -> CodegenResult<()> {
    w.doc(&method.doc);
    for attribute in &method.attributes {
        w.line(attribute);
    }

    let parameters = method
        .parameters
        .iter()
        .map(|parameter| {
            if parameter.is_optional() {
                format!("{} {} = null", parameter.ty, parameter.name)
            } else {
                format!("{} {}", parameter.ty, parameter.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let header = match &method.kind {
        MethodKind::Constructor => format!("public {enclosing_type}({parameters})"),
        MethodKind::Named { name, return_type } => {
            format!("public {return_type} {name}({parameters})")
        }
    };

    w.block(header, |w| {
        for line in &method.body {
            w.line(line);
        }
        Ok(())
    })
}

fn emit_enum(w: &mut SourceWriter, enumeration: &EnumNode) -> CodegenResult<()> {
    w.doc(&enumeration.doc);
    if enumeration.serializes_as_string() {
        w.line(STRING_ENUM_CONVERTER);
    }

    w.block(format!("public enum {}", enumeration.name), |w| {
        for (i, member) in enumeration.members.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            match member {
                EnumMember::Value(value) => emit_enum_value(w, value),
                EnumMember::Nested(nested) => {
                    return Err(CodegenError::InvalidMember {
                        container: format!("enum {}", enumeration.name),
                        kind: nested_kind(nested),
                    });
                }
            }
        }
        Ok(())
    })
}

fn nested_kind(node: &TypeNode) -> &'static str {
    match node {
        TypeNode::Class(_) => "nested class",
        TypeNode::Enum(_) => "nested enum",
    }
}

fn emit_enum_value(w: &mut SourceWriter, value: &EnumValueMember) {
    w.doc(&value.doc);

    let name = to_pascal_case(&value.name);
    if value.is_string_literal() {
        w.line(format!("[EnumMember(Value = {})]", value.value));
        w.line(format!("{name},"));
    } else {
        w.line(format!("{name} = {},", value.value));
    }
}

#[cfg(test)]
#[path = "csharp/csharp_tests.rs"]
mod csharp_tests;
