#![allow(non_snake_case)]

use super::*;
use crate::ir::{EnumValueMember, Parameter};

fn emitter() -> CSharpEmitter {
    CSharpEmitter::new(&GeneratorConfig::default())
}

fn render(node: &TypeNode) -> String {
    let mut writer = SourceWriter::new("\t");
    emit_type(&mut writer, node).unwrap();
    writer.finish()
}

fn property(name: &str, ty: &str) -> ClassMember {
    ClassMember::Property(PropertyMember {
        name: name.to_string(),
        ty: ty.to_string(),
        doc: String::new(),
    })
}

fn value(name: &str, literal: &str) -> EnumMember {
    EnumMember::Value(EnumValueMember {
        name: name.to_string(),
        value: literal.to_string(),
        doc: String::new(),
    })
}

#[test]
fn CSharpEmitter___emit_unit___writes_usings_then_namespace() {
    let root: TypeNode = ClassNode::new("Game")
        .with_namespace("ButlerdSharp.Protocol.Structs")
        .into();

    let source = emitter().emit_unit(&root).unwrap();

    assert!(source.starts_with("using System.Runtime.Serialization;\n"));
    assert!(source.contains(
        "using ButlerdSharp.Protocol.Enums;\n\nnamespace ButlerdSharp.Protocol.Structs\n{\n\tpublic class Game\n\t{\n\t}\n}\n"
    ));
}

#[test]
fn CSharpEmitter___emit_unit___requires_root_namespace() {
    let root: TypeNode = ClassNode::new("Game").into();

    assert_eq!(
        emitter().emit_unit(&root),
        Err(CodegenError::MissingNamespace("Game".into()))
    );
}

#[test]
fn CSharpEmitter___emit_unit___honors_configured_indent() {
    let config = GeneratorConfig {
        indent: "    ".into(),
        ..GeneratorConfig::default()
    };
    let root: TypeNode = ClassNode::new("Game").with_namespace("N").into();

    let source = CSharpEmitter::new(&config).emit_unit(&root).unwrap();

    assert!(source.contains("namespace N\n{\n    public class Game\n    {\n    }\n}\n"));
}

#[test]
fn emit_type___class_header_carries_modifiers() {
    let node: TypeNode = ClassNode::new("Profile").static_class().partial().into();

    assert!(render(&node).starts_with("public static partial class Profile\n"));
}

#[test]
fn emit_type___property_with_renamed_display_gets_json_property() {
    let node: TypeNode = ClassNode::new("Response").with_member(property("gameId", "int")).into();

    let source = render(&node);

    assert!(source.contains("\t[JsonProperty(\"gameId\")]\n\tpublic int GameId { get; set; }\n"));
}

#[test]
fn emit_type___property_matching_schema_name_has_no_attribute() {
    let node: TypeNode = ClassNode::new("Response").with_member(property("Id", "string")).into();

    let source = render(&node);

    assert!(!source.contains("JsonProperty"));
    assert!(source.contains("public string Id { get; set; }"));
}

#[test]
fn emit_type___self_colliding_property_gets_value_suffix() {
    let node: TypeNode = ClassNode::new("Game").with_member(property("game", "string")).into();

    let source = render(&node);

    assert!(source.contains("[JsonProperty(\"game\")]\n\tpublic string GameValue { get; set; }"));
}

#[test]
fn emit_type___members_are_separated_by_blank_lines() {
    let node: TypeNode = ClassNode::new("List")
        .with_member(ClassMember::Constant(ConstantMember {
            name: "Id".into(),
            ty: "string".into(),
            value: "\"Profile.List\"".into(),
            doc: String::new(),
        }))
        .with_member(property("a", "int"))
        .into();

    let source = render(&node);

    assert!(source.contains(
        "\tpublic const string Id = \"Profile.List\";\n\n\t[JsonProperty(\"a\")]\n"
    ));
}

#[test]
fn emit_type___optional_parameters_default_to_null() {
    let node: TypeNode = ClassNode::new("Request")
        .with_member(property("id", "int"))
        .with_member(property("limit", "int?"))
        .with_json_constructor(false)
        .into();

    let source = render(&node);

    assert!(source.contains("\t[JsonConstructor]\n\tpublic Request(int id, int? limit = null)\n\t{\n"));
    assert!(source.contains("\t\tthis.Id = id;\n\t\tthis.Limit = limit;\n"));
}

#[test]
fn emit_type___named_method_renders_return_type_and_body() {
    let method = MethodMember::named("SendAsync", "Task<Response>")
        .with_parameter("jsonRpc", "JsonRpc")
        .with_body_line("return null;");
    let node: TypeNode = ClassNode::new("Request")
        .with_member(ClassMember::Method(method))
        .into();

    let source = render(&node);

    assert!(source.contains(
        "\tpublic Task<Response> SendAsync(JsonRpc jsonRpc)\n\t{\n\t\treturn null;\n\t}\n"
    ));
}

#[test]
fn emit_type___constructor_without_parameters() {
    let mut class = ClassNode::new("Request");
    class.members.push(ClassMember::Method(MethodMember {
        kind: MethodKind::Constructor,
        parameters: Vec::<Parameter>::new(),
        attributes: vec!["[JsonConstructor]".into()],
        body: Vec::new(),
        doc: String::new(),
    }));

    let source = render(&class.into());

    assert!(source.contains("\tpublic Request()\n\t{\n\t}\n"));
}

#[test]
fn emit_type___numeric_enum_has_no_converter() {
    let mut node = EnumNode::new("Level");
    node.members.push(value("low", "1"));
    node.members.push(value("high", "2"));

    let source = render(&node.into());

    assert!(!source.contains("StringEnumConverter"));
    assert!(source.contains("\tLow = 1,\n\n\tHigh = 2,\n"));
}

#[test]
fn emit_type___string_enum_uses_converter_and_enum_member() {
    let mut node = EnumNode::new("Status");
    node.members.push(value("in-progress", "\"in-progress\""));

    let source = render(&node.into());

    assert!(source.starts_with("[JsonConverter(typeof(StringEnumConverter))]\npublic enum Status\n"));
    assert!(source.contains("\t[EnumMember(Value = \"in-progress\")]\n\tInProgress,\n"));
}

#[test]
fn emit_type___nested_type_in_enum_is_invalid() {
    let mut node = EnumNode::new("BuildState");
    node.members.push(EnumMember::Nested(ClassNode::new("Inner").into()));

    let mut writer = SourceWriter::new("\t");
    let result = emit_type(&mut writer, &node.into());

    assert_eq!(
        result,
        Err(CodegenError::InvalidMember {
            container: "enum BuildState".into(),
            kind: "nested class",
        })
    );
}

#[test]
fn emit_type___docs_precede_attributes() {
    let mut node = EnumNode::new("Status").with_doc("Status of a thing");
    node.members.push(value("a", "\"a\""));

    let source = render(&node.into());

    assert!(source.starts_with(
        "/// <summary>\n/// Status of a thing\n/// </summary>\n[JsonConverter(typeof(StringEnumConverter))]\n"
    ));
}
