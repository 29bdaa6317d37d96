#![allow(non_snake_case)]

use super::*;

fn property(name: &str, ty: &str) -> ClassMember {
    ClassMember::Property(PropertyMember {
        name: name.to_string(),
        ty: ty.to_string(),
        doc: String::new(),
    })
}

fn parameter_names(class: &ClassNode) -> Vec<String> {
    class
        .constructor()
        .map(|ctor| ctor.parameters.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn ClassNode___with_json_constructor___orders_required_before_optional() {
    let class = ClassNode::new("Response")
        .with_member(property("a", "int?"))
        .with_member(property("b", "string"))
        .with_member(property("c", "bool?"))
        .with_member(property("d", "Game"))
        .with_json_constructor(false);

    assert_eq!(parameter_names(&class), vec!["b", "d", "a", "c"]);
}

#[test]
fn ClassNode___with_json_constructor___assigns_in_declaration_order() {
    let class = ClassNode::new("Response")
        .with_member(property("a", "int?"))
        .with_member(property("b", "string"))
        .with_json_constructor(false);

    let ctor = class.constructor().unwrap();
    assert_eq!(ctor.body, vec!["this.A = a;", "this.B = b;"]);
}

#[test]
fn ClassNode___with_json_constructor___is_first_member() {
    let class = ClassNode::new("Game")
        .with_member(property("id", "int"))
        .with_json_constructor(false);

    assert!(matches!(&class.members[0], ClassMember::Method(m) if m.is_constructor()));
    assert_eq!(class.members.len(), 2);
}

#[test]
fn ClassNode___with_json_constructor___tags_json_constructor() {
    let class = ClassNode::new("Game")
        .with_member(property("id", "int"))
        .with_json_constructor(false);

    assert_eq!(class.constructor().unwrap().attributes, vec!["[JsonConstructor]"]);
}

#[test]
fn ClassNode___with_json_constructor___escapes_reserved_parameters() {
    let class = ClassNode::new("Request")
        .with_member(property("continue", "bool"))
        .with_json_constructor(false);

    let ctor = class.constructor().unwrap();
    assert_eq!(ctor.parameters[0].name, "@continue");
    assert_eq!(ctor.body, vec!["this.Continue = @continue;"]);
}

#[test]
fn ClassNode___with_json_constructor___camel_cases_separated_field_names() {
    let class = ClassNode::new("Install")
        .with_member(property("install-location", "string"))
        .with_member(property("seconds_run", "int?"))
        .with_json_constructor(false);

    let ctor = class.constructor().unwrap();
    let names: Vec<&str> = ctor.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["installLocation", "secondsRun"]);
    assert_eq!(
        ctor.body,
        vec![
            "this.InstallLocation = installLocation;",
            "this.SecondsRun = secondsRun;"
        ]
    );
}

#[test]
fn ClassNode___with_json_constructor___assigns_renamed_property() {
    let class = ClassNode::new("Game")
        .with_member(property("game", "string"))
        .with_json_constructor(false);

    assert_eq!(class.constructor().unwrap().body, vec!["this.GameValue = game;"]);
}

#[test]
fn ClassNode___with_json_constructor___skips_empty_class_unless_forced() {
    let skipped = ClassNode::new("Response").with_json_constructor(false);
    let forced = ClassNode::new("Request").with_json_constructor(true);

    assert!(skipped.constructor().is_none());
    let ctor = forced.constructor().unwrap();
    assert!(ctor.parameters.is_empty());
    assert!(ctor.body.is_empty());
}

#[test]
fn ClassNode___with_json_constructor___inserts_only_once() {
    let class = ClassNode::new("Game")
        .with_member(property("id", "int"))
        .with_json_constructor(false)
        .with_json_constructor(true);

    let constructors = class
        .members
        .iter()
        .filter(|m| matches!(m, ClassMember::Method(m) if m.is_constructor()))
        .count();
    assert_eq!(constructors, 1);
}

#[test]
fn EnumNode___serializes_as_string___when_any_literal_is_quoted() {
    let mut node = EnumNode::new("BuildState");
    node.members.push(EnumMember::Value(EnumValueMember {
        name: "started".into(),
        value: "\"started\"".into(),
        doc: String::new(),
    }));

    assert!(node.serializes_as_string());
}

#[test]
fn EnumNode___serializes_as_string___false_for_numeric_values() {
    let mut node = EnumNode::new("Level");
    node.members.push(EnumMember::Value(EnumValueMember {
        name: "low".into(),
        value: "1".into(),
        doc: String::new(),
    }));

    assert!(!node.serializes_as_string());
}

#[test]
fn TypeNode___accessors___dispatch_by_kind() {
    let class: TypeNode = ClassNode::new("Game").with_namespace("Ns.Structs").into();
    let enumeration: TypeNode = EnumNode::new("Level").into();

    assert_eq!(class.name(), "Game");
    assert_eq!(class.namespace(), Some("Ns.Structs"));
    assert!(class.as_class().is_some());
    assert_eq!(enumeration.namespace(), None);
    assert!(enumeration.as_enum().is_some());
}

#[test]
fn ClassNode___duplicate_member___finds_property_shadowing_constant() {
    let class = ClassNode::new("Log")
        .with_member(ClassMember::Constant(ConstantMember {
            name: "Id".into(),
            ty: "string".into(),
            value: "\"Log\"".into(),
            doc: String::new(),
        }))
        .with_member(property("id", "string"));

    assert_eq!(class.duplicate_member().as_deref(), Some("Id"));
}

#[test]
fn ClassNode___duplicate_member___compares_normalized_names() {
    let class = ClassNode::new("Install")
        .with_member(property("install-location", "string"))
        .with_member(property("installLocation", "string"));

    assert_eq!(class.duplicate_member().as_deref(), Some("InstallLocation"));
}

#[test]
fn ClassNode___duplicate_member___ignores_constructor_and_distinct_names() {
    let class = ClassNode::new("Game")
        .with_member(property("game", "string"))
        .with_member(property("title", "string"))
        .with_json_constructor(false);

    assert_eq!(class.duplicate_member(), None);
}
