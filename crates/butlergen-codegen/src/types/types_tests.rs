#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// map_type tests

#[test_case("number", "int")]
#[test_case("boolean", "bool")]
#[test_case("string", "string")]
#[test_case("Actions", "Action[]")]
#[test_case("Cursor", "bool")]
#[test_case("RFCDate", "string")]
#[test_case("Game", "Game")]
#[test_case("number[]", "int[]"; "number array")]
#[test_case("RFCDate[]", "string[]"; "date array")]
fn map_type___substitutes_primitives(raw: &str, expected: &str) {
    assert_eq!(map_type(raw).unwrap(), expected);
}

#[test]
fn map_type___applies_every_occurrence() {
    assert_eq!(map_type("numbernumber").unwrap(), "intint");
}

#[test]
fn map_type___substitutions_compose() {
    assert_eq!(map_type("booleanRFCDate").unwrap(), "boolstring");
}

#[test_case("{ [key: string]: int }", "Dictionary<string, int>")]
#[test_case("{ [key: string]: string }", "Dictionary<string, string>")]
#[test_case("{ [key: int]: Game }", "Dictionary<int, Game>")]
fn map_type___maps_map_literals(raw: &str, expected: &str) {
    assert_eq!(map_type(raw).unwrap(), expected);
}

#[test]
fn map_type___map_literal_arguments_are_verbatim() {
    assert_eq!(
        map_type("{ [key: string]: number }").unwrap(),
        "Dictionary<string, number>"
    );
}

#[test_case("{ [key: string]: Game[] }"; "array value")]
#[test_case("{ [key: string]: { [key: string]: int } }"; "nested map")]
#[test_case("{ [key: multi word]: int }"; "multi word key")]
#[test_case("List<Game>"; "generic")]
fn map_type___rejects_unsupported_syntax(raw: &str) {
    assert_eq!(
        map_type(raw),
        Err(CodegenError::UnsupportedType(raw.to_string()))
    );
}

// nullable tests

#[test]
fn nullable___appends_marker_when_optional() {
    assert_eq!(nullable("int".into(), true), "int?");
    assert_eq!(nullable("Dictionary<string, int>".into(), true), "Dictionary<string, int>?");
}

#[test]
fn nullable___leaves_required_types_alone() {
    assert_eq!(nullable("Game".into(), false), "Game");
}

// ReferenceResolver tests

fn request_resolver() -> ReferenceResolver {
    ReferenceResolver::for_methods(
        ["Profile.List", "Fetch.Game", "Launch"],
        &["Requests", "Request", "Response"],
        ["Launch"],
    )
}

#[test]
fn ReferenceResolver___resolve___qualifies_colliding_struct() {
    let resolver = request_resolver();

    assert_eq!(resolver.resolve("Profile"), "Structs.Profile");
    assert_eq!(resolver.resolve("Game"), "Structs.Game");
}

#[test]
fn ReferenceResolver___resolve___keeps_array_suffix() {
    let resolver = request_resolver();

    assert_eq!(resolver.resolve("Profile[]"), "Structs.Profile[]");
}

#[test]
fn ReferenceResolver___resolve___qualifies_colliding_enum_with_enums() {
    let resolver = request_resolver();

    assert_eq!(resolver.resolve("Launch"), "Enums.Launch");
}

#[test]
fn ReferenceResolver___resolve___qualifies_generated_names() {
    let resolver = request_resolver();

    assert_eq!(resolver.resolve("Response"), "Structs.Response");
}

#[test]
fn ReferenceResolver___resolve___matches_whole_segments_only() {
    let resolver = request_resolver();

    assert_eq!(resolver.resolve("GameRecord"), "GameRecord");
    assert_eq!(resolver.resolve("Prof"), "Prof");
}

#[test]
fn ReferenceResolver___none___never_qualifies() {
    let resolver = ReferenceResolver::none();

    assert_eq!(resolver.resolve("Profile"), "Profile");
}

// TypeMapper tests

#[test]
fn TypeMapper___field_type___resolves_then_maps() {
    let mapper = TypeMapper::new(request_resolver());
    let field = FieldSpec::new("profiles", "Profile[]");

    assert_eq!(mapper.field_type(&field).unwrap(), "Structs.Profile[]");
}

#[test]
fn TypeMapper___field_type___optional_map_literal_is_nullable_dictionary() {
    let mapper = TypeMapper::default();
    let field = FieldSpec::new("counts", "{ [key: string]: int }").optional();

    assert_eq!(mapper.field_type(&field).unwrap(), "Dictionary<string, int>?");
}

#[test]
fn TypeMapper___field_type___optional_primitive_is_nullable() {
    let mapper = TypeMapper::default();
    let field = FieldSpec::new("gameId", "number").optional();

    assert_eq!(mapper.field_type(&field).unwrap(), "int?");
}

#[test]
fn TypeMapper___field_type___propagates_unsupported_type() {
    let mapper = TypeMapper::default();
    let field = FieldSpec::new("bad", "Map<string, int>");

    assert!(matches!(
        mapper.field_type(&field),
        Err(CodegenError::UnsupportedType(_))
    ));
}
