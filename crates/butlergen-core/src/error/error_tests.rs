#![allow(non_snake_case)]

use super::*;

#[test]
fn SchemaError___duplicate_name___displays_category_and_name() {
    let err = SchemaError::DuplicateName {
        category: "request",
        name: "Profile.List".into(),
    };

    let display = err.to_string();

    assert_eq!(display, "duplicate request name: Profile.List");
}

#[test]
fn SchemaError___io___keeps_source_error() {
    use std::error::Error as _;

    let err = SchemaError::io(
        "butlerd.json",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );

    assert!(err.to_string().contains("butlerd.json"));
    assert!(err.source().is_some());
}

#[test]
fn SchemaError___from_path_error___records_json_path() {
    #[derive(Debug, serde::Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        count: u32,
    }

    let de = &mut serde_json::Deserializer::from_str(r#"{"inner": {"count": "many"}}"#);
    let path_err = serde_path_to_error::deserialize::<_, Outer>(de).unwrap_err();

    let err: SchemaError = path_err.into();

    match err {
        SchemaError::Malformed { path, .. } => assert_eq!(path, "inner.count"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn SchemaError___from_toml_error___converts_to_config() {
    let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();

    let err: SchemaError = toml_err.into();

    assert!(matches!(err, SchemaError::Config(_)));
}
