//! Schema type string to C# type mapping.
//!
//! Schema types are plain strings. Mapping is textual:
//!
//! | Schema | C# |
//! |--------|----|
//! | `{ [key: K]: V }` | `Dictionary<K, V>` |
//! | `number` | `int` |
//! | `boolean` | `bool` |
//! | `Actions` | `Action[]` |
//! | `Cursor` | `bool` |
//! | `RFCDate` | `string` |
//! | `Profile[]` | `Profile[]` (arrays map element-wise by substitution) |
//!
//! Anything else is assumed to be a struct or enum name from the catalog.

use crate::error::{CodegenError, CodegenResult};
use butlergen_core::FieldSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

#[allow(clippy::expect_used)] // Safe: the pattern is a compile-time constant
static MAP_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\{ \[key: (?P<key>\w+)\]: (?P<value>\w+) \}\s*$")
        .expect("map literal pattern is valid")
});

/// Verbatim substitutions, applied in order
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("number", "int"),
    ("boolean", "bool"),
    ("Actions", "Action[]"),
    ("Cursor", "bool"),
    ("RFCDate", "string"),
];

/// Map a raw schema type string to a C# type string.
///
/// Map literals become `Dictionary<K, V>` with `K` and `V` copied verbatim.
/// Everything else goes through the substitution table. Generic or map syntax
/// that is not a single-word map literal is rejected.
///
/// # Examples
///
/// ```
/// use butlergen_codegen::types::map_type;
///
/// assert_eq!(map_type("number").unwrap(), "int");
/// assert_eq!(map_type("{ [key: string]: int }").unwrap(), "Dictionary<string, int>");
/// assert_eq!(map_type("Profile[]").unwrap(), "Profile[]");
/// assert!(map_type("{ [key: string]: Game[] }").is_err());
/// ```
pub fn map_type(raw: &str) -> CodegenResult<String> {
    if let Some(captures) = MAP_LITERAL.captures(raw) {
        return Ok(format!(
            "Dictionary<{}, {}>",
            &captures["key"], &captures["value"]
        ));
    }

    if raw.contains(['{', '}', '<', '>']) {
        return Err(CodegenError::UnsupportedType(raw.to_string()));
    }

    Ok(SUBSTITUTIONS
        .iter()
        .fold(raw.to_string(), |ty, (from, to)| ty.replace(from, to)))
}

/// Append the nullability marker when `optional` is set
pub fn nullable(ty: String, optional: bool) -> String {
    if optional { format!("{ty}?") } else { ty }
}

/// Namespace prefix used for a disambiguated struct reference
const STRUCTS_QUALIFIER: &str = "Structs";

/// Namespace prefix used for a disambiguated enum reference
const ENUMS_QUALIFIER: &str = "Enums";

/// Rewrites type references that would be shadowed by generated containers.
///
/// Inside `Requests.Profile.List`, a bare `Profile` resolves to the container
/// class rather than the catalog struct. Names that collide with any container
/// the unit's category generates are qualified as `Structs.X` (or `Enums.X`
/// for enum types). Matching is by whole name; array suffixes are kept.
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver {
    scoped: HashSet<String>,
    enums: HashSet<String>,
}

impl ReferenceResolver {
    /// A resolver that never qualifies anything
    pub fn none() -> Self {
        Self::default()
    }

    /// Build the collision set for one category.
    ///
    /// `methods` are the dotted method names of the category; `generated` are
    /// container names the builder adds on its own (`Requests`, `Request`, ...).
    pub fn for_methods<'a>(
        methods: impl IntoIterator<Item = &'a str>,
        generated: &[&str],
        enum_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut scoped: HashSet<String> = methods
            .into_iter()
            .flat_map(|m| m.split('.'))
            .map(str::to_string)
            .collect();
        scoped.extend(generated.iter().map(|s| s.to_string()));

        Self {
            scoped,
            enums: enum_names.into_iter().map(str::to_string).collect(),
        }
    }

    /// Qualify `raw` if its element type collides with a generated container
    pub fn resolve(&self, raw: &str) -> String {
        let element = raw.trim_end_matches("[]");

        if !self.scoped.contains(element) {
            return raw.to_string();
        }

        let qualifier = if self.enums.contains(element) {
            ENUMS_QUALIFIER
        } else {
            STRUCTS_QUALIFIER
        };

        format!("{qualifier}.{raw}")
    }
}

/// Field type mapping for one category: disambiguate, map, then mark nullable
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    resolver: ReferenceResolver,
}

impl TypeMapper {
    pub fn new(resolver: ReferenceResolver) -> Self {
        Self { resolver }
    }

    /// C# type of a field
    pub fn field_type(&self, field: &FieldSpec) -> CodegenResult<String> {
        let resolved = self.resolver.resolve(&field.ty);
        let mapped = map_type(&resolved)?;
        Ok(nullable(mapped, field.optional))
    }
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
