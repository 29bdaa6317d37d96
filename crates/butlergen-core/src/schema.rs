//! The butlerd schema document
//!
//! The document is a flat catalog: request methods, notification methods,
//! struct types and enum types. Method names are dotted (`Profile.List`);
//! field types are raw strings (`number`, `Profile[]`, `{ [key: string]: number }`)
//! that the code generator maps later.
//!
//! # Example
//!
//! ```
//! use butlergen_core::SchemaDocument;
//!
//! let doc = SchemaDocument::from_json(r#"{
//!     "requests": [{
//!         "method": "Profile.List",
//!         "doc": "Lists remembered profiles",
//!         "params": { "fields": null },
//!         "result": { "fields": [
//!             { "name": "profiles", "doc": "", "type": "Profile[]", "optional": false }
//!         ] }
//!     }],
//!     "notifications": [],
//!     "structTypes": [],
//!     "enumTypes": []
//! }"#).unwrap();
//!
//! assert_eq!(doc.requests[0].result.fields[0].ty, "Profile[]");
//! ```

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A parsed and validated schema document.
///
/// All four collections are required in the JSON input; a document missing
/// one of them is rejected as malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    pub requests: Vec<RequestSpec>,
    pub notifications: Vec<NotificationSpec>,
    pub struct_types: Vec<StructTypeSpec>,
    pub enum_types: Vec<EnumTypeSpec>,
}

/// Which side of the connection issues a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Caller {
    Client,
    Server,
}

/// A request method: params in, result out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: String,

    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub caller: Option<Caller>,

    #[serde(default)]
    pub params: StructSpec,

    #[serde(default)]
    pub result: StructSpec,
}

/// A fire-and-forget notification method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSpec {
    pub method: String,

    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub params: StructSpec,
}

/// A named struct type from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructTypeSpec {
    pub name: String,

    #[serde(default)]
    pub doc: String,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub fields: Vec<FieldSpec>,
}

/// A named enum type from the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumTypeSpec {
    pub name: String,

    #[serde(default)]
    pub doc: String,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub values: Vec<EnumValueSpec>,
}

/// One enum member.
///
/// `value` is the literal as written in the schema: `1` for numeric members,
/// `"queued"` (quotes included) for string members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumValueSpec {
    pub name: String,

    #[serde(default)]
    pub doc: String,

    pub value: String,
}

impl EnumValueSpec {
    /// Whether the literal is a quoted string rather than a number
    pub fn is_string_literal(&self) -> bool {
        self.value.contains('"')
    }
}

/// The field list of a request's params/result or a notification's params
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructSpec {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub fields: Vec<FieldSpec>,
}

/// A single field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    #[serde(default)]
    pub doc: String,

    /// Raw schema type string
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub optional: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            ty: ty.into(),
            optional: false,
        }
    }

    /// Builder-style helper marking the field optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Builder-style helper attaching documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

/// Entry counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaSummary {
    pub requests: usize,
    pub notifications: usize,
    pub struct_types: usize,
    pub enum_types: usize,
}

impl SchemaSummary {
    /// Number of output units a full compile produces
    pub fn total(&self) -> usize {
        self.requests + self.notifications + self.struct_types + self.enum_types
    }
}

impl SchemaDocument {
    /// Parse and validate a schema document from JSON text
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let de = &mut serde_json::Deserializer::from_str(json);
        let doc: SchemaDocument = serde_path_to_error::deserialize(de)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a schema document from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> SchemaResult<Self> {
        let de = &mut serde_json::Deserializer::from_slice(bytes);
        let doc: SchemaDocument = serde_path_to_error::deserialize(de)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check the uniqueness invariants of the document.
    ///
    /// Every method/type name must be non-empty and unique within its category,
    /// since each one becomes its own output unit. Names are also file names,
    /// so path separators and `.`/`..` are rejected.
    pub fn validate(&self) -> SchemaResult<()> {
        check_names("request", self.requests.iter().map(|r| r.method.as_str()))?;
        check_names(
            "notification",
            self.notifications.iter().map(|n| n.method.as_str()),
        )?;
        check_names("struct", self.struct_types.iter().map(|s| s.name.as_str()))?;
        check_names("enum", self.enum_types.iter().map(|e| e.name.as_str()))?;

        tracing::debug!(
            requests = self.requests.len(),
            notifications = self.notifications.len(),
            struct_types = self.struct_types.len(),
            enum_types = self.enum_types.len(),
            "schema document validated"
        );

        Ok(())
    }

    /// Entry counts per category
    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            requests: self.requests.len(),
            notifications: self.notifications.len(),
            struct_types: self.struct_types.len(),
            enum_types: self.enum_types.len(),
        }
    }
}

fn check_names<'a>(
    category: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> SchemaResult<()> {
    let mut seen = HashSet::new();

    for (index, name) in names.enumerate() {
        if name.is_empty() {
            return Err(SchemaError::EmptyName { category, index });
        }
        if !is_file_safe(name) {
            return Err(SchemaError::UnsafeName {
                category,
                name: name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateName {
                category,
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Characters that would let a name leave its category directory
const UNSAFE_CHARS: [char; 4] = ['/', '\\', ':', '\0'];

fn is_file_safe(name: &str) -> bool {
    !name.contains(UNSAFE_CHARS) && name != "." && name != ".."
}

/// Treat both a missing list and an explicit `null` as empty
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
