//! butlergen-codegen - C# bindings from the butlerd schema.
//!
//! Turns a [`SchemaDocument`] into one C# source unit per request,
//! notification, struct and enum. Generated requests expose
//! `SendAsync(JsonRpc)`, built on StreamJsonRpc; every type is annotated for
//! Newtonsoft.Json.
//!
//! # Architecture
//!
//! ```text
//! SchemaDocument
//!     ↓
//!  [TreeBuilder]   dotted names → nested partial classes, types mapped
//!     ↓
//!    IR (TypeNode)
//!     ↓
//!  [CSharpEmitter] → <Category>/<Name>.cs
//! ```
//!
//! [`Compiler`] drives all four categories and collects failures as
//! [`Diagnostic`]s instead of aborting the run.
//!
//! # Type mapping
//!
//! | Schema | C# |
//! |--------|----|
//! | `number` | `int` |
//! | `boolean` | `bool` |
//! | `RFCDate` | `string` |
//! | `Cursor` | `bool` |
//! | `Actions` | `Action[]` |
//! | `{ [key: K]: V }` | `Dictionary<K, V>` |
//! | optional `T` | `T?` |
//!
//! # Usage
//!
//! ```rust
//! use butlergen_codegen::{Category, Compiler};
//! use butlergen_core::{GeneratorConfig, SchemaDocument};
//!
//! let document = SchemaDocument::from_json(r#"{
//!     "requests": [{
//!         "method": "Version.Get",
//!         "doc": "Retrieves the daemon version",
//!         "params": { "fields": [] },
//!         "result": { "fields": [{ "name": "version", "type": "string" }] }
//!     }],
//!     "notifications": [],
//!     "structTypes": [],
//!     "enumTypes": []
//! }"#).unwrap();
//!
//! let report = Compiler::new(&document, &GeneratorConfig::default()).compile();
//! assert!(report.is_success());
//!
//! let unit = report.find(Category::Requests, "Version.Get").unwrap();
//! assert!(unit.source.contains("public static partial class Version"));
//! assert_eq!(unit.id.relative_path(), std::path::Path::new("Requests/Version.Get.cs"));
//! ```

pub mod builder;
pub mod compile;
pub mod csharp;
pub mod error;
pub mod ir;
pub mod naming;
pub mod patches;
pub mod types;
pub mod unit;
pub mod writer;

pub use builder::TreeBuilder;
pub use compile::{CompileReport, Compiler};
pub use csharp::CSharpEmitter;
pub use error::{CodegenError, CodegenResult};
pub use ir::{ClassMember, ClassNode, EnumMember, EnumNode, TypeNode};
pub use unit::{Category, Diagnostic, OutputUnit, UnitId};

use butlergen_core::{GeneratorConfig, SchemaResult, SchemaSource};
#[doc(no_inline)]
pub use butlergen_core::SchemaDocument;

/// Load a document from `source` and compile it.
///
/// Fails only when the document cannot be loaded; unit failures are reported
/// in the returned [`CompileReport`].
pub fn generate(source: &dyn SchemaSource, config: &GeneratorConfig) -> SchemaResult<CompileReport> {
    let document = source.load()?;
    tracing::info!(source = %source.describe(), summary = ?document.summary(), "Schema loaded");

    Ok(Compiler::new(&document, config).compile())
}
