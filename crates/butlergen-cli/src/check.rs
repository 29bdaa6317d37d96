//! Check command implementation

use anyhow::{Context, Result};
use butlergen_core::{FileSource, SchemaSource, SchemaSummary};
use std::path::Path;

/// Load and validate a schema document, printing its entry counts
pub fn run(schema: &Path) -> Result<SchemaSummary> {
    println!("Checking schema: {}", schema.display());

    let source = FileSource::new(schema);
    let document = source
        .load()
        .with_context(|| format!("Failed to load schema: {}", source.describe()))?;
    let summary = document.summary();

    println!("✓ Requests: {}", summary.requests);
    println!("✓ Notifications: {}", summary.notifications);
    println!("✓ Structs: {}", summary.struct_types);
    println!("✓ Enums: {}", summary.enum_types);
    println!("\nSchema is valid!");

    Ok(summary)
}
