//! Schema sources
//!
//! The compiler never fetches the schema itself. A [`SchemaSource`] hands it a
//! ready document; how the bytes were obtained (download, cache, vendored file)
//! is up to the host.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::SchemaDocument;
use std::path::{Path, PathBuf};

/// Something that can produce a schema document
pub trait SchemaSource {
    /// Load, parse and validate the document
    fn load(&self) -> SchemaResult<SchemaDocument>;

    /// Human-readable origin, used in log output
    fn describe(&self) -> String;
}

/// A schema document stored on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSource for FileSource {
    fn load(&self) -> SchemaResult<SchemaDocument> {
        tracing::debug!(path = %self.path.display(), "reading schema document");

        let bytes = std::fs::read(&self.path).map_err(|e| SchemaError::io(&self.path, e))?;
        SchemaDocument::from_slice(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A schema document already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl SchemaSource for StaticSource {
    fn load(&self) -> SchemaResult<SchemaDocument> {
        SchemaDocument::from_json(&self.json)
    }

    fn describe(&self) -> String {
        format!("<in-memory, {} bytes>", self.json.len())
    }
}
