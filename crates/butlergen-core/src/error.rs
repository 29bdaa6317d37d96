//! Error types for loading the schema and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema and configuration operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that abort a whole generator run.
///
/// Nothing is emitted when one of these is raised.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Reading a schema or configuration file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema document does not have the expected shape
    #[error("malformed schema at JSON path {path}: {message}")]
    Malformed { path: String, message: String },

    /// Two entries of one category share a name
    #[error("duplicate {category} name: {name}")]
    DuplicateName { category: &'static str, name: String },

    /// An entry has an empty method or type name
    #[error("empty {category} name at index {index}")]
    EmptyName { category: &'static str, index: usize },

    /// A method or type name that cannot be used as an output file name
    #[error("{category} name {name:?} is not a valid file name")]
    UnsafeName { category: &'static str, name: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SchemaError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        SchemaError::Malformed {
            path,
            message: err.into_inner().to_string(),
        }
    }
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
