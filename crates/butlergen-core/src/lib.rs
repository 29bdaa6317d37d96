//! butlergen-core - Schema model, configuration, and error types
//!
//! This crate provides the foundational types shared by the butlergen compiler:
//! - [`SchemaDocument`] and its spec records, parsed from the butlerd schema JSON
//! - [`SchemaSource`] for handing a ready schema document to the compiler
//! - [`GeneratorConfig`] for generator configuration
//! - [`SchemaError`] for fatal, run-wide errors

mod config;
mod error;
mod schema;
mod source;

pub use config::GeneratorConfig;
pub use error::{SchemaError, SchemaResult};
pub use schema::{
    Caller, EnumTypeSpec, EnumValueSpec, FieldSpec, NotificationSpec, RequestSpec,
    SchemaDocument, SchemaSummary, StructSpec, StructTypeSpec,
};
pub use source::{FileSource, SchemaSource, StaticSource};

/// Log levels understood by the generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::str::FromStr for LogLevel {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(SchemaError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FieldSpec, GeneratorConfig, LogLevel, SchemaDocument, SchemaError, SchemaResult,
        SchemaSource,
    };
}
