//! Generator configuration

use crate::LogLevel;
use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Imports every emitted unit starts with, before the per-namespace ones
const DEFAULT_USINGS: &[&str] = &[
    "System.Runtime.Serialization",
    "System.Collections.Generic",
    "System.Threading.Tasks",
    "Newtonsoft.Json",
    "Newtonsoft.Json.Converters",
    "StreamJsonRpc",
];

/// Generator configuration, usually read from `butlergen.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Namespace that `Requests`, `Notifications`, `Structs` and `Enums` live under
    #[serde(default = "default_base_namespace")]
    pub base_namespace: String,

    /// One level of indentation in emitted source
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Extra `using` directives appended after the built-in ones
    #[serde(default)]
    pub extra_usings: Vec<String>,

    /// Compile units on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_namespace() -> String {
    "ButlerdSharp.Protocol".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_namespace: default_base_namespace(),
            indent: default_indent(),
            extra_usings: Vec::new(),
            parallel: false,
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> SchemaResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> SchemaResult<()> {
        if self.base_namespace.is_empty() {
            return Err(SchemaError::Config(
                "base_namespace cannot be empty".to_string(),
            ));
        }

        let well_formed = self.base_namespace.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        });
        if !well_formed {
            return Err(SchemaError::Config(format!(
                "base_namespace is not a valid namespace: {}",
                self.base_namespace
            )));
        }

        if self.indent.is_empty() || !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(SchemaError::Config(
                "indent must be one or more spaces or tabs".to_string(),
            ));
        }

        self.level()?;

        Ok(())
    }

    /// The configured log level
    pub fn level(&self) -> SchemaResult<LogLevel> {
        self.log_level.parse()
    }

    /// Full, ordered `using` list for an emitted unit.
    ///
    /// Built-in imports first, then the sibling `Structs`/`Enums` namespaces,
    /// then any configured extras not already present.
    pub fn usings(&self) -> Vec<String> {
        let mut all: Vec<String> = DEFAULT_USINGS.iter().map(|s| s.to_string()).collect();
        all.push(format!("{}.Structs", self.base_namespace));
        all.push(format!("{}.Enums", self.base_namespace));

        for extra in &self.extra_usings {
            if !all.contains(extra) {
                all.push(extra.clone());
            }
        }

        all
    }
}
