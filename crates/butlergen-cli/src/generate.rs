//! Generate command implementation

use anyhow::{Context, Result};
use butlergen_codegen::{CompileReport, Compiler};
use butlergen_core::{FileSource, GeneratorConfig, SchemaSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub parallel: bool,
    pub log_level: Option<String>,
}

/// Load `butlergen.toml` (or the defaults) and apply command-line overrides
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(namespace) = overrides.namespace {
        config.base_namespace = namespace;
    }
    if overrides.parallel {
        config.parallel = true;
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Compile `schema` and write every unit below `output`.
///
/// Units that compiled are written even when others failed; the command still
/// fails in that case so the caller sees a non-zero exit.
pub fn run(schema: &Path, output: &Path, config: &GeneratorConfig) -> Result<CompileReport> {
    let source = FileSource::new(schema);
    let document = source
        .load()
        .with_context(|| format!("Failed to load schema: {}", source.describe()))?;

    let report = Compiler::new(&document, config).compile();
    let written = write_units(&report, output)?;

    println!("✓ Wrote {} units to {}", written.len(), output.display());

    if !report.is_success() {
        for diagnostic in &report.diagnostics {
            eprintln!("✗ {diagnostic}");
        }
        anyhow::bail!("{} unit(s) failed to compile", report.diagnostics.len());
    }

    Ok(report)
}

/// Write each unit to `<output>/<Category>/<Name>.cs`, overwriting existing files
pub fn write_units(report: &CompileReport, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(report.units.len());

    for unit in &report.units {
        let path = output.join(unit.id.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        fs::write(&path, &unit.source).with_context(|| format!("Failed to write {path:?}"))?;
        tracing::debug!(unit = %unit.id, path = %path.display(), "Wrote unit");
        written.push(path);
    }

    Ok(written)
}
