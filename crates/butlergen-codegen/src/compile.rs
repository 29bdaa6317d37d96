//! Whole-schema compilation into independent units.
//!
//! Units are compiled in a fixed order (requests, notifications, structs,
//! enums; each in document order). A unit that fails becomes a
//! [`Diagnostic`] and produces no output; the other units are unaffected.

use crate::builder::TreeBuilder;
use crate::csharp::CSharpEmitter;
use crate::error::CodegenResult;
use crate::ir::TypeNode;
use crate::unit::{Category, Diagnostic, OutputUnit, UnitId};
use butlergen_core::{
    EnumTypeSpec, GeneratorConfig, NotificationSpec, RequestSpec, SchemaDocument, StructTypeSpec,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Result of compiling a schema document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileReport {
    pub units: Vec<OutputUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileReport {
    /// No unit failed
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&OutputUnit> {
        self.units
            .iter()
            .find(|unit| unit.id.category == category && unit.id.name == name)
    }

    pub fn units_in(&self, category: Category) -> impl Iterator<Item = &OutputUnit> {
        self.units
            .iter()
            .filter(move |unit| unit.id.category == category)
    }
}

/// One schema entity waiting to be compiled
#[derive(Debug, Clone, Copy)]
enum Job<'a> {
    Request(&'a RequestSpec),
    Notification(&'a NotificationSpec),
    Struct(&'a StructTypeSpec),
    Enum(&'a EnumTypeSpec),
}

impl Job<'_> {
    fn id(&self) -> UnitId {
        match self {
            Job::Request(spec) => UnitId::new(Category::Requests, spec.method.as_str()),
            Job::Notification(spec) => UnitId::new(Category::Notifications, spec.method.as_str()),
            Job::Struct(spec) => UnitId::new(Category::Structs, spec.name.as_str()),
            Job::Enum(spec) => UnitId::new(Category::Enums, spec.name.as_str()),
        }
    }
}

/// Compiles a schema document into C# units
#[derive(Debug)]
pub struct Compiler<'a> {
    document: &'a SchemaDocument,
    parallel: bool,
    builder: TreeBuilder,
    emitter: CSharpEmitter,
}

impl<'a> Compiler<'a> {
    pub fn new(document: &'a SchemaDocument, config: &GeneratorConfig) -> Self {
        Self {
            document,
            parallel: config.parallel,
            builder: TreeBuilder::new(document, config),
            emitter: CSharpEmitter::new(config),
        }
    }

    /// Compile every entity of the document
    pub fn compile(&self) -> CompileReport {
        let jobs = self.jobs();

        let results: Vec<(UnitId, CodegenResult<String>)> = if self.parallel {
            jobs.par_iter().map(|job| self.run(*job)).collect()
        } else {
            jobs.iter().map(|job| self.run(*job)).collect()
        };

        let mut report = CompileReport::default();
        for (id, result) in results {
            match result {
                Ok(source) => report.units.push(OutputUnit { id, source }),
                Err(err) => {
                    warn!(unit = %id, error = %err, "Unit failed to compile");
                    report.diagnostics.push(Diagnostic {
                        unit: id,
                        message: err.to_string(),
                    });
                }
            }
        }

        info!(
            units = report.units.len(),
            diagnostics = report.diagnostics.len(),
            parallel = self.parallel,
            "Schema compiled"
        );

        report
    }

    pub fn compile_request(&self, spec: &RequestSpec) -> CodegenResult<String> {
        self.emit(self.builder.build_request(spec)?)
    }

    pub fn compile_notification(&self, spec: &NotificationSpec) -> CodegenResult<String> {
        self.emit(self.builder.build_notification(spec)?)
    }

    pub fn compile_struct(&self, spec: &StructTypeSpec) -> CodegenResult<String> {
        self.emit(self.builder.build_struct(spec)?)
    }

    pub fn compile_enum(&self, spec: &EnumTypeSpec) -> CodegenResult<String> {
        self.emit(self.builder.build_enum(spec)?)
    }

    fn jobs(&self) -> Vec<Job<'a>> {
        let document = self.document;

        document
            .requests
            .iter()
            .map(Job::Request)
            .chain(document.notifications.iter().map(Job::Notification))
            .chain(document.struct_types.iter().map(Job::Struct))
            .chain(document.enum_types.iter().map(Job::Enum))
            .collect()
    }

    fn run(&self, job: Job<'_>) -> (UnitId, CodegenResult<String>) {
        let id = job.id();
        debug!(unit = %id, "Compiling unit");

        let result = match job {
            Job::Request(spec) => self.compile_request(spec),
            Job::Notification(spec) => self.compile_notification(spec),
            Job::Struct(spec) => self.compile_struct(spec),
            Job::Enum(spec) => self.compile_enum(spec),
        };

        (id, result)
    }

    fn emit(&self, tree: TypeNode) -> CodegenResult<String> {
        self.emitter.emit_unit(&tree)
    }
}
