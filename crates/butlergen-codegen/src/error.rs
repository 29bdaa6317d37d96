//! Errors raised while compiling a single unit

use thiserror::Error;

/// Result type alias for unit compilation
pub type CodegenResult<T> = Result<T, CodegenError>;

/// An error that fails one output unit.
///
/// Sibling units are unaffected; the compiler turns these into diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodegenError {
    /// A type string uses syntax the mapper does not understand
    #[error("unsupported type syntax: {0}")]
    UnsupportedType(String),

    /// A member kind that cannot appear in its container
    #[error("{kind} is not allowed inside {container}")]
    InvalidMember {
        container: String,
        kind: &'static str,
    },

    /// Two members of one class would be declared with the same name
    #[error("{name} is declared twice in class {container}")]
    DuplicateMember { container: String, name: String },

    /// A dotted method name with an empty segment
    #[error("empty segment in method name: {0}")]
    EmptySegment(String),

    /// The root of a unit was built without a namespace
    #[error("root type {0} has no namespace")]
    MissingNamespace(String),
}
