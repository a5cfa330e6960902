//! Errors raised while parsing or applying content paths.

use thiserror::Error;

/// Everything that can go wrong when a path is parsed, walked or mutated.
///
/// All variants are recoverable: a failed edit leaves the caller's current
/// document untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string itself is malformed.
    #[error("invalid path '{path}': {reason}")]
    Syntax { path: String, reason: String },

    /// A segment names a field or element that does not exist.
    #[error("path '{path}' does not exist")]
    NotFound { path: String },

    /// A node has the wrong kind for the requested step or operation.
    #[error("expected {expected} at '{path}', found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    /// A removal index lies outside the array.
    #[error("index {index} is out of range for '{path}' with {len} elements")]
    IndexOutOfRange {
        path: String,
        index: isize,
        len: usize,
    },
}

impl PathError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PathError::Syntax { .. } => "path_syntax",
            PathError::NotFound { .. } => "path_not_found",
            PathError::TypeMismatch { .. } => "path_type_mismatch",
            PathError::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }
}
