//! Domain layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (comparable in tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The input domain path could not be parsed. User error; reported
    /// before any I/O happens.
    #[error("invalid domain path '{input}': {reason}")]
    InvalidPath { input: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPath { input, .. } => vec![
                format!("'{}' is not a valid domain path", input),
                "Use dot- or slash-separated segments, e.g. billing.invoice".into(),
                "Example: crudgen backend billing.invoice".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPath { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
