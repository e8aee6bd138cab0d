//! Application layer errors.
//!
//! These represent failures in orchestration — catalog lookups, template
//! compilation, output writes — not business logic. Business logic errors
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during artifact generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template exists for the attempted catalog path (after fallback).
    /// Catalog misconfiguration; fatal to the whole invocation.
    #[error("template not found: {attempted}")]
    TemplateNotFound { attempted: String },

    /// Template syntax is malformed. Always a catalog authoring bug, never
    /// a function of user input — non-recoverable, no partial writes.
    #[error("template compilation failed for '{template}': {reason}")]
    TemplateCompile { template: String, reason: String },

    /// The catalog itself could not be read (permissions, I/O).
    #[error("failed to read template catalog at {path}: {reason}")]
    Catalog { path: String, reason: String },

    /// Output directory/file operation failed. Propagated verbatim and
    /// fatal to the current invocation.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { attempted } => vec![
                format!("No template at: {}", attempted),
                "Check the template catalog directory passed via --templates".into(),
                "Shape-specific templates fall back to the simple template when absent".into(),
            ],
            Self::TemplateCompile { template, .. } => vec![
                format!("The template '{}' has malformed syntax", template),
                "This is a catalog authoring bug, not an input problem".into(),
                "Fix the template and re-run; no partial file was written".into(),
            ],
            Self::Catalog { path, .. } => vec![
                format!("Could not read: {}", path),
                "Check that the catalog directory exists and is readable".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Already-written files are left in place; re-run to regenerate".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateCompile { .. } => ErrorCategory::Internal,
            Self::Catalog { .. } => ErrorCategory::Configuration,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
