//! Application layer for Crudgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (BackendGenerator, FrontendGenerator)
//! - **Resolver**: template lookup with deterministic fallback
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or matrix logic itself. All derivation rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod resolver;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main services
pub use services::{BackendGenerator, FrontendGenerator, GenerationReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateCatalog, TemplateEngine};

pub use error::ApplicationError;
pub use resolver::TemplateResolver;
