//! Crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Crudgen
//! CRUD-scaffolding engine, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudgen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (BackendGenerator, FrontendGenerator)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateCatalog, Engine)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, LocalCatalog, Hbs)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (NamingBundle, ControllerArchetype)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudgen_core::{
//!     application::BackendGenerator,
//!     domain::OutputLayout,
//! };
//!
//! // Adapters are injected; see crudgen-adapters.
//! let generator = BackendGenerator::new(catalog, engine, filesystem,
//!     OutputLayout::default(), ".");
//! let report = generator.generate("billing.invoice")?;
//! println!("{} files written", report.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BackendGenerator, FrontendGenerator, GenerationReport, TemplateResolver,
        ports::{Filesystem, TemplateCatalog, TemplateEngine},
    };
    pub use crate::domain::{
        ArchetypeShape, ArtifactKind, ControllerArchetype, HttpMethod, NamingBundle, OutputLayout,
        RenderData, RenderValue,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
