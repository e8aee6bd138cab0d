//! Infrastructure adapters for Crudgen.
//!
//! This crate implements the ports defined in
//! `crudgen-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod catalog;
pub mod engine;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::{LocalCatalog, MemoryCatalog};
pub use engine::HandlebarsEngine;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
