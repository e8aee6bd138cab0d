//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generators need from external systems.
//! The `crudgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderData;
use crate::error::CrudgenResult;

/// Port for output filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Writes unconditionally overwrite existing files — generation is
/// idempotent by content, not by preservation.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. No-op if it exists.
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()>;

    /// Write content to a file, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for raw template lookup.
///
/// The catalog is read-only input supplied by the surrounding project.
/// `read` distinguishes "not present" (`Ok(None)`, drives the resolver's
/// fallback) from "could not be read" (`Err`, fatal).
///
/// Implemented by:
/// - `crudgen_adapters::catalog::LocalCatalog` (directory tree of `.hbs` files)
/// - `crudgen_adapters::catalog::MemoryCatalog` (built-in / testing)
pub trait TemplateCatalog: Send + Sync {
    /// Read the template at a catalog-relative path.
    fn read(&self, relative: &str) -> CrudgenResult<Option<String>>;
}

/// Port for template compilation.
///
/// Placeholder substitution plus whatever conditionals the underlying
/// engine natively supports. Side-effect free: never reads or writes files.
///
/// Implemented by:
/// - `crudgen_adapters::engine::HandlebarsEngine`
pub trait TemplateEngine: Send + Sync {
    /// Compile a template string against a data bundle into final text.
    fn compile(&self, template: &str, data: &RenderData) -> CrudgenResult<String>;
}
