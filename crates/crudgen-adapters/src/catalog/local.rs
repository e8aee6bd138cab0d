//! Filesystem-backed template catalog.
//!
//! The catalog is a plain directory tree of template files, organized by
//! artifact family:
//!
//! ```text
//! templates/
//! ├── backend/
//! │   ├── simple-controller.hbs
//! │   ├── get-list-controller.hbs
//! │   ├── test.hbs
//! │   └── docs.hbs
//! └── frontend/
//!     ├── list.vue.hbs
//!     ├── list-composable.hbs
//!     ├── view.vue.hbs
//!     └── view-composable.hbs
//! ```
//!
//! The engine treats this tree as read-only input supplied by the
//! surrounding project; no schema validation happens beyond placeholder
//! compilation downstream.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crudgen_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    error::CrudgenResult,
};

/// Reads templates from a directory tree.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    root: PathBuf,
}

impl LocalCatalog {
    /// Create a catalog rooted at `root`. The directory does not need to
    /// exist yet; lookups against a missing root report `Ok(None)` so the
    /// resolver produces its usual not-found error.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl TemplateCatalog for LocalCatalog {
    fn read(&self, relative: &str) -> CrudgenResult<Option<String>> {
        let path = self.root.join(relative);

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(template = relative, "template loaded from catalog");
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Catalog {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_template() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("backend")).unwrap();
        std::fs::write(temp.path().join("backend/test.hbs"), "hello {{domain}}").unwrap();

        let catalog = LocalCatalog::new(temp.path());
        let text = catalog.read("backend/test.hbs").unwrap();
        assert_eq!(text.as_deref(), Some("hello {{domain}}"));
    }

    #[test]
    fn missing_template_is_none_not_error() {
        let temp = tempfile::tempdir().unwrap();
        let catalog = LocalCatalog::new(temp.path());
        assert!(catalog.read("backend/test.hbs").unwrap().is_none());
    }

    #[test]
    fn missing_root_is_none_not_error() {
        let catalog = LocalCatalog::new("/definitely/not/a/real/catalog");
        assert!(catalog.read("backend/test.hbs").unwrap().is_none());
    }
}
