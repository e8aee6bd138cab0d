//! In-memory template catalog.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crudgen_core::{application::ports::TemplateCatalog, error::CrudgenResult};

use crate::catalog::builtin;

/// Thread-safe in-memory catalog, used for the built-in template set and
/// in tests.
#[derive(Clone)]
pub struct MemoryCatalog {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog seeded with the shipped default templates.
    pub fn with_builtin() -> Self {
        let catalog = Self::new();
        for (path, text) in builtin::all_templates() {
            catalog.insert(path, text);
        }
        catalog
    }

    /// Insert or replace a template.
    pub fn insert(&self, relative: impl Into<String>, text: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .insert(relative.into(), text.into());
    }

    /// Remove a template (testing helper for partial-catalog scenarios).
    pub fn remove(&self, relative: &str) {
        self.inner.write().unwrap().remove(relative);
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog for MemoryCatalog {
    fn read(&self, relative: &str) -> CrudgenResult<Option<String>> {
        Ok(self.inner.read().unwrap().get(relative).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_all_eight_templates() {
        let catalog = MemoryCatalog::with_builtin();
        assert_eq!(catalog.len(), 8);

        for path in [
            "backend/simple-controller.hbs",
            "backend/get-list-controller.hbs",
            "backend/test.hbs",
            "backend/docs.hbs",
            "frontend/list.vue.hbs",
            "frontend/list-composable.hbs",
            "frontend/view.vue.hbs",
            "frontend/view-composable.hbs",
        ] {
            assert!(catalog.read(path).unwrap().is_some(), "missing: {path}");
        }
    }

    #[test]
    fn insert_and_remove() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert("backend/test.hbs", "x");
        assert_eq!(catalog.read("backend/test.hbs").unwrap().as_deref(), Some("x"));

        catalog.remove("backend/test.hbs");
        assert!(catalog.read("backend/test.hbs").unwrap().is_none());
    }
}
