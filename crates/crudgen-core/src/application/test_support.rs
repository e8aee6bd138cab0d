//! In-crate stub adapters for service tests.
//!
//! The real adapters live in `crudgen-adapters`; the core crate keeps its
//! own minimal stubs so service tests stay free of a dev-dependency cycle.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crate::application::ports::{Filesystem, TemplateCatalog, TemplateEngine};
use crate::domain::{RenderData, RenderValue};
use crate::error::CrudgenResult;

/// Catalog backed by a plain map of relative path → template text.
pub struct StubCatalog {
    templates: HashMap<&'static str, &'static str>,
}

impl StubCatalog {
    pub fn with_templates(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            templates: entries.iter().copied().collect(),
        }
    }

    /// A catalog with every template the engine can ask for.
    pub fn full() -> Self {
        Self::with_templates(&[
            ("backend/get-list-controller.hbs", "list {{controllerName}}"),
            ("backend/simple-controller.hbs", "simple {{controllerName}}"),
            ("backend/test.hbs", "test {{controllerName}}"),
            ("backend/docs.hbs", "docs {{endpoint}}"),
            ("frontend/list.vue.hbs", "list page {{Domain}}"),
            ("frontend/list-composable.hbs", "list composable {{domains}}"),
            ("frontend/view.vue.hbs", "view page {{Domain}}"),
            ("frontend/view-composable.hbs", "view composable {{domain}}"),
        ])
    }
}

impl TemplateCatalog for StubCatalog {
    fn read(&self, relative: &str) -> CrudgenResult<Option<String>> {
        Ok(self.templates.get(relative).map(|s| s.to_string()))
    }
}

/// Engine doing plain `{{key}}` substitution, no conditionals.
pub struct StubEngine;

impl TemplateEngine for StubEngine {
    fn compile(&self, template: &str, data: &RenderData) -> CrudgenResult<String> {
        let mut out = template.to_owned();
        for (key, value) in data.iter() {
            let replacement = match value {
                RenderValue::Str(s) => s.clone(),
                RenderValue::Bool(b) => b.to_string(),
            };
            out = out.replace(&format!("{{{{{key}}}}}"), &replacement);
        }
        Ok(out)
    }
}

/// Recording in-memory filesystem; preserves write order.
#[derive(Clone, Default)]
pub struct StubFilesystem {
    inner: Arc<RwLock<StubFilesystemInner>>,
}

#[derive(Default)]
struct StubFilesystemInner {
    directories: HashSet<PathBuf>,
    writes: Vec<(PathBuf, String)>,
}

impl StubFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, in order.
    pub fn written(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.writes.iter().map(|(p, _)| p.clone()).collect()
    }

    /// Content of the most recent write to `path`.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().unwrap();
        inner
            .writes
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.clone())
    }
}

impl Filesystem for StubFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.writes.push((path.to_path_buf(), content.to_owned()));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path) || inner.writes.iter().any(|(p, _)| p == path)
    }
}
