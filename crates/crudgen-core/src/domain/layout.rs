//! Output layout: where generated artifacts land.
//!
//! The roots are project-relative prefixes; the generators append the domain
//! path segments (`billing/invoice`) underneath each. Defaults mirror the
//! conventional Spring + Vue project layout the engine was built for, but
//! everything is overridable through CLI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Convention-defined output roots and file extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    /// Backend controller sources root.
    pub backend_src_root: PathBuf,
    /// Parallel test-tree root, mirroring the same path segments.
    pub backend_test_root: PathBuf,
    /// Parallel docs-tree root.
    pub backend_docs_root: PathBuf,
    /// Frontend pages root; `list/` and `view/` are created underneath.
    pub frontend_pages_root: PathBuf,
    /// Extension for controller and test sources.
    pub backend_ext: String,
    /// Extension for frontend pages.
    pub page_ext: String,
    /// Extension for composable logic files.
    pub composable_ext: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            backend_src_root: "backend/src/main/java/com/example/app/feature/api".into(),
            backend_test_root: "backend/src/test/java/com/example/app/feature/api".into(),
            backend_docs_root: "backend/docs/api/feature".into(),
            frontend_pages_root: "frontend/src/pages/apps".into(),
            backend_ext: "java".into(),
            page_ext: "vue".into(),
            composable_ext: "ts".into(),
        }
    }
}
