//! Artifact kinds and their catalog locations.

use std::fmt;

use crate::domain::archetype::ArchetypeShape;

/// Every kind of file the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    BackendController,
    BackendTest,
    BackendDocs,
    FrontendList,
    FrontendListComposable,
    FrontendView,
    FrontendViewComposable,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BackendController => "backend-controller",
            Self::BackendTest => "backend-test",
            Self::BackendDocs => "backend-docs",
            Self::FrontendList => "frontend-list",
            Self::FrontendListComposable => "frontend-list-composable",
            Self::FrontendView => "frontend-view",
            Self::FrontendViewComposable => "frontend-view-composable",
        }
    }

    /// Catalog-relative path of the template for this kind and shape.
    ///
    /// Only `BackendController` branches on the shape: the paginated-list
    /// shape resolves to the dedicated list-controller template, every other
    /// shape shares the simple one. Test and docs templates are shared
    /// across all five archetypes and differ only in the data bundle.
    pub const fn template_path(&self, shape: ArchetypeShape) -> &'static str {
        match self {
            Self::BackendController => {
                if shape.is_paginated() {
                    "backend/get-list-controller.hbs"
                } else {
                    "backend/simple-controller.hbs"
                }
            }
            Self::BackendTest => "backend/test.hbs",
            Self::BackendDocs => "backend/docs.hbs",
            Self::FrontendList => "frontend/list.vue.hbs",
            Self::FrontendListComposable => "frontend/list-composable.hbs",
            Self::FrontendView => "frontend/view.vue.hbs",
            Self::FrontendViewComposable => "frontend/view-composable.hbs",
        }
    }

    /// Generic template to retry when the shape-specific one is missing.
    ///
    /// Partially-populated catalogs degrade gracefully instead of blocking
    /// all generation: a missing list-controller template falls back to the
    /// simple controller. Kinds with a single template have no fallback.
    pub const fn fallback_path(&self) -> Option<&'static str> {
        match self {
            Self::BackendController => Some("backend/simple-controller.hbs"),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
