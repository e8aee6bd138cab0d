//! Template resolution with deterministic fallback.

use tracing::debug;

use crate::application::ApplicationError;
use crate::application::ports::TemplateCatalog;
use crate::domain::{ArchetypeShape, ArtifactKind};
use crate::error::CrudgenResult;

/// Resolves the template text for an (artifact kind, archetype shape) pair.
///
/// Resolution order:
/// 1. The shape-specific path from [`ArtifactKind::template_path`].
/// 2. The kind's generic fallback, when one exists and differs.
/// 3. [`ApplicationError::TemplateNotFound`] naming the attempted path.
pub struct TemplateResolver<'a> {
    catalog: &'a dyn TemplateCatalog,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(catalog: &'a dyn TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Locate the template for `kind` under `shape`.
    pub fn resolve(&self, kind: ArtifactKind, shape: ArchetypeShape) -> CrudgenResult<String> {
        let primary = kind.template_path(shape);

        if let Some(text) = self.catalog.read(primary)? {
            return Ok(text);
        }

        if let Some(fallback) = kind.fallback_path() {
            if fallback != primary {
                if let Some(text) = self.catalog.read(fallback)? {
                    debug!(kind = %kind, primary, fallback, "shape-specific template missing, using fallback");
                    return Ok(text);
                }
            }
        }

        Err(ApplicationError::TemplateNotFound {
            attempted: primary.to_owned(),
        }
        .into())
    }
}
