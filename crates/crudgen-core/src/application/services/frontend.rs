//! Frontend artifact generation.
//!
//! Emits four files under the UI pages root: the list page, its composable,
//! the detail page, and its composable — in that fixed order. No archetype
//! matrix is involved; one page type maps to one template.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateCatalog, TemplateEngine},
        resolver::TemplateResolver,
        services::GenerationReport,
    },
    domain::{ArchetypeShape, ArtifactKind, HttpMethod, NamingBundle, OutputLayout, RenderData, bundle},
    error::CrudgenResult,
};

/// Generates frontend list/detail pages and composables for a domain path.
pub struct FrontendGenerator {
    catalog: Box<dyn TemplateCatalog>,
    engine: Box<dyn TemplateEngine>,
    filesystem: Box<dyn Filesystem>,
    layout: OutputLayout,
    project_root: PathBuf,
}

impl FrontendGenerator {
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        engine: Box<dyn TemplateEngine>,
        filesystem: Box<dyn Filesystem>,
        layout: OutputLayout,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            engine,
            filesystem,
            layout,
            project_root: project_root.into(),
        }
    }

    /// Generate the four frontend artifacts for a dot- or slash-separated
    /// domain path. Same overwrite and fail-fast semantics as the backend
    /// generator.
    #[instrument(skip(self))]
    pub fn generate(&self, input: &str) -> CrudgenResult<GenerationReport> {
        let naming = NamingBundle::derive(input)?;

        let base_dir = self
            .project_root
            .join(&self.layout.frontend_pages_root)
            .join(naming.as_rel_path());
        let list_dir = base_dir.join("list");
        let view_dir = base_dir.join("view");

        self.filesystem.create_dir_all(&list_dir)?;
        self.filesystem.create_dir_all(&view_dir)?;

        info!(domain = %naming.domain(), path = %naming.raw_path(), "generating frontend pages");

        let data = bundle::frontend_bundle(&naming);
        let mut report = GenerationReport::default();

        self.emit(
            ArtifactKind::FrontendList,
            &list_dir,
            &format!("index.{}", self.layout.page_ext),
            &data,
            &mut report,
        )?;
        self.emit(
            ArtifactKind::FrontendListComposable,
            &list_dir,
            &format!("composables.{}", self.layout.composable_ext),
            &data,
            &mut report,
        )?;
        self.emit(
            ArtifactKind::FrontendView,
            &view_dir,
            &format!("[id].{}", self.layout.page_ext),
            &data,
            &mut report,
        )?;
        self.emit(
            ArtifactKind::FrontendViewComposable,
            &view_dir,
            &format!("composables.{}", self.layout.composable_ext),
            &data,
            &mut report,
        )?;

        info!(files = report.len(), "frontend generation complete");
        Ok(report)
    }

    fn emit(
        &self,
        kind: ArtifactKind,
        dir: &Path,
        file_name: &str,
        data: &RenderData,
        report: &mut GenerationReport,
    ) -> CrudgenResult<()> {
        // Frontend kinds never branch on shape; any fixed shape works.
        let shape = ArchetypeShape {
            method: HttpMethod::Get,
            plural: false,
        };

        let resolver = TemplateResolver::new(self.catalog.as_ref());
        let template = resolver.resolve(kind, shape)?;
        let content = self.engine.compile(&template, data)?;

        let path = dir.join(file_name);
        self.filesystem.write_file(&path, &content)?;

        info!(file = %file_name, "created");
        report.record(path);
        Ok(())
    }
}
