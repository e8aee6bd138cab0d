//! Backend artifact generation.
//!
//! For each archetype in table order, emits a controller source file, a
//! matching test file, and a documentation file — completing one archetype's
//! three artifacts before moving to the next, never "all controllers then
//! all tests". Each of the three lives in its own output tree, mirroring
//! the domain path segments.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateCatalog, TemplateEngine},
        resolver::TemplateResolver,
        services::GenerationReport,
    },
    domain::{
        ArchetypeShape, ArtifactKind, ControllerArchetype, NamingBundle, OutputLayout, RenderData,
        bundle,
    },
    error::CrudgenResult,
};

/// One file to be written: resolved, compiled, and flushed before the next
/// one is even constructed. Never outlives a generation pass.
struct ArtifactSpec<'a> {
    kind: ArtifactKind,
    shape: ArchetypeShape,
    dir: &'a Path,
    file_name: String,
    data: &'a RenderData,
}

/// Generates backend CRUD controllers, tests, and docs for a domain path.
pub struct BackendGenerator {
    catalog: Box<dyn TemplateCatalog>,
    engine: Box<dyn TemplateEngine>,
    filesystem: Box<dyn Filesystem>,
    layout: OutputLayout,
    project_root: PathBuf,
}

impl BackendGenerator {
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

    /// Generate all 15 backend artifacts (5 archetypes × controller, test,
    /// docs) for a dot- or slash-separated domain path.
    ///
    /// Writes overwrite unconditionally. Any failure aborts the remainder of
    /// the invocation; already-written files are left in place.
    #[instrument(skip(self))]
    pub fn generate(&self, input: &str) -> CrudgenResult<GenerationReport> {
        let naming = NamingBundle::derive(input)?;
        let rel = naming.as_rel_path();

        let src_dir = self.project_root.join(&self.layout.backend_src_root).join(&rel);
        let test_dir = self.project_root.join(&self.layout.backend_test_root).join(&rel);
        let docs_dir = self.project_root.join(&self.layout.backend_docs_root).join(&rel);

        self.filesystem.create_dir_all(&src_dir)?;
        self.filesystem.create_dir_all(&test_dir)?;
        self.filesystem.create_dir_all(&docs_dir)?;

        info!(domain = %naming.domain(), path = %naming.raw_path(), "generating backend CRUD");

        let mut report = GenerationReport::default();

        for archetype in ControllerArchetype::TABLE {
            let identifier = archetype.controller_identifier(naming.domain());
            let shape = archetype.shape();
            let data = bundle::backend_bundle(&naming, archetype);

            self.emit(
                ArtifactSpec {
                    kind: ArtifactKind::BackendController,
                    shape,
                    dir: &src_dir,
                    file_name: format!("{identifier}.{}", self.layout.backend_ext),
                    data: &data,
                },
                &mut report,
            )?;

            self.emit(
                ArtifactSpec {
                    kind: ArtifactKind::BackendTest,
                    shape,
                    dir: &test_dir,
                    file_name: format!("{identifier}Test.{}", self.layout.backend_ext),
                    data: &data,
                },
                &mut report,
            )?;

            self.emit(
                ArtifactSpec {
                    kind: ArtifactKind::BackendDocs,
                    shape,
                    dir: &docs_dir,
                    file_name: format!("{identifier}.md"),
                    data: &data,
                },
                &mut report,
            )?;
        }

        info!(files = report.len(), "backend generation complete");
        Ok(report)
    }

    /// Resolve, compile, and write one artifact.
    fn emit(&self, spec: ArtifactSpec<'_>, report: &mut GenerationReport) -> CrudgenResult<()> {
        let resolver = TemplateResolver::new(self.catalog.as_ref());
        let template = resolver.resolve(spec.kind, spec.shape)?;
        let content = self.engine.compile(&template, spec.data)?;

        let path = spec.dir.join(&spec.file_name);
        self.filesystem.write_file(&path, &content)?;

        info!(file = %spec.file_name, "created");
        report.record(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{StubCatalog, StubEngine, StubFilesystem};

    fn generator(catalog: StubCatalog, fs: StubFilesystem) -> BackendGenerator {
        BackendGenerator::new(
            Box::new(catalog),
            Box::new(StubEngine),
            Box::new(fs),
            OutputLayout::default(),
            "/project",
        )
    }

    #[test]
    fn generates_fifteen_files_in_archetype_order() {
        let fs = StubFilesystem::new();
        let report = generator(StubCatalog::full(), fs.clone())
            .generate("billing.invoice")
            .unwrap();

        assert_eq!(report.len(), 15);

        // Controller → test → docs per archetype, archetype by archetype.
        let names: Vec<String> = report
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            &names[..3],
            &[
                "GetInvoicesController.java",
                "GetInvoicesControllerTest.java",
                "GetInvoicesController.md",
            ]
        );
        assert_eq!(names[3], "GetByIdInvoiceController.java");
        assert_eq!(names[14], "DeleteInvoiceController.md");
    }

    #[test]
    fn files_mirror_domain_path_under_three_roots() {
        let fs = StubFilesystem::new();
        generator(StubCatalog::full(), fs.clone())
            .generate("billing.invoice")
            .unwrap();

        assert!(fs.exists(Path::new(
            "/project/backend/src/main/java/com/example/app/feature/api/billing/invoice/CreateInvoiceController.java"
        )));
        assert!(fs.exists(Path::new(
            "/project/backend/src/test/java/com/example/app/feature/api/billing/invoice/CreateInvoiceControllerTest.java"
        )));
        assert!(fs.exists(Path::new(
            "/project/backend/docs/api/feature/billing/invoice/CreateInvoiceController.md"
        )));
    }

    #[test]
    fn invalid_path_fails_before_any_write() {
        let fs = StubFilesystem::new();
        let err = generator(StubCatalog::full(), fs.clone()).generate(".");
        assert!(err.is_err());
        assert!(fs.written().is_empty());
    }

    #[test]
    fn missing_required_template_is_fatal() {
        // Catalog with controllers but no test template: the very first
        // archetype aborts the invocation after writing its controller.
        let fs = StubFilesystem::new();
        let catalog = StubCatalog::with_templates(&[
            ("backend/get-list-controller.hbs", "list"),
            ("backend/simple-controller.hbs", "simple"),
            ("backend/docs.hbs", "docs"),
        ]);

        let err = generator(catalog, fs.clone()).generate("billing.invoice");
        assert!(err.is_err());
        assert_eq!(fs.written().len(), 1);
    }
}
