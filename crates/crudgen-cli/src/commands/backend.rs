//! Implementation of the `crudgen backend` command.
//!
//! Responsibility: wire adapters into the core backend generator, run it,
//! and display results. No naming or template logic lives here.

use tracing::{info, instrument};

use crudgen_adapters::{HandlebarsEngine, LocalFilesystem};
use crudgen_core::application::services::BackendGenerator;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudgen backend` command.
#[instrument(skip_all, fields(path = %args.path))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_root = super::resolve_project_root(&global)?;
    let catalog = super::build_catalog(&global, &config);

    let generator = BackendGenerator::new(
        catalog,
        Box::new(HandlebarsEngine::new()),
        Box::new(LocalFilesystem::new()),
        config.layout.clone(),
        &project_root,
    );

    output.header(&format!("Generating backend CRUD for '{}'...", args.path))?;
    info!(path = %args.path, root = %project_root.display(), "backend generation started");

    let report = generator.generate(&args.path).map_err(CliError::Core)?;

    for file in report.files() {
        output.created(&file.display().to_string())?;
    }
    output.success(&format!(
        "{} backend files generated for '{}'",
        report.len(),
        args.path
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  Wire the generated controllers to their services")?;
        output.print(&format!("  crudgen frontend {}", args.path))?;
    }

    Ok(())
}
