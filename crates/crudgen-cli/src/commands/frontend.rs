//! Implementation of the `crudgen frontend` command.

use tracing::{info, instrument};

use crudgen_adapters::{HandlebarsEngine, LocalFilesystem};
use crudgen_core::application::services::FrontendGenerator;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudgen frontend` command.
#[instrument(skip_all, fields(path = %args.path))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_root = super::resolve_project_root(&global)?;
    let catalog = super::build_catalog(&global, &config);

    let generator = FrontendGenerator::new(
        catalog,
        Box::new(HandlebarsEngine::new()),
        Box::new(LocalFilesystem::new()),
        config.layout.clone(),
        &project_root,
    );

    output.header(&format!("Generating frontend pages for '{}'...", args.path))?;
    info!(path = %args.path, root = %project_root.display(), "frontend generation started");

    let report = generator.generate(&args.path).map_err(CliError::Core)?;

    for file in report.files() {
        output.created(&file.display().to_string())?;
    }
    output.success(&format!(
        "{} frontend files generated for '{}'",
        report.len(),
        args.path
    ))?;

    Ok(())
}
