//! Command handlers.
//!
//! Each submodule owns one subcommand. Shared wiring — which catalog to use,
//! where the project root is — lives here so `backend` and `frontend` stay
//! symmetric.

pub mod backend;
pub mod completions;
pub mod frontend;

use std::path::PathBuf;

use crudgen_adapters::{LocalCatalog, MemoryCatalog};
use crudgen_core::application::ports::TemplateCatalog;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the project root: `--project-root` wins, otherwise the current
/// directory.
fn resolve_project_root(global: &GlobalArgs) -> CliResult<PathBuf> {
    match &global.project_root {
        Some(root) => Ok(root.clone()),
        None => std::env::current_dir().map_err(|e| CliError::IoError {
            message: "failed to resolve current directory".into(),
            source: e,
        }),
    }
}

/// Pick the template catalog: an on-disk directory when one is configured
/// (flag beats config file), the built-in set otherwise.
fn build_catalog(global: &GlobalArgs, config: &AppConfig) -> Box<dyn TemplateCatalog> {
    let dir = global
        .templates
        .clone()
        .or_else(|| config.templates.dir.clone());

    match dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using on-disk template catalog");
            Box::new(LocalCatalog::new(dir))
        }
        None => Box::new(MemoryCatalog::with_builtin()),
    }
}
