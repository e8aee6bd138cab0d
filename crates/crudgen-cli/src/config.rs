//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees anything but the
//! [`OutputLayout`] extracted from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Explicit `--config FILE`
//! 3. Config file at the default location, if present
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crudgen_core::domain::OutputLayout;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output roots and file extensions for generated artifacts.
    pub layout: OutputLayout,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template catalog directory; `None` means the built-in set.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        let default_path = Self::config_path();
        if default_path.is_file() {
            return Self::from_file(&default_path);
        }

        Ok(Self::default())
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_core_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.layout, OutputLayout::default());
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.dir.is_none());
    }

    #[test]
    fn partial_toml_overrides_layout_only() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [layout]
            backend_ext = "kt"
            backend_src_root = "server/src/main/kotlin/api"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.layout.backend_ext, "kt");
        assert_eq!(
            cfg.layout.backend_src_root,
            PathBuf::from("server/src/main/kotlin/api")
        );
        // Untouched fields keep their defaults.
        assert_eq!(cfg.layout.page_ext, "vue");
        assert!(cfg.templates.dir.is_none());
    }

    #[test]
    fn templates_dir_from_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [templates]
            dir = "./my-templates"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.templates.dir, Some(PathBuf::from("./my-templates")));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let missing = PathBuf::from("/definitely/not/a/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_file_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[output]\nno_color = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
