//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Domain-driven CRUD boilerplate generation",
    long_about = "Crudgen derives naming conventions from a dotted domain path \
                  and emits matching backend controllers, tests, docs, and \
                  frontend pages from a template catalog.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen backend  billing.invoice\n\
        \x20 crudgen frontend billing/invoice\n\
        \x20 crudgen backend  hr.employee --project-root ./my-app\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate backend controllers, tests, and docs for a domain path.
    #[command(
        visible_alias = "be",
        about = "Generate backend CRUD artifacts",
        after_help = "EXAMPLES:\n\
            \x20 crudgen backend billing.invoice\n\
            \x20 crudgen backend billing/invoice --templates ./my-templates\n\
            \x20 crudgen backend hr.employee -p ./my-app"
    )]
    Backend(GenerateArgs),

    /// Generate frontend list/detail pages and composables for a domain path.
    #[command(
        visible_alias = "fe",
        about = "Generate frontend page artifacts",
        after_help = "EXAMPLES:\n\
            \x20 crudgen frontend billing.invoice\n\
            \x20 crudgen frontend billing/invoice -p ./my-app"
    )]
    Frontend(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── backend / frontend ────────────────────────────────────────────────────────

/// Arguments shared by the `backend` and `frontend` commands.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Domain path.  Dots and slashes are interchangeable separators:
    /// `billing.invoice` and `billing/invoice` name the same domain.
    #[arg(
        value_name = "PATH",
        help = "Domain path, e.g. billing.invoice or billing/invoice"
    )]
    pub path: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
