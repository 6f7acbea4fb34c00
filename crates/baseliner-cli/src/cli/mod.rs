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
    name    = "baseliner",
    bin_name = "baseliner",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4d0} Baseline-grid typography pipeline",
    long_about = "Baseliner turns JSON type-scale tokens into SCSS partials, \
                  compiled CSS, demo pages, and Figma plugin data.",
    after_help = "EXAMPLES:\n\
        \x20 baseliner build docs           # build one scale\n\
        \x20 baseliner watch --build-only   # one pass over every scale\n\
        \x20 baseliner watch                # build, then rebuild on change\n\
        \x20 baseliner list --format json\n\
        \x20 baseliner completions bash > /usr/share/bash-completion/completions/baseliner",
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
    /// Run one scale's pipeline once.
    #[command(
        visible_alias = "b",
        about = "Build one scale into SCSS, CSS, a demo, and plugin data",
        after_help = "EXAMPLES:\n\
            \x20 baseliner build docs                # just the docs scale\n\
            \x20 baseliner build docs --force-demos  # regenerate its demo page\n\
            \x20 baseliner watch --build-only        # one pass over every scale"
    )]
    Build(BuildArgs),

    /// Build once, then rebuild on file changes.
    #[command(
        visible_alias = "w",
        about = "Watch token and style sources, rebuilding on change",
        after_help = "EXAMPLES:\n\
            \x20 baseliner watch\n\
            \x20 baseliner watch --build-only   # one pass, no watching\n\
            \x20 baseliner watch --force-demos"
    )]
    Watch(WatchArgs),

    /// List discovered type scales.
    #[command(
        visible_alias = "ls",
        about = "List discovered type scales",
        after_help = "EXAMPLES:\n\
            \x20 baseliner list\n\
            \x20 baseliner list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 baseliner completions bash > ~/.local/share/bash-completion/completions/baseliner\n\
            \x20 baseliner completions zsh  > ~/.zfunc/_baseliner\n\
            \x20 baseliner completions fish > ~/.config/fish/completions/baseliner.fish"
    )]
    Completions(CompletionsArgs),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `baseliner build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Scale to build.
    #[arg(value_name = "SCALE", help = "Scale name (e.g. docs)")]
    pub scale: String,

    /// Overwrite demo pages even when they already exist.
    #[arg(long = "force-demos", help = "Regenerate existing demo pages")]
    pub force_demos: bool,
}

// ── watch ─────────────────────────────────────────────────────────────────────

/// Arguments for `baseliner watch`.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run the initial pass and exit without watching.
    #[arg(long = "build-only", help = "Build once and exit")]
    pub build_only: bool,

    /// Overwrite demo pages even when they already exist.
    #[arg(long = "force-demos", help = "Regenerate existing demo pages")]
    pub force_demos: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `baseliner list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `baseliner completions`.
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
