//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skel",
    bin_name = "skel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Instantiate Go project skeletons",
    long_about = "skel copies a built-in project skeleton into a directory and \
                  rewrites its placeholder module identifier to yours.",
    after_help = "EXAMPLES:\n\
        \x20 skel new rest github.com/you/widget -C widget\n\
        \x20 skel new app            # inside a directory that already has go.mod\n\
        \x20 skel list --format json\n\
        \x20 skel completions bash > /usr/share/bash-completion/completions/skel",
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
    /// Instantiate a skeleton.
    #[command(
        visible_alias = "n",
        about = "Instantiate a skeleton into a directory",
        after_help = "EXAMPLES:\n\
            \x20 skel new empty example.org/tool\n\
            \x20 skel new rest  github.com/you/widget --directory ./widget\n\
            \x20 skel new app   --no-module-tool"
    )]
    New(NewArgs),

    /// List available skeletons.
    #[command(
        visible_alias = "ls",
        about = "List available skeletons",
        after_help = "EXAMPLES:\n\
            \x20 skel list\n\
            \x20 skel list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skel completions bash > ~/.local/share/bash-completion/completions/skel\n\
            \x20 skel completions zsh  > ~/.zfunc/_skel\n\
            \x20 skel completions fish > ~/.config/fish/completions/skel.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the skel configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 skel config get tools.go_binary\n\
            \x20 skel config list\n\
            \x20 skel config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `skel new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Skeleton name, see `skel list`.
    #[arg(value_name = "SKELETON", help = "Skeleton to instantiate")]
    pub skeleton: String,

    /// Target module identifier (create-mode skeletons only).
    ///
    /// Collected as a list so that a wrong count is reported by the engine
    /// with a skeleton-specific message.
    #[arg(
        value_name = "IDENTIFIER",
        num_args = 0..,
        help = "Module identifier, e.g. github.com/you/widget"
    )]
    pub identifiers: Vec<String>,

    /// Destination directory.
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        default_value = ".",
        help = "Destination directory"
    )]
    pub directory: PathBuf,

    /// Do not run `go mod init` / `go mod tidy`.
    #[arg(long = "no-module-tool", help = "Skip Go module tooling")]
    pub no_module_tool: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `skel list`.
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skel completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `skel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tools.go_binary`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
