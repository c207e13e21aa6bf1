//! CLI argument parsing for pagezettel
//!
//! Uses clap derive. Global flags: --vault, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod paths;
pub mod template;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ExtractArgs, InitArgs};
pub use pagezettel_core::format::OutputFormat;
pub use template::TemplateCommands;

/// Pagezettel - extract text selections into Zettelkasten notes
#[derive(Parser, Debug)]
#[command(name = "pagezettel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root (default: discovered from the current directory)
    #[arg(long, global = true, env = "PAGEZETTEL_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress notices
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. "debug" or "pagezettel_core=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a vault with default templates
    Init(InitArgs),

    /// Extract a text selection into a new note
    #[command(visible_alias = "extract-selection")]
    Extract(ExtractArgs),

    /// Manage extraction templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Create every template's destination folder
    Folders,
}
