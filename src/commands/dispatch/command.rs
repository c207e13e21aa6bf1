//! Command trait and context for dispatching commands

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use crate::commands::notice::Messages;
use pagezettel_core::config::GlobalConfig;
use pagezettel_core::error::Result;
use pagezettel_core::i18n::Locale;
use pagezettel_core::store::Store;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
    pub config: GlobalConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: PathBuf, start: Instant) -> Self {
        let config = match GlobalConfig::load() {
            Ok(config) => config,
            Err(e) => {
                debug!(error = %e, "global_config_unreadable");
                GlobalConfig::default()
            }
        };
        Self {
            cli,
            cwd,
            start,
            config,
        }
    }

    /// Directory `init` creates a vault in, or discovery starts from
    pub fn root(&self) -> PathBuf {
        resolve_root_path(self.cli.vault.as_deref(), &self.cwd)
    }

    /// Open the vault named by `--vault`, or discover one from the
    /// current directory
    pub fn open_store(&self) -> Result<Store> {
        let root = self.root();
        if self.cli.vault.is_some() {
            Store::open(&root)
        } else {
            Store::discover(&root)
        }
    }

    /// Messages in the locale chosen by the vault settings, then the
    /// global config, then `LANG`
    pub fn messages(&self, store: Option<&Store>) -> Messages {
        let lang = std::env::var("LANG").ok();
        let tag = store
            .and_then(|s| s.settings().locale.as_deref())
            .or(self.config.locale.as_deref())
            .or(lang.as_deref());
        Messages::new(Locale::resolve(tag))
    }

    /// Whether prompts can be shown
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pagezettel {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Extract text selections into Zettelkasten notes.");
        println!();
        println!("Run `pagezettel --help` for usage information.");
        Ok(())
    }
}
