//! Global CLI options shared across all commands

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.procfind/config.yaml)
    pub config: Option<String>,

    /// Diagnostic output enabled
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            debug: cli.debug,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
