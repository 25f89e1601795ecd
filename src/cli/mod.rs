//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod init;
pub mod regions;
pub mod search;

pub use args::{GlobalOptions, SearchArgs};

/// procfind - find unpublished processes that reference your documents
#[derive(Parser, Debug)]
#[command(name = "procfind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "PROCFIND_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Show request URLs, raw responses and error detail
    #[arg(long, global = true, env = "PROCFIND_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for unpublished processes mentioning each document in a CSV file
    Search(SearchArgs),

    /// Save site URL, tenant and username as defaults
    Init,

    /// List the regional search endpoints
    Regions,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   procfind completion bash > /etc/bash_completion.d/procfind
  zsh:    procfind completion zsh > \"${fpath[1]}/_procfind\"
  fish:   procfind completion fish > ~/.config/fish/completions/procfind.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_flags() {
        let cli = Cli::try_parse_from([
            "procfind",
            "--debug",
            "search",
            "--site-url",
            "https://go.promapp.com",
            "--tenant-id",
            "acme",
            "--input",
            "docs.csv",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.site_url.as_deref(), Some("https://go.promapp.com"));
                assert_eq!(args.tenant_id.as_deref(), Some("acme"));
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("docs.csv")));
                assert!(args.username.is_none());
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["procfind", "regions", "--config", "/tmp/c.yaml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/c.yaml"));
        assert!(matches!(cli.command, Commands::Regions));
    }
}
