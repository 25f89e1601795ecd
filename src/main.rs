//! procfind - finds unpublished processes that reference a list of documents

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod input;
mod models;
mod output;
mod workflow;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Warnings only by default; `--debug` turns on request-level diagnostics.
/// `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_filter = if debug { "procfind=debug" } else { "procfind=warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Search(args) => cli::search::run(&opts, args).await,
        Commands::Init => cli::init::run(&opts),
        Commands::Regions => {
            cli::regions::run();
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
