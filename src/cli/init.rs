//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::region::{self, Endpoint};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the connection defaults, pre-filled from any existing config, and
/// saves them. Passwords are never stored.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to procfind!".bold().green());
    println!("Let's save your site connection defaults.\n");

    let existing = Config::load_or_default(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let site_url = ask(&theme, "Site URL", existing.site_url.as_deref())?;
    let tenant_id = ask(&theme, "Tenant ID", existing.tenant_id.as_deref())?;
    let username = ask(&theme, "Username", existing.username.as_deref())?;

    match region::resolve(&site_url) {
        Endpoint::Regional { host, url } => {
            println!("Search endpoint for {}: {}", host, url.bold());
        }
        _ => println!(
            "{} {} is not a known regional site; searches will go to the site itself.",
            "ℹ".cyan(),
            site_url
        ),
    }

    let config = Config {
        site_url: Some(site_url.trim_end_matches('/').to_string()),
        tenant_id: Some(tenant_id),
        username: Some(username),
        search_endpoint: existing.search_endpoint,
    };
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {}", "procfind search --input documents.csv".cyan());

    Ok(())
}

fn ask(theme: &ColorfulTheme, label: &str, current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(label);
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}
