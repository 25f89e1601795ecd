//! Search command implementation

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{GlobalOptions, SearchArgs};
use crate::client::SiteClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::table;
use crate::workflow::{Credentials, Orchestrator, RunOutcome};

/// Environment variable consulted before prompting for the password
const PASSWORD_ENV: &str = "PROCFIND_PASSWORD";

/// Run the search command
pub async fn run(opts: &GlobalOptions, args: SearchArgs) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;

    let credentials = Credentials {
        site_url: setting(args.site_url, config.site_url, "Site URL")?,
        tenant_id: setting(args.tenant_id, config.tenant_id, "Tenant ID")?,
        username: setting(args.username, config.username, "Username")?,
        password: password()?,
    };
    let input = match args.input {
        Some(path) => path,
        None => PathBuf::from(prompt("Path to the input CSV file")?),
    };
    let endpoint_override = args
        .search_endpoint
        .or(config.search_endpoint)
        .filter(|e| !e.trim().is_empty());

    let client = SiteClient::new()?;
    let mut orchestrator = Orchestrator::new(&client, progress_bar(opts.debug));

    println!("{}", "Authenticating...".cyan());
    let context = orchestrator
        .establish(&credentials, endpoint_override.as_deref())
        .await?;
    drop(credentials);
    println!("{}", "✓ Authentication successful!".green());

    if context.endpoint.is_fallback() {
        println!(
            "{} No regional search endpoint is known for this site; searching {}",
            "ℹ".cyan(),
            context.endpoint.url()
        );
    }

    let outcome = orchestrator.complete(&context, &input).await?;
    println!("\n{}", summary(&outcome));

    Ok(())
}

/// Completion summary printed after a successful run
fn summary(outcome: &RunOutcome) -> String {
    if outcome.rows.is_empty() {
        return format!(
            "{} No unpublished processes found for the {} document(s) searched.",
            "○".dimmed(),
            outcome.queries.len()
        );
    }

    let mut lines = vec![
        format!(
            "{} Total unpublished processes found: {}",
            "✓".green(),
            outcome.total()
        ),
        table::format_table(&outcome.breakdown()),
    ];
    if let Some(path) = &outcome.report {
        lines.push(format!("Results saved to: {}", path.display().to_string().cyan()));
    }
    lines.join("\n")
}

/// First non-blank of flag/env and config, otherwise prompt
fn setting(flag: Option<String>, saved: Option<String>, label: &str) -> Result<String> {
    match flag
        .or(saved)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

fn prompt(label: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn password() -> Result<String> {
    if let Ok(password) = std::env::var(PASSWORD_ENV)
        && !password.is_empty()
    {
        return Ok(password);
    }

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;
    Ok(password)
}

fn progress_bar(debug: bool) -> ProgressBar {
    if debug {
        // Debug logging writes to stderr too; keep the two from interleaving.
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentQuery, ResultRow};

    fn row(document: &str) -> ResultRow {
        ResultRow {
            document_name: document.to_string(),
            process_name: "p".to_string(),
            process_unique_id: "id".to_string(),
            item_url: "/p".to_string(),
            entity_type: "UnpublishedProcess".to_string(),
        }
    }

    #[test]
    fn test_setting_prefers_flag_over_config() {
        let value = setting(
            Some("https://flag".to_string()),
            Some("https://config".to_string()),
            "Site URL",
        )
        .unwrap();
        assert_eq!(value, "https://flag");
    }

    #[test]
    fn test_setting_falls_back_to_config() {
        let value = setting(None, Some("  acme  ".to_string()), "Tenant ID").unwrap();
        assert_eq!(value, "acme");
    }

    #[test]
    fn test_summary_with_matches() {
        let outcome = RunOutcome {
            queries: vec![DocumentQuery::new("A"), DocumentQuery::new("B")],
            rows: vec![row("A"), row("A"), row("B")],
            report: Some(PathBuf::from("/tmp/report.csv")),
        };

        let text = summary(&outcome);
        assert!(text.contains("Total unpublished processes found: 3"));
        assert!(text.contains("DOCUMENT NAME"));
        assert!(text.contains("/tmp/report.csv"));
    }

    #[test]
    fn test_summary_without_matches() {
        let outcome = RunOutcome {
            queries: vec![DocumentQuery::new("A")],
            rows: vec![],
            report: None,
        };

        let text = summary(&outcome);
        assert!(text.contains("No unpublished processes found"));
        assert!(!text.contains("Total"));
    }
}
