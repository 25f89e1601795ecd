//! Arguments of the search command

use std::path::PathBuf;

use clap::Args;

/// Connection settings and input for a search run.
///
/// Anything left unset falls back to the config file, then to a prompt. The
/// password is only ever read from `PROCFIND_PASSWORD` or a hidden prompt.
#[derive(Debug, Clone, Args, Default)]
pub struct SearchArgs {
    /// Site URL, e.g. https://go.promapp.com
    #[arg(long, env = "PROCFIND_SITE_URL", hide_env = true)]
    pub site_url: Option<String>,

    /// Tenant ID
    #[arg(long, env = "PROCFIND_TENANT_ID", hide_env = true)]
    pub tenant_id: Option<String>,

    /// Username
    #[arg(long, env = "PROCFIND_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// CSV file with a DocumentName column
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Search service URL, bypassing the regional lookup
    #[arg(long, env = "PROCFIND_SEARCH_ENDPOINT", hide_env = true)]
    pub search_endpoint: Option<String>,
}
