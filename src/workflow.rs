//! Run orchestration
//!
//! A run walks `Idle → Authenticating → ExchangingToken → ResolvingEndpoint →
//! LoadingInput → Searching(i) → Exporting → Done`. A failed login, token exchange,
//! input load or export ends the run in `Failed`. Individual searches never fail
//! the run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use indicatif::ProgressBar;
use log::debug;

use crate::client::region::{self, Endpoint};
use crate::client::{ProcessSearchApi, SearchToken};
use crate::error::Result;
use crate::input::load_queries;
use crate::models::{BreakdownDisplay, DocumentQuery, ResultRow};
use crate::output::report::{report_path, write_report};

/// Pause between consecutive searches
pub const SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Authenticating,
    ExchangingToken,
    ResolvingEndpoint,
    LoadingInput,
    Searching { index: usize, total: usize },
    Exporting,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Idle => f.write_str("idle"),
            Stage::Authenticating => f.write_str("authenticating"),
            Stage::ExchangingToken => f.write_str("exchanging search token"),
            Stage::ResolvingEndpoint => f.write_str("resolving search endpoint"),
            Stage::LoadingInput => f.write_str("loading input"),
            Stage::Searching { index, total } => write!(f, "searching {index}/{total}"),
            Stage::Exporting => f.write_str("exporting"),
            Stage::Done => f.write_str("done"),
            Stage::Failed => f.write_str("failed"),
        }
    }
}

/// Login details, held in memory for one run only
pub struct Credentials {
    pub site_url: String,
    pub tenant_id: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("site_url", &self.site_url)
            .field("tenant_id", &self.tenant_id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Search session shared by every query of a run
#[derive(Debug, Clone)]
pub struct RunContext {
    pub endpoint: Endpoint,
    pub token: SearchToken,
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    pub queries: Vec<DocumentQuery>,
    pub rows: Vec<ResultRow>,
    /// Written report, absent when nothing matched
    pub report: Option<PathBuf>,
}

impl RunOutcome {
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Match counts per distinct document that had any, in order of first appearance.
    ///
    /// A name listed more than once in the input gets a single entry, so the counts
    /// add up to `total()`.
    pub fn breakdown(&self) -> Vec<BreakdownDisplay> {
        let mut breakdown: Vec<BreakdownDisplay> = Vec::new();
        for row in &self.rows {
            match breakdown
                .iter_mut()
                .find(|b| b.document_name == row.document_name)
            {
                Some(entry) => entry.matches += 1,
                None => breakdown.push(BreakdownDisplay {
                    document_name: row.document_name.clone(),
                    matches: 1,
                }),
            }
        }
        breakdown
    }
}

/// Sequences authentication, token exchange, input loading, searching and export.
pub struct Orchestrator<'a, C: ProcessSearchApi> {
    client: &'a C,
    stage: Stage,
    delay: Duration,
    progress: ProgressBar,
}

impl<'a, C: ProcessSearchApi> Orchestrator<'a, C> {
    pub fn new(client: &'a C, progress: ProgressBar) -> Self {
        Self {
            client,
            stage: Stage::Idle,
            delay: SEARCH_DELAY,
            progress,
        }
    }

    /// Override the pause between searches
    #[cfg(test)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, stage: Stage) {
        debug!("Run stage: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    fn check<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            self.advance(Stage::Failed);
        }
        result
    }

    /// Authenticate, obtain the search token and pick the search endpoint.
    ///
    /// `endpoint_override` skips the regional lookup.
    pub async fn establish(
        &mut self,
        credentials: &Credentials,
        endpoint_override: Option<&str>,
    ) -> Result<RunContext> {
        self.advance(Stage::Authenticating);
        let bearer = self
            .client
            .authenticate(
                &credentials.site_url,
                &credentials.tenant_id,
                &credentials.username,
                &credentials.password,
            )
            .await;
        let bearer = self.check(bearer)?;

        self.advance(Stage::ExchangingToken);
        let token = self
            .client
            .search_token(&credentials.site_url, &credentials.tenant_id, &bearer)
            .await;
        let token = self.check(token)?;

        self.advance(Stage::ResolvingEndpoint);
        let endpoint = match endpoint_override {
            Some(url) => Endpoint::Configured {
                url: url.to_string(),
            },
            None => region::resolve(&credentials.site_url),
        };
        debug!("Search endpoint: {}", endpoint.url());

        Ok(RunContext { endpoint, token })
    }

    /// Load the input, search every document and export the matches.
    pub async fn complete(&mut self, context: &RunContext, input: &Path) -> Result<RunOutcome> {
        self.advance(Stage::LoadingInput);
        let queries = load_queries(input);
        let queries = self.check(queries)?;

        let rows = self.search_all(context, &queries).await;

        self.advance(Stage::Exporting);
        let report = if rows.is_empty() {
            None
        } else {
            let path = report_path(input, Local::now());
            let written = write_report(&path, &rows);
            self.check(written)?;
            Some(path)
        };

        self.advance(Stage::Done);
        Ok(RunOutcome {
            queries,
            rows,
            report,
        })
    }

    /// Search each document in turn, pausing between requests.
    ///
    /// Rows follow input order, then the order hits were returned in.
    pub async fn search_all(
        &mut self,
        context: &RunContext,
        queries: &[DocumentQuery],
    ) -> Vec<ResultRow> {
        let total = queries.len();
        self.progress.set_length(total as u64);

        let mut rows = Vec::new();
        for (i, query) in queries.iter().enumerate() {
            self.advance(Stage::Searching {
                index: i + 1,
                total,
            });
            self.progress.set_message(query.document_name.clone());

            let hits = self
                .client
                .search(context.endpoint.url(), &context.token, &query.document_name)
                .await;
            debug!("'{}': {} matches", query.document_name, hits.len());
            rows.extend(hits.into_iter().map(|hit| ResultRow::from_hit(query, hit)));
            self.progress.inc(1);

            if i + 1 < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.progress.finish_and_clear();
        rows
    }
}
