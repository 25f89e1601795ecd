//! Mock site client for testing
//!
//! Provides an in-memory implementation of the API traits so the run workflow can be
//! exercised without a network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, SearchApi};
use super::models::{BearerToken, SearchHit, SearchToken};
use crate::error::{ApiError, Error, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSearchClient::new()
///     .with_hits("Policy", vec![hit("Review policy")])
///     .await;
///
/// let hits = mock.search("https://search", &token, "Policy").await;
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Default)]
pub struct MockSearchClient {
    /// Hits returned per document name; unknown names return nothing
    hits: Arc<Mutex<HashMap<String, Vec<SearchHit>>>>,
    /// Error returned from authenticate, if any
    auth_error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned from search_token, if any
    token_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Document names searched, in call order
    searched: Arc<Mutex<Vec<String>>>,
}

/// Number of calls made to each mock operation.
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub search_token: usize,
    pub search: usize,
}

impl MockSearchClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the hits returned when searching for `document_name`.
    pub async fn with_hits(self, document_name: &str, hits: Vec<SearchHit>) -> Self {
        self.hits
            .lock()
            .await
            .insert(document_name.to_string(), hits);
        self
    }

    /// Make authenticate fail with `error`.
    pub async fn with_auth_error(self, error: ApiError) -> Self {
        *self.auth_error.lock().await = Some(error);
        self
    }

    /// Make search_token fail with `error`.
    pub async fn with_token_error(self, error: ApiError) -> Self {
        *self.token_error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Document names passed to search, in order.
    pub async fn searched(&self) -> Vec<String> {
        self.searched.lock().await.clone()
    }
}

/// Build a hit whose fields derive from `name`.
pub fn hit(name: &str) -> SearchHit {
    SearchHit {
        name: name.to_string(),
        process_unique_id: format!("id-{name}"),
        item_url: format!("/Process/{name}"),
        entity_type: "UnpublishedProcess".to_string(),
    }
}

#[async_trait]
impl AuthApi for MockSearchClient {
    async fn authenticate(
        &self,
        _site_url: &str,
        _tenant_id: &str,
        _username: &str,
        _password: &str,
    ) -> Result<BearerToken> {
        self.call_count.lock().await.authenticate += 1;

        if let Some(e) = self.auth_error.lock().await.take() {
            return Err(Error::Authentication(e));
        }
        Ok(BearerToken::new("mock-bearer"))
    }

    async fn search_token(
        &self,
        _site_url: &str,
        _tenant_id: &str,
        _bearer: &BearerToken,
    ) -> Result<SearchToken> {
        self.call_count.lock().await.search_token += 1;

        if let Some(e) = self.token_error.lock().await.take() {
            return Err(Error::TokenExchange(e));
        }
        Ok(SearchToken::new("mock-search-token"))
    }
}

#[async_trait]
impl SearchApi for MockSearchClient {
    async fn search(
        &self,
        _endpoint: &str,
        _token: &SearchToken,
        document_name: &str,
    ) -> Vec<SearchHit> {
        self.call_count.lock().await.search += 1;
        self.searched.lock().await.push(document_name.to_string());

        self.hits
            .lock()
            .await
            .get(document_name)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_hits() {
        let mock = MockSearchClient::new()
            .with_hits("Policy", vec![hit("Review"), hit("Approve")])
            .await;
        let token = SearchToken::new("t");

        assert_eq!(mock.search("e", &token, "Policy").await.len(), 2);
        assert!(mock.search("e", &token, "Other").await.is_empty());
        assert_eq!(mock.call_counts().await.search, 2);
        assert_eq!(mock.searched().await, vec!["Policy", "Other"]);
    }

    #[tokio::test]
    async fn test_mock_auth_error() {
        let mock = MockSearchClient::new()
            .with_auth_error(ApiError::Unauthorized)
            .await;

        let result = mock.authenticate("s", "t", "u", "p").await;
        assert!(matches!(
            result,
            Err(Error::Authentication(ApiError::Unauthorized))
        ));
    }
}
