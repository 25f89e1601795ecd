//! Search API trait

use async_trait::async_trait;

use crate::client::models::{SearchHit, SearchToken};

/// Full-text search against the search service
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Find unpublished processes mentioning `document_name` as an exact phrase.
    ///
    /// Infallible by contract: request failures are logged and reported as no hits,
    /// so one bad document never aborts a batch.
    async fn search(
        &self,
        endpoint: &str,
        token: &SearchToken,
        document_name: &str,
    ) -> Vec<SearchHit>;
}
