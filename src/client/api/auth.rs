//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{BearerToken, SearchToken};
use crate::error::Result;

/// Authentication operations against the site
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a username and password for an OAuth2 bearer token.
    ///
    /// Fails with [`Error::Authentication`](crate::error::Error::Authentication).
    async fn authenticate(
        &self,
        site_url: &str,
        tenant_id: &str,
        username: &str,
        password: &str,
    ) -> Result<BearerToken>;

    /// Exchange a bearer token for a token scoped to the search service.
    ///
    /// Fails with [`Error::TokenExchange`](crate::error::Error::TokenExchange).
    async fn search_token(
        &self,
        site_url: &str,
        tenant_id: &str,
        bearer: &BearerToken,
    ) -> Result<SearchToken>;
}
