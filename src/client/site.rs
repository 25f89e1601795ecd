//! HTTP client for the site's token endpoints and the search service

use async_trait::async_trait;
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client as HttpClient, Response, StatusCode};

use super::api::{AuthApi, SearchApi};
use super::models::{
    AccessTokenResponse, BearerToken, FullSearchResponse, SearchHit, SearchServiceTokenResponse,
    SearchToken,
};
use crate::error::{ApiError, Error, Result};

const USER_AGENT: &str = concat!("procfind/", env!("CARGO_PKG_VERSION"));

/// Restricts results to unpublished processes
const INCLUDED_TYPES_UNPUBLISHED: u8 = 1;

/// Default match mode of the search service
const SEARCH_MATCH_TYPE_DEFAULT: u8 = 0;

/// Only the first results page is ever requested
const FIRST_PAGE: u32 = 1;

/// Everything except unreserved characters (`A-Z a-z 0-9 - . _ ~`) is escaped.
const PHRASE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Longest response body excerpt carried in an error message
const BODY_SNIPPET_CHARS: usize = 200;

/// Client for one run against a site and its search service
#[derive(Clone)]
pub struct SiteClient {
    http: HttpClient,
}

impl SiteClient {
    /// Create a client using the HTTP library's default timeouts
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    async fn request_access_token(
        &self,
        site_url: &str,
        tenant_id: &str,
        username: &str,
        password: &str,
    ) -> std::result::Result<BearerToken, ApiError> {
        let url = join_url(site_url, &format!("{tenant_id}/oauth2/token"));
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "password"),
                ("username", username),
                ("password", password),
            ])
            .send()
            .await?;
        let response = check_status(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {e}")))?;
        let body: AccessTokenResponse = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse token response: {e}"))
        })?;

        body.access_token
            .filter(|t| !t.is_empty())
            .map(BearerToken::new)
            .ok_or_else(|| {
                ApiError::InvalidResponse("Token response has no access_token".to_string())
            })
    }

    async fn request_search_token(
        &self,
        site_url: &str,
        tenant_id: &str,
        bearer: &BearerToken,
    ) -> std::result::Result<SearchToken, ApiError> {
        let url = join_url(site_url, &format!("{tenant_id}/search/GetSearchServiceToken"));
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(bearer.as_str())
            .send()
            .await?;
        let response = check_status(response).await?;

        let body: SearchServiceTokenResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse search token response: {e}"))
        })?;
        debug!("Search token status: {:?}", body.status);

        body.into_token().map_err(ApiError::InvalidResponse)
    }

    async fn try_search(
        &self,
        endpoint: &str,
        token: &SearchToken,
        document_name: &str,
    ) -> std::result::Result<Vec<SearchHit>, ApiError> {
        let url = search_url(endpoint, document_name);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let response = check_status(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {e}")))?;
        debug!("Search response for '{}': {}", document_name, text);

        let body: FullSearchResponse = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse search response: {e}"))
        })?;

        Ok(body.into_hits())
    }
}

#[async_trait]
impl AuthApi for SiteClient {
    async fn authenticate(
        &self,
        site_url: &str,
        tenant_id: &str,
        username: &str,
        password: &str,
    ) -> Result<BearerToken> {
        self.request_access_token(site_url, tenant_id, username, password)
            .await
            .map_err(Error::Authentication)
    }

    async fn search_token(
        &self,
        site_url: &str,
        tenant_id: &str,
        bearer: &BearerToken,
    ) -> Result<SearchToken> {
        self.request_search_token(site_url, tenant_id, bearer)
            .await
            .map_err(Error::TokenExchange)
    }
}

#[async_trait]
impl SearchApi for SiteClient {
    async fn search(
        &self,
        endpoint: &str,
        token: &SearchToken,
        document_name: &str,
    ) -> Vec<SearchHit> {
        match self.try_search(endpoint, token, document_name).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Search for '{}' failed, counting as no matches: {}", document_name, e);
                Vec::new()
            }
        }
    }
}

/// Quote a document name and percent-encode it for exact-phrase matching
pub fn encode_phrase(document_name: &str) -> String {
    utf8_percent_encode(&format!("\"{document_name}\""), PHRASE_ENCODE_SET).to_string()
}

fn search_url(endpoint: &str, document_name: &str) -> String {
    format!(
        "{}?SearchCriteria={}&IncludedTypes={}&SearchMatchType={}&pageNumber={}",
        join_url(endpoint, "fullsearch"),
        encode_phrase(document_name),
        INCLUDED_TYPES_UNPUBLISHED,
        SEARCH_MATCH_TYPE_DEFAULT,
        FIRST_PAGE,
    )
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Map a non-2xx response to an [`ApiError`], passing 2xx responses through
async fn check_status(response: Response) -> std::result::Result<Response, ApiError> {
    let status = response.status();
    debug!("{} {}", status, response.url());
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(BODY_SNIPPET_CHARS).collect();

    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(url),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(snippet),
        s if s.is_server_error() => ApiError::ServerError(format!("HTTP {s}: {snippet}")),
        s => ApiError::UnexpectedStatus(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(SiteClient::new().is_ok());
    }

    #[test]
    fn test_encode_phrase_quotes_and_escapes() {
        assert_eq!(encode_phrase("Action Item"), "%22Action%20Item%22");
        assert_eq!(encode_phrase("Q&A v1.2"), "%22Q%26A%20v1.2%22");
        assert_eq!(encode_phrase("naïve"), "%22na%C3%AFve%22");
    }

    #[test]
    fn test_search_url_has_fixed_parameters() {
        let url = search_url("https://ussearch.promapp.com/", "Policy");
        assert_eq!(
            url,
            "https://ussearch.promapp.com/fullsearch?SearchCriteria=%22Policy%22\
             &IncludedTypes=1&SearchMatchType=0&pageNumber=1"
        );
    }

    #[test]
    fn test_join_url_trims_trailing_slash() {
        assert_eq!(join_url("https://site/", "t/oauth2/token"), "https://site/t/oauth2/token");
        assert_eq!(join_url("https://site", "t/oauth2/token"), "https://site/t/oauth2/token");
    }
}
