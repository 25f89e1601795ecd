//! Authentication models

use serde::Deserialize;

/// Status value the token service reports on success
pub const SEARCH_TOKEN_SUCCESS: &str = "Success";

/// OAuth2 access token issued by the site's password grant.
///
/// Used exactly once, to obtain a [`SearchToken`].
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

/// Token scoped to the search service, valid for the whole run
#[derive(Clone, PartialEq, Eq)]
pub struct SearchToken(String);

impl SearchToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SearchToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SearchToken([REDACTED])")
    }
}

/// Body of `POST {site}/{tenant}/oauth2/token`
#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Body of `GET {site}/{tenant}/search/GetSearchServiceToken`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchServiceTokenResponse {
    #[serde(default)]
    pub status: Option<String>,

    /// Carries the search token when `status` is `Success`
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchServiceTokenResponse {
    /// Extract the token, or describe why the response does not carry one.
    pub fn into_token(self) -> std::result::Result<SearchToken, String> {
        match (self.status.as_deref(), self.message) {
            (Some(SEARCH_TOKEN_SUCCESS), Some(message)) if !message.trim().is_empty() => {
                Ok(SearchToken::new(message))
            }
            (Some(SEARCH_TOKEN_SUCCESS), _) => {
                Err("Status was 'Success' but no token was returned".to_string())
            }
            (Some(status), _) => Err(format!("Status was '{status}'")),
            (None, _) => Err("Response has no Status field".to_string()),
        }
    }
}
