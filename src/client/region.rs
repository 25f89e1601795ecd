//! Regional search endpoint resolution
//!
//! Hosted sites are served by a fixed search cluster per region. Anything not in the
//! table is assumed to host its own search service on the site itself.

use url::Url;

/// Known site hostnames and the search endpoint serving each region.
pub const REGIONAL_ENDPOINTS: [(&str, &str); 5] = [
    ("go.promapp.com", "https://ausearch.promapp.com"),
    ("au.promapp.com", "https://ausearch.promapp.com"),
    ("us.promapp.com", "https://ussearch.promapp.com"),
    ("eu.promapp.com", "https://eusearch.promapp.com"),
    ("ca.promapp.com", "https://casearch.promapp.com"),
];

/// Outcome of resolving a site URL to a search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Site hostname matched a regional entry
    Regional { host: String, url: String },
    /// No entry for the hostname; the site URL is used as-is
    Fallback { url: String },
    /// Set explicitly by the user, bypassing the table
    Configured { url: String },
}

impl Endpoint {
    /// The base URL to send search requests to
    pub fn url(&self) -> &str {
        match self {
            Endpoint::Regional { url, .. }
            | Endpoint::Fallback { url }
            | Endpoint::Configured { url } => url,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Endpoint::Fallback { .. })
    }
}

/// Map a site URL to its search endpoint.
///
/// Never fails: an unknown or unparseable host yields the input unchanged.
pub fn resolve(site_url: &str) -> Endpoint {
    let host = Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase));

    if let Some(host) = host
        && let Some((_, url)) = REGIONAL_ENDPOINTS.iter().find(|(h, _)| *h == host)
    {
        return Endpoint::Regional {
            host,
            url: (*url).to_string(),
        };
    }

    Endpoint::Fallback {
        url: site_url.to_string(),
    }
}
