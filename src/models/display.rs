//! Display models for table output

use tabled::Tabled;

use crate::client::region::REGIONAL_ENDPOINTS;

/// Match count for one searched document
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct BreakdownDisplay {
    #[tabled(rename = "DOCUMENT NAME")]
    pub document_name: String,

    #[tabled(rename = "MATCHES")]
    pub matches: usize,
}

/// One entry of the regional endpoint table
#[derive(Debug, Clone, Tabled)]
pub struct RegionDisplay {
    #[tabled(rename = "SITE HOST")]
    pub host: String,

    #[tabled(rename = "SEARCH ENDPOINT")]
    pub endpoint: String,
}

impl RegionDisplay {
    pub fn all() -> Vec<Self> {
        REGIONAL_ENDPOINTS
            .iter()
            .map(|(host, endpoint)| Self {
                host: (*host).to_string(),
                endpoint: (*endpoint).to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_display_lists_every_entry() {
        let rows = RegionDisplay::all();
        assert_eq!(rows.len(), REGIONAL_ENDPOINTS.len());
        assert_eq!(rows[0].host, REGIONAL_ENDPOINTS[0].0);
    }
}
