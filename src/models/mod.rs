//! Run-level data: what was searched for and what was found

use serde::Serialize;

use crate::client::SearchHit;

pub mod display;

pub use display::{BreakdownDisplay, RegionDisplay};

/// One document name read from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    pub document_name: String,
}

impl DocumentQuery {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
        }
    }
}

/// A search hit joined with the document that produced it.
///
/// Serializes with the report's column names, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultRow {
    pub document_name: String,
    pub process_name: String,
    pub process_unique_id: String,
    pub item_url: String,
    pub entity_type: String,
}

impl ResultRow {
    pub fn from_hit(query: &DocumentQuery, hit: SearchHit) -> Self {
        Self {
            document_name: query.document_name.clone(),
            process_name: hit.name,
            process_unique_id: hit.process_unique_id,
            item_url: hit.item_url,
            entity_type: hit.entity_type,
        }
    }
}
