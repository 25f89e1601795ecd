//! Document list loading

use std::path::Path;

use log::debug;

use crate::error::{InputError, Result};
use crate::models::DocumentQuery;

/// Column holding the document names; other columns are ignored
pub const DOCUMENT_NAME_COLUMN: &str = "DocumentName";

/// Read the ordered list of documents to search for.
///
/// Blank values are skipped. An empty list is valid.
pub fn load_queries(path: &Path) -> Result<Vec<DocumentQuery>> {
    if !path.is_file() {
        return Err(InputError::NotFound(path.to_path_buf()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| InputError::Malformed(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| InputError::Malformed(e.to_string()))?
        .clone();
    let column = headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == DOCUMENT_NAME_COLUMN)
        .ok_or_else(|| InputError::MissingColumn(DOCUMENT_NAME_COLUMN.to_string()))?;

    let mut queries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| InputError::Malformed(e.to_string()))?;
        match record.get(column).map(str::trim) {
            Some(name) if !name.is_empty() => queries.push(DocumentQuery::new(name)),
            _ => {}
        }
    }

    debug!("Loaded {} document names from {}", queries.len(), path.display());
    Ok(queries)
}
