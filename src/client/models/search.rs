//! Full-text search models

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One unpublished process matching a search phrase
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub process_unique_id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub item_url: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub entity_type: String,
}

/// Body of `GET {endpoint}/fullsearch`
#[derive(Debug, Deserialize)]
pub struct FullSearchResponse {
    #[serde(default)]
    pub success: Value,

    #[serde(default)]
    pub response: Option<OneOrMany<SearchHit>>,
}

impl FullSearchResponse {
    /// Flatten into hits, in the order the service returned them.
    ///
    /// An unsuccessful or empty response yields no hits.
    pub fn into_hits(self) -> Vec<SearchHit> {
        if !is_truthy(&self.success) {
            return Vec::new();
        }
        self.response.map(OneOrMany::into_vec).unwrap_or_default()
    }
}

/// The service returns a bare object for a single hit and an array otherwise
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s.eq_ignore_ascii_case("false") || s == "0")
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Accept strings, numbers and booleans as text; null becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
