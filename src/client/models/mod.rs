//! Wire and domain types for the site and search service
//!
//! Models are split by the call that produces them.

mod auth;
mod search;

pub use auth::{AccessTokenResponse, BearerToken, SearchServiceTokenResponse, SearchToken};
pub use search::{FullSearchResponse, SearchHit};
