//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - password grant and search token exchange
//! - [`SearchApi`] - per-document full-text search
//!
//! The [`ProcessSearchApi`](super::ProcessSearchApi) super-trait combines both.

mod auth;
mod search;

pub use auth::AuthApi;
pub use search::SearchApi;
