//! Site and search service client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod region;
pub mod site;

pub use api::{AuthApi, SearchApi};
pub use models::{SearchHit, SearchToken};
pub use site::SiteClient;

/// Everything a run needs from the remote side
pub trait ProcessSearchApi: AuthApi + SearchApi {}

impl<T: AuthApi + SearchApi> ProcessSearchApi for T {}
