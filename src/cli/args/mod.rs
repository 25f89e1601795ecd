//! Shared CLI argument types

mod global;
mod search;

pub use global::GlobalOptions;
pub use search::SearchArgs;
