//! The Current catalog API boundary.
//!
//! [`ApiClient`] is the data fetcher: one blocking GET per operation against
//! the configured base URL. [`types`] holds the wire payloads.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    InstallCommands, SearchResponse, Stack, StackCategory, StackDetails, StacksResponse,
    TrendingResponse, TrendingSort, VersionEntry,
};
