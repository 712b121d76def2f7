//! In-memory views over fetched stack collections.

pub mod compat;
pub mod filter;
pub mod version;

pub use compat::{CompatEntry, CompatStatus};
pub use filter::{filter_stacks, sort_by_stars, CatalogQuery};
pub use version::VersionBump;
