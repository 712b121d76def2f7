//! Current - see what's current across the web stack.
//!
//! Current is a CLI client for a tech-stack catalog API. It browses,
//! searches, and ranks the stacks the catalog tracks, and renders a full
//! detail view per stack with a downloads chart and compatibility notes.
//!
//! # Modules
//!
//! - [`api`] - Catalog API client and wire types
//! - [`catalog`] - Client-side filtering, ordering, and curated tables
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - API location and client configuration
//! - [`error`] - Error types and result aliases
//! - [`search`] - Debounced live search
//! - [`trend`] - Synthetic download series and trend classification
//! - [`ui`] - Terminal output: theme, tables, cards, charts, spinners
//!
//! # Example
//!
//! ```
//! use current::api::Stack;
//! use current::catalog::{filter_stacks, CatalogQuery};
//!
//! // Filter a fetched catalog down to matching stacks.
//! let stacks: Vec<Stack> = Vec::new();
//! let query = CatalogQuery::all().matching("react");
//! let view = filter_stacks(&stacks, &query);
//! assert!(view.is_empty());
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod trend;
pub mod ui;

pub use error::{CurrentError, Result};
