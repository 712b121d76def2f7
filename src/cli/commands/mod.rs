//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`current stacks`, `current trending`)
//! - Shared API configuration
//! - Consistent global flag handling

pub mod categories;
pub mod completions;
pub mod dispatcher;
pub mod search;
pub mod show;
pub mod stacks;
pub mod trending;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
