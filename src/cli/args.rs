//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::api::{StackCategory, TrendingSort};
use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use crate::trend::TimeRange;

/// Page sizes the trending endpoint accepts.
const TRENDING_LIMITS: [u32; 3] = [10, 20, 50];

/// Current - see what's current across the web stack.
#[derive(Debug, Parser)]
#[command(name = "current")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the catalog API
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Show verbose output (full cards instead of tables)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print data lines, no headers or status
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the stack catalog (default if no command specified)
    Stacks(StacksArgs),

    /// Show details, downloads, and compatibility for one stack
    Show(ShowArgs),

    /// Search the catalog (live search when run without a query)
    Search(SearchArgs),

    /// Show trending stacks ranked by community metrics
    Trending(TrendingArgs),

    /// List the stack categories
    Categories,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for the `stacks` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StacksArgs {
    /// Only show stacks in this category
    #[arg(short, long, value_enum)]
    pub category: Option<StackCategory>,

    /// Case-insensitive filter on stack name and language
    #[arg(value_name = "QUERY")]
    pub filter: Option<String>,

    /// Print the stack list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Name of the stack to show
    pub name: String,

    /// Time range for the downloads chart
    #[arg(short, long, value_enum, default_value_t)]
    pub range: TimeRange,

    /// Print the stack details as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SearchArgs {
    /// Search query (omit to search as you type)
    pub query: Option<String>,

    /// Print the search results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `trending` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TrendingArgs {
    /// Metric used to rank stacks
    #[arg(short, long, value_enum, default_value_t)]
    pub sort_by: TrendingSort,

    /// How many stacks to fetch
    #[arg(short, long, default_value_t = 20, value_parser = parse_limit)]
    pub limit: u32,

    /// Print the trending list as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for TrendingArgs {
    fn default() -> Self {
        Self {
            sort_by: TrendingSort::default(),
            limit: 20,
            json: false,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_limit(raw: &str) -> Result<u32, String> {
    let limit: u32 = raw
        .parse()
        .map_err(|_| String::from("limit must be a number"))?;
    if TRENDING_LIMITS.contains(&limit) {
        Ok(limit)
    } else {
        Err(format!(
            "limit must be one of: {}",
            TRENDING_LIMITS.map(|l| l.to_string()).join(", ")
        ))
    }
}
