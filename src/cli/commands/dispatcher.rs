//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, StacksArgs};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failed result with the given exit code.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes parsed CLI arguments to command implementations.
pub struct CommandDispatcher {
    config: ApiConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher that talks to the given catalog API.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Get the API configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Dispatch a command based on parsed CLI arguments.
    ///
    /// Running with no subcommand browses the catalog, the same as
    /// `current stacks`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Stacks(args)) => {
                super::stacks::StacksCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Search(args)) => {
                super::search::SearchCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Trending(args)) => {
                super::trending::TrendingCommand::new(&self.config, args.clone()).execute(ui)
            }
            Some(Commands::Categories) => super::categories::CategoriesCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                super::stacks::StacksCommand::new(&self.config, StacksArgs::default()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_keeps_config() {
        let dispatcher = CommandDispatcher::new(ApiConfig::new("http://localhost:4000"));
        assert_eq!(dispatcher.config().base_url, "http://localhost:4000");
    }
}
