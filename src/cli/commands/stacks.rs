//! Stacks command implementation.
//!
//! The `current stacks` command lists the catalog, with optional category
//! and text filters applied client-side.

use crate::api::ApiClient;
use crate::catalog::{filter_stacks, CatalogQuery};
use crate::cli::args::StacksArgs;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::ui::theme::CurrentTheme;
use crate::ui::{card_lines, stack_table, summary_line, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The stacks command implementation.
pub struct StacksCommand {
    config: ApiConfig,
    args: StacksArgs,
}

impl StacksCommand {
    /// Create a new stacks command.
    pub fn new(config: &ApiConfig, args: StacksArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StacksArgs {
        &self.args
    }

    fn query(&self) -> CatalogQuery {
        let query = match self.args.category {
            Some(category) => CatalogQuery::in_category(category),
            None => CatalogQuery::all(),
        };
        match &self.args.filter {
            Some(text) => query.matching(text),
            None => query,
        }
    }
}

impl Command for StacksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.config);

        if self.args.json {
            let response = match client.stacks() {
                Ok(response) => response,
                Err(e) => {
                    ui.error(&format!("Error: {}", e));
                    return Ok(CommandResult::failure(1));
                }
            };
            let stacks = response.into_stacks();
            let view = filter_stacks(&stacks, &self.query());
            ui.message(&serde_json::to_string_pretty(&view)?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Tech Stacks");

        let mut spinner = ui.start_spinner("Fetching stacks...");
        let response = match client.stacks() {
            Ok(response) => {
                spinner.finish_and_clear();
                response
            }
            Err(e) => {
                spinner.finish_error("Failed to fetch stacks");
                ui.error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };

        let stacks = response.into_stacks();
        let query = self.query();
        let view = filter_stacks(&stacks, &query);
        let theme = CurrentTheme::new();

        if ui.output_mode() == OutputMode::Quiet {
            for stack in &view {
                ui.message(&summary_line(stack));
            }
            return Ok(CommandResult::success());
        }

        if view.is_empty() {
            ui.message(&format!(
                "  {}",
                theme.dim.apply_to("No stacks match your filters.")
            ));
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_detail() {
            for (i, stack) in view.iter().enumerate() {
                if i > 0 {
                    ui.message("");
                }
                for line in card_lines(stack, None, &theme) {
                    ui.message(&line);
                }
            }
        } else {
            let table = stack_table(view.iter().copied(), &theme);
            for line in table.render().lines() {
                ui.message(line);
            }
        }

        ui.message("");
        ui.success(&query.describe_results(view.len()));
        ui.show_hint("Run `current show <name>` for full details");

        Ok(CommandResult::success())
    }
}
