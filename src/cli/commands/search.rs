//! Search command implementation.
//!
//! With a query, `current search` runs one catalog search and prints the
//! results. Without one it opens the live search screen on a terminal;
//! piped, it fails with usage guidance instead of blocking on stdin.

use crate::api::ApiClient;
use crate::catalog::sort_by_stars;
use crate::cli::args::SearchArgs;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::search::{LiveSearch, POPULAR_SEARCHES};
use crate::ui::theme::CurrentTheme;
use crate::ui::{card_lines, stack_table, summary_line, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The search command implementation.
pub struct SearchCommand {
    config: ApiConfig,
    args: SearchArgs,
}

impl SearchCommand {
    /// Create a new search command.
    pub fn new(config: &ApiConfig, args: SearchArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SearchArgs {
        &self.args
    }

    fn search_once(&self, query: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.config);

        if self.args.json {
            let mut results = match client.search(query) {
                Ok(response) => response.into_stacks(),
                Err(e) => {
                    ui.error(&format!("Error: {}", e));
                    return Ok(CommandResult::failure(1));
                }
            };
            sort_by_stars(&mut results);
            ui.message(&serde_json::to_string_pretty(&results)?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Search Results");

        let mut spinner = ui.start_spinner(&format!("Searching for \"{}\"...", query));
        let mut results = match client.search(query) {
            Ok(response) => {
                spinner.finish_and_clear();
                response.into_stacks()
            }
            Err(e) => {
                spinner.finish_error("Search failed");
                ui.error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };
        sort_by_stars(&mut results);

        if ui.output_mode() == OutputMode::Quiet {
            for stack in &results {
                ui.message(&summary_line(stack));
            }
            return Ok(CommandResult::success());
        }

        let theme = CurrentTheme::new();

        if results.is_empty() {
            ui.message(&format!(
                "  {}",
                theme
                    .dim
                    .apply_to(format!("No stacks found matching \"{}\"", query))
            ));
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_detail() {
            for (i, stack) in results.iter().enumerate() {
                if i > 0 {
                    ui.message("");
                }
                for line in card_lines(stack, None, &theme) {
                    ui.message(&line);
                }
            }
        } else {
            let table = stack_table(&results, &theme);
            for line in table.render().lines() {
                ui.message(line);
            }
        }

        ui.message("");
        ui.success(&format!(
            "Found {} stack{} matching \"{}\"",
            results.len(),
            if results.len() == 1 { "" } else { "s" },
            query
        ));

        Ok(CommandResult::success())
    }
}

impl Command for SearchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.query {
            Some(query) => self.search_once(query, ui),
            None if ui.is_interactive() => {
                LiveSearch::new(ApiClient::new(&self.config)).run();
                Ok(CommandResult::success())
            }
            None => {
                ui.error("No query given. Pass one, or run on a terminal to search as you type.");
                ui.message("");
                ui.message("Popular searches:");
                for row in POPULAR_SEARCHES.chunks(6) {
                    ui.message(&format!("  {}", row.join("  ")));
                }
                Ok(CommandResult::failure(2))
            }
        }
    }
}
