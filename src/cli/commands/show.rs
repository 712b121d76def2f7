//! Show command implementation.
//!
//! The `current show` command renders the full detail view for one stack:
//! metadata, the synthesized downloads chart, the compatibility matrix,
//! install commands, links, and recent versions.

use crate::api::ApiClient;
use crate::cli::args::ShowArgs;
use crate::config::ApiConfig;
use crate::error::{CurrentError, Result};
use crate::trend::TrendSeries;
use crate::ui::theme::CurrentTheme;
use crate::ui::{detail_lines, summary_line, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    config: ApiConfig,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(config: &ApiConfig, args: ShowArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.config);

        if self.args.json {
            let details = match client.stack(&self.args.name) {
                Ok(details) => details,
                Err(e) => {
                    ui.error(&format!("Error: {}", e));
                    return Ok(CommandResult::failure(1));
                }
            };
            ui.message(&serde_json::to_string_pretty(&details)?);
            return Ok(CommandResult::success());
        }

        let mut spinner = ui.start_spinner(&format!("Fetching {}...", self.args.name));
        let details = match client.stack(&self.args.name) {
            Ok(details) => details,
            Err(CurrentError::StackNotFound { name }) => {
                spinner.finish_and_clear();
                ui.show_header("Stack Not Found");
                ui.error(&format!("Stack '{}' not found", name));
                ui.show_hint("Run `current stacks` to see what's tracked");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => {
                spinner.finish_error("Failed to fetch stack");
                ui.error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };

        spinner.set_message("Loading chart data...");
        let series = TrendSeries::synthesize(self.args.range);
        spinner.finish_and_clear();

        if ui.output_mode() == OutputMode::Quiet {
            ui.message(&summary_line(&details.stack));
            return Ok(CommandResult::success());
        }

        let theme = CurrentTheme::new();
        ui.show_header(&summary_line(&details.stack));
        for line in detail_lines(&details, &series, &theme) {
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::TimeRange;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    const REACT_DETAILS: &str = r#"{
        "name": "React",
        "language": "JavaScript",
        "latest_version": "19.1.0",
        "release_date": "2025-03-28",
        "docs_url": "https://react.dev",
        "github_url": "https://github.com/facebook/react",
        "install": {"npm": "npm install react", "yarn": "yarn add react"},
        "github_stars": 230000,
        "github_forks": 48000,
        "downloads_weekly": 32500000,
        "category": "frontend",
        "description": "The library for web and native user interfaces",
        "previous_version": "19.0.0",
        "version_history": [
            {"version": "19.1.0", "date": "2025-03-28", "changes": ["Owner stacks", "Suspense fixes"]},
            {"version": "19.0.0", "date": "2024-12-05", "changes": ["Actions", "Server components"]}
        ]
    }"#;

    fn args_for(name: &str) -> ShowArgs {
        ShowArgs {
            name: name.to_string(),
            range: TimeRange::default(),
            json: false,
        }
    }

    fn command_for(server: &MockServer, args: ShowArgs) -> ShowCommand {
        ShowCommand::new(&ApiConfig::new(server.base_url()), args)
    }

    fn mock_react(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/stacks/React");
            then.status(200).body(REACT_DETAILS);
        });
    }

    #[test]
    fn renders_every_detail_section() {
        let server = MockServer::start();
        mock_react(&server);
        let cmd = command_for(&server, args_for("React"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_header("React v19.1.0"));
        assert!(ui.has_message("Downloads Over Time (30d)"));
        assert!(ui.has_message("Compatibility Matrix"));
        assert!(ui.has_message("Installation"));
        assert!(ui.has_message("Links"));
        assert!(ui.has_message("Recent Versions"));
    }

    #[test]
    fn range_flag_flows_into_the_chart_title() {
        let server = MockServer::start();
        mock_react(&server);
        let args = ShowArgs {
            range: TimeRange::Week,
            ..args_for("React")
        };
        let cmd = command_for(&server, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Downloads Over Time (7d)"));
    }

    #[test]
    fn missing_stack_fails_with_not_found_view() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/Svelte");
            then.status(404)
                .body(r#"{"detail": "Stack 'Svelte' not found"}"#);
        });
        let cmd = command_for(&server, args_for("Svelte"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_header("Stack Not Found"));
        assert!(ui.has_error("Stack 'Svelte' not found"));
    }

    #[test]
    fn transport_failure_renders_error_view() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/React");
            then.status(502).body("bad gateway");
        });
        let cmd = command_for(&server, args_for("React"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_error("HTTP 502"));
    }

    #[test]
    fn quiet_mode_prints_only_the_summary() {
        let server = MockServer::start();
        mock_react(&server);
        let cmd = command_for(&server, args_for("React"));
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), ["React v19.1.0"]);
    }

    #[test]
    fn json_mode_prints_the_details_payload() {
        let server = MockServer::start();
        mock_react(&server);
        let args = ShowArgs {
            json: true,
            ..args_for("React")
        };
        let cmd = command_for(&server, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let payload: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(payload["name"], "React");
        assert_eq!(payload["previous_version"], "19.0.0");
    }
}
