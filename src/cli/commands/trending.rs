//! Trending command implementation.
//!
//! The `current trending` command prints the server-ranked trending list
//! with rank badges, keeping the server's order, plus a short insights
//! block summarizing the page.

use std::collections::BTreeSet;

use crate::api::ApiClient;
use crate::cli::args::TrendingArgs;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::ui::theme::CurrentTheme;
use crate::ui::{
    card_lines, format_grouped, format_metric, rank_styled, summary_line, OutputMode, Table,
    UserInterface,
};

use super::dispatcher::{Command, CommandResult};

/// The trending command implementation.
pub struct TrendingCommand {
    config: ApiConfig,
    args: TrendingArgs,
}

impl TrendingCommand {
    /// Create a new trending command.
    pub fn new(config: &ApiConfig, args: TrendingArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &TrendingArgs {
        &self.args
    }
}

impl Command for TrendingCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = ApiClient::new(&self.config);

        if self.args.json {
            let response = match client.trending(self.args.sort_by, self.args.limit) {
                Ok(response) => response,
                Err(e) => {
                    ui.error(&format!("Error: {}", e));
                    return Ok(CommandResult::failure(1));
                }
            };
            ui.message(&serde_json::to_string_pretty(&response)?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Trending Stacks");

        let mut spinner = ui.start_spinner("Fetching trending stacks...");
        let response = match client.trending(self.args.sort_by, self.args.limit) {
            Ok(response) => {
                spinner.finish_and_clear();
                response
            }
            Err(e) => {
                spinner.finish_error("Failed to fetch trending stacks");
                ui.error(&format!("Error: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };

        // The server's order is the ranking; never re-sort it here.
        let stacks = response.stacks;

        if ui.output_mode() == OutputMode::Quiet {
            for (i, stack) in stacks.iter().enumerate() {
                ui.message(&format!("#{} {}", i + 1, summary_line(stack)));
            }
            return Ok(CommandResult::success());
        }

        let theme = CurrentTheme::new();

        if stacks.is_empty() {
            ui.message(&format!(
                "  {}",
                theme.dim.apply_to("Nothing is trending right now.")
            ));
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "  {}",
            theme
                .dim
                .apply_to(format!("Top {} by {}", stacks.len(), self.args.sort_by))
        ));
        ui.message("");

        if ui.output_mode().shows_detail() {
            for (i, stack) in stacks.iter().enumerate() {
                if i > 0 {
                    ui.message("");
                }
                for line in card_lines(stack, Some(i + 1), &theme) {
                    ui.message(&line);
                }
            }
        } else {
            let mut table = Table::new(vec![
                "Rank", "Name", "Version", "Language", "Stars", "Weekly",
            ])
            .align_right(4)
            .align_right(5);
            for (i, stack) in stacks.iter().enumerate() {
                table.add_row(vec![
                    &rank_styled(i + 1, &theme),
                    &stack.name,
                    &stack.latest_version,
                    &stack.language,
                    &format_metric(stack.github_stars),
                    &format_metric(stack.downloads_weekly),
                ]);
            }
            for line in table.render().lines() {
                ui.message(line);
            }
        }

        ui.message("");
        ui.message(&format!("  {}", theme.key.apply_to("Insights")));
        if let Some(top) = stacks.iter().max_by_key(|s| s.stars()) {
            ui.message(&format!(
                "    Most starred: {} ({})",
                theme.highlight.apply_to(&top.name),
                format_metric(top.github_stars)
            ));
        }
        let total_stars: u64 = stacks.iter().map(|s| s.stars()).sum();
        ui.message(&format!(
            "    Combined stars: {}",
            format_grouped(total_stars)
        ));
        let languages: BTreeSet<&str> = stacks.iter().map(|s| s.language.as_str()).collect();
        ui.message(&format!("    Languages represented: {}", languages.len()));

        ui.show_hint("Try `--sort-by downloads` for a different ranking");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TrendingSort;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    const TRENDING: &str = r#"{
        "stacks": [
            {
                "name": "React",
                "language": "JavaScript",
                "latest_version": "19.1.0",
                "release_date": "2025-03-28",
                "docs_url": "https://react.dev",
                "install": {"npm": "npm install react"},
                "github_stars": 230000,
                "downloads_weekly": 32500000,
                "category": "frontend"
            },
            {
                "name": "Vue",
                "language": "JavaScript",
                "latest_version": "3.5.13",
                "release_date": "2025-01-20",
                "docs_url": "https://vuejs.org",
                "install": {"npm": "npm install vue"},
                "github_stars": 208000,
                "downloads_weekly": 5600000,
                "category": "frontend"
            },
            {
                "name": "FastAPI",
                "language": "Python",
                "latest_version": "0.115.0",
                "release_date": "2025-02-10",
                "docs_url": "https://fastapi.tiangolo.com",
                "install": {"pip": "pip install fastapi"},
                "github_stars": 78000,
                "downloads_weekly": 9400000,
                "category": "backend"
            }
        ],
        "sort_by": "stars",
        "total_count": 3
    }"#;

    fn command_for(server: &MockServer, args: TrendingArgs) -> TrendingCommand {
        TrendingCommand::new(&ApiConfig::new(server.base_url()), args)
    }

    #[test]
    fn forwards_sort_and_limit_to_the_api() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/stacks/trending")
                .query_param("sort_by", "downloads")
                .query_param("limit", "50");
            then.status(200).body(TRENDING);
        });
        let args = TrendingArgs {
            sort_by: TrendingSort::Downloads,
            limit: 50,
            json: false,
        };
        let cmd = command_for(&server, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        mock.assert();
    }

    #[test]
    fn keeps_the_server_ranking_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/trending");
            then.status(200).body(TRENDING);
        });
        let cmd = command_for(&server, TrendingArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(
            ui.messages(),
            ["#1 React v19.1.0", "#2 Vue v3.5.13", "#3 FastAPI v0.115.0"]
        );
    }

    #[test]
    fn renders_rank_badges_and_insights() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/trending");
            then.status(200).body(TRENDING);
        });
        let cmd = command_for(&server, TrendingArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_header("Trending Stacks"));
        assert!(ui.has_message("#1"));
        assert!(ui.has_message("Most starred:"));
        assert!(ui.has_message("Combined stars: 516,000"));
        assert!(ui.has_message("Languages represented: 2"));
    }

    #[test]
    fn fetch_failure_renders_error_view() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/trending");
            then.status(500).body("boom");
        });
        let cmd = command_for(&server, TrendingArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("HTTP 500"));
    }

    #[test]
    fn json_output_is_the_raw_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/trending");
            then.status(200).body(TRENDING);
        });
        let args = TrendingArgs {
            json: true,
            ..Default::default()
        };
        let cmd = command_for(&server, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let payload: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(payload["sort_by"], "stars");
        assert_eq!(payload["stacks"][0]["name"], "React");
    }
}
