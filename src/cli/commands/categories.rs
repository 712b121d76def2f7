//! Categories command implementation.
//!
//! The `current categories` command lists every category the catalog
//! groups stacks under, with the tag `--category` accepts.

use crate::api::StackCategory;
use crate::error::Result;
use crate::ui::theme::CurrentTheme;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The categories command implementation.
pub struct CategoriesCommand;

impl CategoriesCommand {
    /// Create a new categories command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CategoriesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CategoriesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let categories = StackCategory::all();

        if ui.output_mode() == OutputMode::Quiet {
            for category in categories {
                ui.message(category.as_str());
            }
            return Ok(CommandResult::success());
        }

        ui.show_header("Stack Categories");

        let theme = CurrentTheme::new();
        let width = categories
            .iter()
            .map(|c| c.label().len())
            .max()
            .unwrap_or(0);
        for category in categories {
            let label = format!("{:<width$}", category.label());
            ui.message(&format!(
                "  {}  {}",
                theme.category_style(*category).apply_to(label),
                theme.dim.apply_to(category.as_str())
            ));
        }

        ui.message("");
        ui.success(&format!("{} categories", categories.len()));
        ui.show_hint("Run `current stacks --category <tag>` to browse one");

        Ok(CommandResult::success())
    }
}
