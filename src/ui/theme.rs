//! Visual theme and styling.

use console::Style;

use crate::api::types::StackCategory;

/// Current's visual theme.
#[derive(Debug, Clone)]
pub struct CurrentTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/accent elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for install commands shown in output (dim italic).
    pub command: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for CurrentTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentTheme {
    /// Create the default Current theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            command: Style::new(),
            border: Style::new(),
            hint: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("🌊"),
            self.highlight.apply_to(title)
        )
    }

    /// Badge style for a category tag.
    ///
    /// Only the eight categories with a fixed palette get their own color;
    /// everything else renders dim, matching the gray fallback badge.
    pub fn category_style(&self, category: StackCategory) -> Style {
        match category {
            StackCategory::Frontend => Style::new().blue(),
            StackCategory::Backend => Style::new().green(),
            StackCategory::Database => Style::new().magenta(),
            StackCategory::Styling => Style::new().color256(205),
            StackCategory::Testing => Style::new().yellow(),
            StackCategory::BuildTools => Style::new().color256(208),
            StackCategory::DataScience => Style::new().color256(63),
            StackCategory::Runtime => Style::new().red(),
            _ => Style::new().dim(),
        }
    }

    /// Format a category badge: colored label text.
    pub fn format_category(&self, category: StackCategory) -> String {
        format!("{}", self.category_style(category).apply_to(category.label()))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
