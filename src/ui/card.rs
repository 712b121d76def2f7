//! Stack card rendering.
//!
//! Pure line builders shared by the `stacks`, `search`, and `trending`
//! commands. Commands push the returned lines through the UI, so the same
//! card renders identically everywhere it appears.

use crate::api::types::Stack;

use super::format::format_metric;
use super::icons::rank_styled;
use super::table::Table;
use super::theme::CurrentTheme;

/// Render one stack as a multi-line card.
///
/// With a rank, the first line carries the trending badge (`#1 React ...`).
pub fn card_lines(stack: &Stack, rank: Option<usize>, theme: &CurrentTheme) -> Vec<String> {
    let mut lines = Vec::new();

    let title = format!(
        "{} {}",
        theme.highlight.apply_to(&stack.name),
        theme
            .dim
            .apply_to(format!("v{} · {}", stack.latest_version, stack.release_date)),
    );
    match rank {
        Some(rank) => lines.push(format!("  {} {}", rank_styled(rank, theme), title)),
        None => lines.push(format!("  {}", title)),
    }

    lines.push(format!(
        "    {} {} {}",
        theme.format_category(stack.category),
        theme.dim.apply_to("·"),
        theme.dim.apply_to(&stack.language),
    ));

    lines.push(format!(
        "    ★ {} stars {} {} forks {} {} weekly",
        format_metric(stack.github_stars),
        theme.dim.apply_to("·"),
        format_metric(stack.github_forks),
        theme.dim.apply_to("·"),
        format_metric(stack.downloads_weekly),
    ));

    if let Some(install) = stack.install.primary() {
        lines.push(format!(
            "    {} {}",
            theme.key.apply_to("Install:"),
            theme.command.apply_to(install),
        ));
    }

    let mut links = format!(
        "    {} {}",
        theme.key.apply_to("Docs:"),
        theme.dim.apply_to(&stack.docs_url),
    );
    if let Some(github) = &stack.github_url {
        links.push_str(&format!(
            " {} {} {}",
            theme.dim.apply_to("·"),
            theme.key.apply_to("GitHub:"),
            theme.dim.apply_to(github),
        ));
    }
    lines.push(links);

    lines
}

/// One-line summary for quiet mode.
pub fn summary_line(stack: &Stack) -> String {
    format!("{} v{}", stack.name, stack.latest_version)
}

/// Build the compact catalog table: one row per stack.
pub fn stack_table<'a, I>(stacks: I, theme: &CurrentTheme) -> Table
where
    I: IntoIterator<Item = &'a Stack>,
{
    let mut table = Table::new(vec![
        "Name", "Version", "Language", "Category", "Stars", "Weekly",
    ])
    .align_right(4)
    .align_right(5);

    for stack in stacks {
        table.add_row(vec![
            &stack.name,
            &stack.latest_version,
            &stack.language,
            &theme.format_category(stack.category),
            &format_metric(stack.github_stars),
            &format_metric(stack.downloads_weekly),
        ]);
    }

    table
}
