//! Detail page rendering for a single stack.
//!
//! Builds the full `show` output below the page header: identity and
//! release info, metrics, the download chart, the compatibility matrix,
//! install commands, links, and recent version history. Sections without
//! data are skipped rather than rendered empty.

use crate::api::{InstallCommands, Stack, StackDetails, VersionEntry};
use crate::catalog::compat::{self, CompatStatus};
use crate::catalog::VersionBump;
use crate::trend::TrendSeries;

use super::chart::BarChart;
use super::format::{format_checked_at, format_grouped, format_metric, parse_timestamp};
use super::icons::{compat_styled, trend_styled};
use super::theme::CurrentTheme;

/// Most recent versions shown in the history section.
const HISTORY_LIMIT: usize = 5;

/// Change bullets shown per history entry.
const CHANGES_LIMIT: usize = 3;

/// Render the full detail page for a stack.
pub fn detail_lines(
    details: &StackDetails,
    series: &TrendSeries,
    theme: &CurrentTheme,
) -> Vec<String> {
    let stack = &details.stack;
    let mut lines = Vec::new();

    lines.push(format!(
        "  {} · {}",
        theme.format_category(stack.category),
        theme.dim.apply_to(&stack.language),
    ));
    lines.push(release_line(details, theme));

    if let Some(description) = &details.description {
        lines.push(String::new());
        lines.push(format!("  {description}"));
    }

    lines.push(String::new());
    lines.extend(metric_lines(stack, theme));

    lines.push(String::new());
    lines.push(section(
        &format!("Downloads Over Time ({})", series.range()),
        theme,
    ));
    lines.push(String::new());
    lines.push(format!(
        "  {} · {}",
        trend_styled(series.direction(), theme),
        theme.dim.apply_to(format!(
            "Avg: {}/day",
            format_grouped(series.daily_average())
        )),
    ));
    lines.push(String::new());
    lines.extend(BarChart::from_series(series).render(theme));
    lines.push(String::new());
    lines.push(stats_line(series, theme));

    lines.push(String::new());
    lines.push(section("Compatibility Matrix", theme));
    lines.push(format!(
        "  {}",
        theme.dim.apply_to(format!(
            "Recommended versions for compatible stacks with {}",
            stack.name
        )),
    ));
    lines.push(String::new());
    lines.extend(compat_lines(details, theme));

    if !stack.install.is_empty() {
        lines.push(String::new());
        lines.push(section("Installation", theme));
        lines.push(String::new());
        lines.extend(install_lines(&stack.install, theme));
    }

    lines.push(String::new());
    lines.push(section("Links", theme));
    lines.push(String::new());
    lines.extend(link_lines(stack, theme));

    if !details.version_history.is_empty() {
        lines.push(String::new());
        lines.push(section("Recent Versions", theme));
        lines.push(String::new());
        lines.extend(history_lines(&details.version_history, theme));
    }

    lines
}

fn section(title: &str, theme: &CurrentTheme) -> String {
    format!("{}", theme.header.apply_to(title))
}

/// `Released <date> · Previous: v<prev> (<bump>)`, dimmed as one line.
fn release_line(details: &StackDetails, theme: &CurrentTheme) -> String {
    let stack = &details.stack;
    let mut text = format!("Released {}", format_date(&stack.release_date));
    if let Some(previous) = &details.previous_version {
        text.push_str(&format!(" · Previous: v{previous}"));
        if let Some(bump) = VersionBump::between(&stack.latest_version, previous) {
            text.push_str(&format!(" ({})", bump.label()));
        }
    }
    format!("  {}", theme.dim.apply_to(text))
}

fn metric_lines(stack: &Stack, theme: &CurrentTheme) -> Vec<String> {
    let rows = [
        ("GitHub Stars", format_metric(stack.github_stars)),
        ("Forks", format_metric(stack.github_forks)),
        ("Weekly Downloads", format_metric(stack.downloads_weekly)),
        (
            "Last Checked",
            format_checked_at(stack.last_checked.as_deref()),
        ),
    ];
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(key, value)| {
            format!(
                "  {}  {}",
                theme.key.apply_to(format!("{key:<width$}")),
                theme.value.apply_to(value),
            )
        })
        .collect()
}

fn stats_line(series: &TrendSeries, theme: &CurrentTheme) -> String {
    format!(
        "  {}",
        theme.dim.apply_to(format!(
            "Total ({}): {} · Peak Day: {} · Lowest Day: {} · Daily Avg: {}",
            series.range(),
            format_metric(Some(series.total())),
            format_metric(Some(series.peak())),
            format_metric(Some(series.lowest())),
            format_metric(Some(series.daily_average())),
        )),
    )
}

struct CompatRow {
    status: CompatStatus,
    name: String,
    versions: String,
    note: Option<String>,
}

/// Rows for the matrix: the API's compatibility map when present,
/// otherwise the curated recommendations for this stack.
fn compat_rows(details: &StackDetails) -> Vec<CompatRow> {
    if !details.compatibility.is_empty() {
        return details
            .compatibility
            .iter()
            .map(|(name, range)| CompatRow {
                status: CompatStatus::Compatible,
                name: name.clone(),
                versions: range.clone(),
                note: None,
            })
            .collect();
    }

    compat::recommendations(&details.stack.name, details.stack.category)
        .iter()
        .map(|entry| CompatRow {
            status: entry.status,
            name: entry.name.to_string(),
            versions: entry.versions.join(", "),
            note: entry.note.map(str::to_string),
        })
        .collect()
}

fn compat_lines(details: &StackDetails, theme: &CurrentTheme) -> Vec<String> {
    let rows = compat_rows(details);
    if rows.is_empty() {
        return vec![format!(
            "  {}",
            theme
                .dim
                .apply_to("No compatibility information available for this stack.")
        )];
    }

    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let versions_width = rows
        .iter()
        .map(|r| r.versions.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| {
            let name = format!("{:<name_width$}", row.name);
            let mut line = format!(
                "  {} {}",
                compat_styled(row.status, theme),
                theme.highlight.apply_to(name),
            );
            match &row.note {
                Some(note) => {
                    line.push_str(&format!(
                        "  {:<versions_width$}  {}",
                        row.versions,
                        theme.dim.apply_to(note),
                    ));
                }
                None => line.push_str(&format!("  {}", row.versions)),
            }
            line
        })
        .collect()
}

fn install_lines(install: &InstallCommands, theme: &CurrentTheme) -> Vec<String> {
    let commands = install.all();
    let width = commands
        .iter()
        .map(|(manager, _)| manager.len())
        .max()
        .unwrap_or(0);

    commands
        .iter()
        .map(|(manager, command)| {
            format!(
                "  {}  {}",
                theme.key.apply_to(format!("{:<width$}", manager.to_uppercase())),
                theme.command.apply_to(command),
            )
        })
        .collect()
}

fn link_lines(stack: &Stack, theme: &CurrentTheme) -> Vec<String> {
    let mut links = vec![("Documentation", stack.docs_url.as_str())];
    if let Some(github) = stack.github_url.as_deref() {
        links.push(("GitHub Repository", github));
    }
    let width = links.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    links
        .iter()
        .map(|(label, url)| {
            format!(
                "  {}  {}",
                theme.key.apply_to(format!("{label:<width$}")),
                theme.info.apply_to(url),
            )
        })
        .collect()
}

fn history_lines(history: &[VersionEntry], theme: &CurrentTheme) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in history.iter().take(HISTORY_LIMIT) {
        lines.push(format!(
            "  {}  {}",
            theme.highlight.apply_to(format!("v{}", entry.version)),
            theme.dim.apply_to(format_date(&entry.date)),
        ));
        for change in entry.changes.iter().take(CHANGES_LIMIT) {
            lines.push(format!("    • {change}"));
        }
    }
    lines
}

/// `Mar 28, 2025` when the raw value parses, otherwise the raw value.
fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
