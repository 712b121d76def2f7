//! Unified icon vocabulary for consistent CLI output.
//!
//! All glyphs used across commands live here: trend arrows, compatibility
//! status marks, and trending rank badges. Keeping them in one place means
//! a direction or status renders identically in every view.

use crate::catalog::compat::CompatStatus;
use crate::trend::TrendDirection;

use super::theme::CurrentTheme;

/// Arrow glyph for a trend direction.
pub fn trend_icon(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "↑",
        TrendDirection::Down => "↓",
        TrendDirection::Stable => "→",
    }
}

/// Styled arrow + label for a trend direction.
pub fn trend_styled(direction: TrendDirection, theme: &CurrentTheme) -> String {
    let text = format!("{} {}", trend_icon(direction), direction.label());
    let style = match direction {
        TrendDirection::Up => &theme.success,
        TrendDirection::Down => &theme.error,
        TrendDirection::Stable => &theme.dim,
    };
    format!("{}", style.apply_to(text))
}

/// Mark glyph for a compatibility status.
pub fn compat_icon(status: CompatStatus) -> &'static str {
    match status {
        CompatStatus::Compatible => "✓",
        CompatStatus::Incompatible => "✗",
        CompatStatus::Warning => "⚠",
        CompatStatus::Unknown => "○",
    }
}

/// Styled mark for a compatibility status.
pub fn compat_styled(status: CompatStatus, theme: &CurrentTheme) -> String {
    let icon = compat_icon(status);
    let style = match status {
        CompatStatus::Compatible => &theme.success,
        CompatStatus::Incompatible => &theme.error,
        CompatStatus::Warning => &theme.warning,
        CompatStatus::Unknown => &theme.dim,
    };
    format!("{}", style.apply_to(icon))
}

/// Styled rank badge for trending positions.
///
/// The podium gets medal colors (gold, silver, bronze); everything below
/// renders as an accent-colored number, like the rank bubbles on the
/// trending page.
pub fn rank_styled(rank: usize, theme: &CurrentTheme) -> String {
    let badge = format!("#{}", rank);
    let style = match rank {
        1 => console::Style::new().yellow().bold(),
        2 => console::Style::new().white().bold(),
        3 => console::Style::new().color256(208).bold(),
        _ => theme.info.clone(),
    };
    format!("{}", style.apply_to(badge))
}
