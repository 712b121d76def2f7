//! Number and timestamp formatting for metric display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format a metric count the way the cards do: `1.2M`, `45.3K`, `999`.
///
/// Missing and zero counts both render as `0`.
pub fn format_metric(value: Option<u64>) -> String {
    let value = match value {
        Some(v) if v > 0 => v,
        _ => return "0".to_string(),
    };

    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Format a count with thousands separators: `1,234,567`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a timestamp as a relative time string (e.g. "3 days ago").
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let diff = now.signed_duration_since(timestamp);
    let seconds = diff.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", minutes)
        };
    }

    let hours = minutes / 60;
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = hours / 24;
    if days < 30 {
        return if days == 1 {
            "yesterday".to_string()
        } else {
            format!("{} days ago", days)
        };
    }

    let months = days / 30;
    if months < 12 {
        return if months == 1 {
            "1 month ago".to_string()
        } else {
            format!("{} months ago", months)
        };
    }

    let years = months / 12;
    if years == 1 {
        "1 year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

/// Parse the loose timestamp strings the API hands back.
///
/// The feed mixes RFC 3339 (`2025-08-20T14:03:00Z`), bare datetimes, and
/// plain dates, so try each shape in turn.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

/// Render a raw API timestamp as relative time, or `N/A` when absent
/// or unparseable.
pub fn format_checked_at(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(format_relative_time)
        .unwrap_or_else(|| "N/A".to_string())
}
