//! Week-over-week trend classification.

/// Change above this fraction counts as a real move.
const THRESHOLD: f64 = 0.05;

/// Coarse direction of a download series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Chart caption, e.g. `Trending up`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "Trending up",
            Self::Down => "Trending down",
            Self::Stable => "Stable",
        }
    }
}

/// Compare the mean of the most recent seven values against the mean of the
/// up-to-seven values before them.
///
/// Relative change above +5% is [`TrendDirection::Up`], below -5% is
/// [`TrendDirection::Down`], anything else (including too little history or
/// a zero previous mean) is [`TrendDirection::Stable`].
pub fn classify(values: &[u64]) -> TrendDirection {
    let recent_len = values.len().min(7);
    if recent_len == 0 {
        return TrendDirection::Stable;
    }

    let split = values.len() - recent_len;
    let recent = &values[split..];
    let previous = &values[split.saturating_sub(7)..split];
    if previous.is_empty() {
        return TrendDirection::Stable;
    }

    let recent_mean = mean(recent);
    let previous_mean = mean(previous);
    if previous_mean == 0.0 {
        return TrendDirection::Stable;
    }

    let change = (recent_mean - previous_mean) / previous_mean;
    if change > THRESHOLD {
        TrendDirection::Up
    } else if change < -THRESHOLD {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[u64]) -> f64 {
    values.iter().sum::<u64>() as f64 / values.len() as f64
}
