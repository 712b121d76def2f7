//! Terminal bar chart for download history.

use chrono::NaiveDate;

use crate::trend::{TimeRange, TrendSeries};

use super::format::format_metric;
use super::theme::CurrentTheme;

/// Width of the longest bar, in cells.
const BAR_WIDTH: usize = 32;

/// Days aggregated into one chart row.
///
/// A week stays daily; longer ranges bucket down to a readable row count
/// (a month into 8 rows, a quarter into 6, a year into 12 monthly rows).
fn bucket_days(range: TimeRange) -> usize {
    match range {
        TimeRange::Week => 1,
        TimeRange::Month => 4,
        TimeRange::Quarter => 16,
        TimeRange::Year => 31,
    }
}

fn bucket_label(range: TimeRange, date: NaiveDate) -> String {
    match range {
        TimeRange::Week => date.format("%a").to_string(),
        TimeRange::Month | TimeRange::Quarter => date.format("%b %-d").to_string(),
        TimeRange::Year => date.format("%b %y").to_string(),
    }
}

/// One aggregated chart row.
#[derive(Debug)]
pub struct ChartRow {
    /// Date label for the start of the bucket.
    pub label: String,
    /// Mean daily downloads within the bucket.
    pub value: u64,
}

/// Horizontal bar chart over a synthesized download series.
#[derive(Debug)]
pub struct BarChart {
    rows: Vec<ChartRow>,
}

impl BarChart {
    /// Aggregate a series into labelled buckets.
    pub fn from_series(series: &TrendSeries) -> Self {
        let days = bucket_days(series.range());
        let rows = series
            .points()
            .chunks(days)
            .map(|chunk| {
                let mean = chunk.iter().map(|p| p.downloads).sum::<u64>() / chunk.len() as u64;
                ChartRow {
                    label: bucket_label(series.range(), chunk[0].date),
                    value: mean,
                }
            })
            .collect();

        Self { rows }
    }

    /// The aggregated rows, oldest first.
    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    /// Render the chart as bar lines, scaled to the tallest bucket.
    pub fn render(&self, theme: &CurrentTheme) -> Vec<String> {
        let max = self.rows.iter().map(|r| r.value).max().unwrap_or(0);
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        self.rows
            .iter()
            .map(|row| {
                let cells = if max == 0 {
                    0
                } else {
                    let scaled = (row.value as u128 * BAR_WIDTH as u128 / max as u128) as usize;
                    // Non-zero buckets always get at least one cell.
                    scaled.max(usize::from(row.value > 0))
                };
                format!(
                    "  {:>width$}  {} {}",
                    row.label,
                    theme.info.apply_to("█".repeat(cells)),
                    theme.dim.apply_to(format_metric(Some(row.value))),
                    width = label_width,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn series_for(range: TimeRange) -> TrendSeries {
        let mut rng = StdRng::seed_from_u64(7);
        let today = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
        TrendSeries::synthesize_with(&mut rng, range, today)
    }

    #[test]
    fn week_chart_keeps_one_row_per_day() {
        let chart = BarChart::from_series(&series_for(TimeRange::Week));
        assert_eq!(chart.rows().len(), 8);
        // Weekday labels: "Mon", "Tue", ...
        assert!(chart.rows().iter().all(|r| r.label.len() == 3));
    }

    #[test]
    fn month_chart_aggregates_into_eight_rows() {
        let chart = BarChart::from_series(&series_for(TimeRange::Month));
        assert_eq!(chart.rows().len(), 8);
    }

    #[test]
    fn quarter_chart_aggregates_into_six_rows() {
        let chart = BarChart::from_series(&series_for(TimeRange::Quarter));
        assert_eq!(chart.rows().len(), 6);
    }

    #[test]
    fn year_chart_aggregates_into_twelve_rows() {
        let chart = BarChart::from_series(&series_for(TimeRange::Year));
        assert_eq!(chart.rows().len(), 12);
    }

    #[test]
    fn rows_are_ordered_oldest_first() {
        let series = series_for(TimeRange::Week);
        let chart = BarChart::from_series(&series);

        let first_label = bucket_label(TimeRange::Week, series.points()[0].date);
        assert_eq!(chart.rows()[0].label, first_label);
    }

    #[test]
    fn tallest_bucket_gets_the_full_bar() {
        let theme = CurrentTheme::plain();
        let chart = BarChart::from_series(&series_for(TimeRange::Month));
        let lines = chart.render(&theme);

        let full_bar = "█".repeat(BAR_WIDTH);
        assert!(lines.iter().any(|l| l.contains(&full_bar)));
    }

    #[test]
    fn render_includes_labels_and_values() {
        let theme = CurrentTheme::plain();
        let chart = BarChart::from_series(&series_for(TimeRange::Week));
        let lines = chart.render(&theme);

        assert_eq!(lines.len(), 8);
        for (line, row) in lines.iter().zip(chart.rows()) {
            assert!(line.contains(&row.label));
            assert!(line.contains(&format_metric(Some(row.value))));
        }
    }
}
