//! Synthetic download series generation.
//!
//! The catalog has no historical download data yet, so the chart renders a
//! locally generated placeholder series: a per-series baseline, uniform
//! noise, and a phase factor that nudges the newer half of the range
//! upward. Nothing here is persisted or authoritative.

use chrono::{Days, Local, NaiveDate};
use clap::ValueEnum;
use rand::Rng;

use super::classify::{classify, TrendDirection};

/// Noise band applied to every point.
const NOISE: f64 = 0.15;

/// Scale for the older half of the range.
const PHASE_OLDER: f64 = 0.95;

/// Scale for the newer half of the range.
const PHASE_RECENT: f64 = 1.10;

/// Baseline draw, once per series.
const BASE_MIN: u64 = 10_000;
const BASE_MAX: u64 = 110_000;

/// Chart range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeRange {
    #[value(name = "7d")]
    Week,
    #[default]
    #[value(name = "30d")]
    Month,
    #[value(name = "90d")]
    Quarter,
    #[value(name = "1y")]
    Year,
}

impl TimeRange {
    /// Days covered; the series has one extra point for today.
    pub fn days(&self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic (day, downloads) sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub downloads: u64,
}

/// A generated series over one range, one point per calendar day ending
/// today.
#[derive(Debug, Clone)]
pub struct TrendSeries {
    range: TimeRange,
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Generate a fresh series ending on the local calendar day.
    pub fn synthesize(range: TimeRange) -> Self {
        Self::synthesize_with(&mut rand::thread_rng(), range, Local::now().date_naive())
    }

    /// Generate with an explicit RNG and end day. Tests seed this.
    pub fn synthesize_with<R: Rng + ?Sized>(rng: &mut R, range: TimeRange, today: NaiveDate) -> Self {
        let days = range.days();
        let base = rng.gen_range(BASE_MIN..BASE_MAX) as f64;
        let half = days as f64 / 2.0;

        let mut points = Vec::with_capacity(days as usize + 1);
        for ago in (0..=days).rev() {
            let date = today - Days::new(ago);
            let noise = rng.gen_range(-NOISE..=NOISE);
            let phase = if (ago as f64) < half {
                PHASE_RECENT
            } else {
                PHASE_OLDER
            };
            let downloads = (base * (1.0 + noise) * phase).floor().max(0.0) as u64;
            points.push(TrendPoint { date, downloads });
        }

        Self { range, points }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    /// Overall direction, comparing the last week against the one before.
    pub fn direction(&self) -> TrendDirection {
        let values: Vec<u64> = self.points.iter().map(|p| p.downloads).collect();
        classify(&values)
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.downloads).sum()
    }

    pub fn peak(&self) -> u64 {
        self.points.iter().map(|p| p.downloads).max().unwrap_or(0)
    }

    pub fn lowest(&self) -> u64 {
        self.points.iter().map(|p| p.downloads).min().unwrap_or(0)
    }

    /// Floor of the per-day mean.
    pub fn daily_average(&self) -> u64 {
        if self.points.is_empty() {
            return 0;
        }
        self.total() / self.points.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn every_range_yields_days_plus_one_points() {
        let mut rng = StdRng::seed_from_u64(7);
        for (range, expected) in [
            (TimeRange::Week, 8),
            (TimeRange::Month, 31),
            (TimeRange::Quarter, 91),
            (TimeRange::Year, 366),
        ] {
            let series = TrendSeries::synthesize_with(&mut rng, range, fixed_today());
            assert_eq!(series.points().len(), expected, "range {}", range);
        }
    }

    #[test]
    fn values_are_always_positive() {
        let mut rng = StdRng::seed_from_u64(99);
        let series = TrendSeries::synthesize_with(&mut rng, TimeRange::Year, fixed_today());
        assert!(series.points().iter().all(|p| p.downloads > 0));
    }

    #[test]
    fn series_covers_consecutive_days_ending_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let today = fixed_today();
        let series = TrendSeries::synthesize_with(&mut rng, TimeRange::Week, today);

        let first = series.points().first().unwrap();
        let last = series.points().last().unwrap();
        assert_eq!(last.date, today);
        assert_eq!(first.date, today - Days::new(7));
        for pair in series.points().windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    #[test]
    fn summary_stats_are_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        let series = TrendSeries::synthesize_with(&mut rng, TimeRange::Month, fixed_today());

        assert!(series.peak() >= series.lowest());
        assert!(series.daily_average() >= series.lowest());
        assert!(series.daily_average() <= series.peak());
        assert_eq!(
            series.total(),
            series.points().iter().map(|p| p.downloads).sum::<u64>()
        );
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = TrendSeries::synthesize_with(&mut StdRng::seed_from_u64(5), TimeRange::Week, fixed_today());
        let b = TrendSeries::synthesize_with(&mut StdRng::seed_from_u64(5), TimeRange::Week, fixed_today());
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn range_day_counts() {
        assert_eq!(TimeRange::Week.days(), 7);
        assert_eq!(TimeRange::Month.days(), 30);
        assert_eq!(TimeRange::Quarter.days(), 90);
        assert_eq!(TimeRange::Year.days(), 365);
        assert_eq!(TimeRange::default(), TimeRange::Month);
    }
}
