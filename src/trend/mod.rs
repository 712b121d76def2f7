//! Synthetic download trends.
//!
//! A placeholder for real historical metrics: [`TrendSeries`] generates one
//! point per calendar day over a [`TimeRange`], and [`classify`] labels the
//! week-over-week direction.

pub mod classify;
pub mod series;

pub use classify::{classify, TrendDirection};
pub use series::{TimeRange, TrendPoint, TrendSeries};
