//! The forecast boundary.
//!
//! The dashboard only defines the data shape crossing this seam: the
//! observed monthly series goes in, future (period, predicted) pairs
//! come out. Any model can sit behind the trait; the core never
//! interprets or validates its assumptions.

use dorset_dash_analytics_models::{ForecastPoint, SeriesPoint};

/// A pluggable monthly-count forecaster.
pub trait Forecaster: Send + Sync {
    /// Predicts `horizon` future monthly buckets from the observed
    /// series. The series is chronologically ordered; predictions start
    /// at the month after the last observed period.
    fn forecast(&self, series: &[SeriesPoint], horizon: u32) -> Vec<ForecastPoint>;
}

/// Seasonal-naive baseline: each future month is predicted as the mean
/// of the historical counts for the same calendar month, falling back to
/// the overall mean for months with no history.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalNaive;

impl Forecaster for SeasonalNaive {
    #[allow(clippy::cast_precision_loss)]
    fn forecast(&self, series: &[SeriesPoint], horizon: u32) -> Vec<ForecastPoint> {
        let Some(last) = series.last() else {
            return Vec::new();
        };

        let mut sums = [0u64; 12];
        let mut counts = [0u32; 12];
        for point in series {
            let idx = (point.period.month() - 1) as usize;
            sums[idx] += point.count;
            counts[idx] += 1;
        }
        let overall =
            series.iter().map(|p| p.count).sum::<u64>() as f64 / series.len() as f64;

        let mut period = last.period;
        (0..horizon)
            .map(|_| {
                period = period.succ();
                let idx = (period.month() - 1) as usize;
                let predicted = if counts[idx] > 0 {
                    sums[idx] as f64 / f64::from(counts[idx])
                } else {
                    overall
                };
                ForecastPoint { period, predicted }
            })
            .collect()
    }
}
