//! The time-series builder: monthly buckets in strict chronology.

use std::collections::BTreeMap;

use dorset_dash_analytics_models::{MonthlySeries, SeriesPoint};
use dorset_dash_incident_models::{MonthPeriod, Record};

/// Buckets the view by calendar month and returns the counts in strict
/// chronological order.
///
/// Records whose period label failed to parse are excluded from the
/// chronology and reported through [`MonthlySeries::not_available`]
/// instead of aborting the aggregation.
#[must_use]
pub fn monthly_series(view: &[&Record]) -> MonthlySeries {
    let mut buckets: BTreeMap<MonthPeriod, u64> = BTreeMap::new();
    let mut not_available = 0u64;

    for record in view {
        match record.period {
            Some(period) => *buckets.entry(period).or_insert(0) += 1,
            None => not_available += 1,
        }
    }

    MonthlySeries {
        points: buckets
            .into_iter()
            .map(|(period, count)| SeriesPoint { period, count })
            .collect(),
        not_available,
    }
}
