#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter criteria and aggregate result types.
//!
//! These are the shapes flowing between the filter/aggregation pipeline
//! and the presentation boundary: a typed per-field selection, grouped
//! count pairs, the monthly time series, and the forecast input/output
//! contract.

use dorset_dash_incident_models::MonthPeriod;
use serde::{Deserialize, Serialize};

/// The wildcard selection label shown first in every dropdown.
pub const ALL: &str = "All";

/// A single dashboard filter selection: a concrete value or the `"All"`
/// wildcard meaning no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No constraint on the field.
    #[default]
    All,
    /// The field must equal this value exactly (case-sensitive).
    Value(String),
}

impl Selection {
    /// Parses a UI selection parameter; an absent parameter or the
    /// literal `"All"` means no constraint.
    #[must_use]
    pub fn from_param(param: Option<String>) -> Self {
        match param {
            Some(value) if value != ALL => Self::Value(value),
            _ => Self::All,
        }
    }

    /// Whether a record's field value satisfies this selection.
    ///
    /// A missing value never matches a concrete selection.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Value(want) => value == Some(want.as_str()),
        }
    }
}

/// The four dashboard filters, composed with logical AND.
///
/// Criteria are typed per field, so a criterion naming a field outside
/// the schema is unrepresentable here; only the generic `field=` API
/// parameter can still fail that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Year selection, matched against the year's decimal string.
    pub year: Selection,
    /// Month label selection.
    pub month: Selection,
    /// Crime type selection.
    pub crime_type: Selection,
    /// Normalized location selection.
    pub location: Selection,
}

impl FilterCriteria {
    /// Whether every field is the `"All"` wildcard.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// A (value, count) pair from a grouped count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCount {
    /// The distinct field value.
    pub value: String,
    /// Number of records carrying that value.
    pub count: u64,
}

/// One monthly bucket of the time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// The calendar month, structured; formatted to a label only at the
    /// API boundary.
    pub period: MonthPeriod,
    /// Number of records in this month.
    pub count: u64,
}

/// Chronologically ordered monthly counts plus the unparseable remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySeries {
    /// Buckets in strict chronological order.
    pub points: Vec<SeriesPoint>,
    /// Records whose period label could not be parsed; they are excluded
    /// from the chronology but still reported rather than dropped.
    pub not_available: u64,
}

impl MonthlySeries {
    /// The series with zero-count buckets materialized for every month
    /// between the first and last known period.
    #[must_use]
    pub fn gap_filled(&self) -> Vec<SeriesPoint> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Vec::new();
        };

        let mut filled = Vec::new();
        let mut next = self.points.iter().peekable();
        let mut period = first.period;
        loop {
            let count = match next.peek() {
                Some(point) if point.period == period => {
                    let count = point.count;
                    next.next();
                    count
                }
                _ => 0,
            };
            filled.push(SeriesPoint { period, count });
            if period == last.period {
                break;
            }
            period = period.succ();
        }
        filled
    }
}

/// Future predicted bucket produced by a forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// The future calendar month.
    pub period: MonthPeriod,
    /// Predicted record count for that month.
    pub predicted: f64,
}

/// Headline numbers for the dashboard's summary cards, computed over the
/// full dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Total records in the dataset.
    pub total_crimes: u64,
    /// Modal crime type, `None` when every value is missing.
    pub most_common_crime: Option<String>,
    /// Modal outcome category, `None` when every value is missing.
    pub most_common_outcome: Option<String>,
    /// Count of distinct normalized locations.
    pub unique_locations: u64,
}

/// Distinct values per filter field, each list prefixed with `"All"`,
/// ready to populate the dashboard's selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Years, ascending numerically.
    pub years: Vec<String>,
    /// Month labels, in calendar order where the labels are month names.
    pub months: Vec<String>,
    /// Crime types, ascending lexically.
    pub crime_types: Vec<String>,
    /// Locations, ascending lexically.
    pub locations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: i32, month: u32, count: u64) -> SeriesPoint {
        SeriesPoint {
            period: MonthPeriod::new(year, month).unwrap(),
            count,
        }
    }

    #[test]
    fn selection_from_param() {
        assert_eq!(Selection::from_param(None), Selection::All);
        assert_eq!(Selection::from_param(Some("All".to_string())), Selection::All);
        assert_eq!(
            Selection::from_param(Some("Theft".to_string())),
            Selection::Value("Theft".to_string())
        );
    }

    #[test]
    fn concrete_selection_never_matches_missing() {
        let theft = Selection::Value("Theft".to_string());
        assert!(!theft.matches(None));
        assert!(theft.matches(Some("Theft")));
        assert!(!theft.matches(Some("theft")));
        assert!(Selection::All.matches(None));
    }

    #[test]
    fn gap_filling_inserts_zero_buckets() {
        let series = MonthlySeries {
            points: vec![point(2023, 11, 4), point(2024, 2, 7)],
            not_available: 0,
        };
        let filled = series.gap_filled();
        assert_eq!(
            filled,
            vec![
                point(2023, 11, 4),
                point(2023, 12, 0),
                point(2024, 1, 0),
                point(2024, 2, 7),
            ]
        );
    }

    #[test]
    fn gap_filling_handles_empty_and_single() {
        let empty = MonthlySeries {
            points: Vec::new(),
            not_available: 3,
        };
        assert!(empty.gap_filled().is_empty());

        let single = MonthlySeries {
            points: vec![point(2024, 6, 2)],
            not_available: 0,
        };
        assert_eq!(single.gap_filled(), vec![point(2024, 6, 2)]);
    }
}
