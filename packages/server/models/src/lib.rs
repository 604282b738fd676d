#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dashboard server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the core pipeline types so the API contract can evolve
//! independently; notably, structured [`MonthPeriod`]s become display
//! labels only here.
//!
//! [`MonthPeriod`]: dorset_dash_incident_models::MonthPeriod

use dorset_dash_analytics_models::{
    DatasetSummary, FilterCriteria, ForecastPoint, MonthlySeries, Selection, SeriesPoint,
};
use dorset_dash_incident_models::Record;
use serde::{Deserialize, Serialize};

/// Marker rendered for aggregates with no non-missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Query parameters shared by the dashboard endpoints.
///
/// The four filter fields mirror the dashboard's dropdowns: absent or
/// `"All"` means unconstrained. The remaining fields are used only by
/// the endpoints that document them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    /// Year filter.
    pub year: Option<String>,
    /// Month filter.
    pub month: Option<String>,
    /// Crime type filter.
    pub crime_type: Option<String>,
    /// Location filter.
    pub location: Option<String>,
    /// Record field for `/distribution`.
    pub field: Option<String>,
    /// Truncation for grouped counts.
    pub limit: Option<usize>,
    /// Gap-fill flag for `/trends`.
    pub fill: Option<bool>,
    /// Forecast horizon in months.
    pub horizon: Option<u32>,
}

impl DashboardQueryParams {
    /// The filter criteria these parameters select.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            year: Selection::from_param(self.year.clone()),
            month: Selection::from_param(self.month.clone()),
            crime_type: Selection::from_param(self.crime_type.clone()),
            location: Selection::from_param(self.location.clone()),
        }
    }
}

/// Summary card values, with missing modes rendered as [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    /// Total records in the dataset.
    pub total_crimes: u64,
    /// Modal crime type.
    pub most_common_crime: String,
    /// Modal outcome category.
    pub most_common_outcome: String,
    /// Count of distinct normalized locations.
    pub unique_locations: u64,
}

impl From<DatasetSummary> for ApiSummary {
    fn from(summary: DatasetSummary) -> Self {
        Self {
            total_crimes: summary.total_crimes,
            most_common_crime: summary
                .most_common_crime
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            most_common_outcome: summary
                .most_common_outcome
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            unique_locations: summary.unique_locations,
        }
    }
}

/// One time-series bucket with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSeriesPoint {
    /// Period label, e.g. `"March 2023"`.
    pub period: String,
    /// Record count.
    pub count: u64,
}

impl From<SeriesPoint> for ApiSeriesPoint {
    fn from(point: SeriesPoint) -> Self {
        Self {
            period: point.period.to_string(),
            count: point.count,
        }
    }
}

/// The trends chart feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrends {
    /// Chronologically ordered buckets.
    pub points: Vec<ApiSeriesPoint>,
    /// Records excluded for unparseable period labels.
    pub not_available: u64,
}

impl ApiTrends {
    /// Builds the API shape, optionally gap-filling zero buckets.
    #[must_use]
    pub fn from_series(series: &MonthlySeries, fill: bool) -> Self {
        let points = if fill {
            series.gap_filled()
        } else {
            series.points.clone()
        };
        Self {
            points: points.into_iter().map(ApiSeriesPoint::from).collect(),
            not_available: series.not_available,
        }
    }
}

/// One forecast bucket with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiForecastPoint {
    /// Future period label.
    pub period: String,
    /// Predicted record count.
    pub predicted: f64,
}

impl From<ForecastPoint> for ApiForecastPoint {
    fn from(point: ForecastPoint) -> Self {
        Self {
            period: point.period.to_string(),
            predicted: point.predicted,
        }
    }
}

/// One incident on the scatter map, with the hover fields the dashboard
/// shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapPoint {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Crime type label.
    pub crime_type: Option<String>,
    /// Normalized location.
    pub location: String,
    /// LSOA area label.
    pub lsoa_name: Option<String>,
    /// Last outcome category.
    pub outcome_category: Option<String>,
}

impl ApiMapPoint {
    /// Builds a map point, or `None` when either coordinate is missing.
    #[must_use]
    pub fn from_record(record: &Record) -> Option<Self> {
        let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) else {
            return None;
        };
        Some(Self {
            latitude,
            longitude,
            crime_type: record.crime_type.clone(),
            location: record.location.clone(),
            lsoa_name: record.lsoa_name.clone(),
            outcome_category: record.outcome_category.clone(),
        })
    }
}
