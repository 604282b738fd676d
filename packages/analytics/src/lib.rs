#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filtering and aggregation pipeline for the dashboard.
//!
//! Everything here is a pure read/transform over the immutable record
//! snapshot: the filter engine produces borrowed views, the aggregator
//! turns views into chart-ready counts, and the series builder buckets
//! records by calendar month for trend display and forecasting. Each
//! user interaction re-runs the pipeline from scratch; no state is
//! shared or cached between runs.

pub mod aggregate;
pub mod filter;
pub mod forecast;
pub mod options;
pub mod series;

#[cfg(test)]
pub(crate) mod test_support;
