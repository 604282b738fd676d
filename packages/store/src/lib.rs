#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Immutable in-memory record store for the dashboard.
//!
//! Loads the cleaned incident extract exactly once, applies the location
//! normalization pass, and hands out a read-only snapshot. Nothing ever
//! writes back: every filter change downstream re-runs against the same
//! snapshot, so the store can be shared across concurrent requests
//! without locking.

mod loader;
pub mod normalize;

pub use loader::{RecordStore, REQUIRED_COLUMNS};

use thiserror::Error;

/// Errors raised while loading the incident extract.
///
/// All variants are fatal at startup: the dashboard has no dataset to
/// serve without a successful load, and there is no automatic retry.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The source file is missing or unreadable.
    #[error("failed to read incident extract: {0}")]
    Io(#[from] std::io::Error),

    /// The extract is not parseable as CSV.
    #[error("malformed incident extract: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("incident extract is missing required column {column:?}")]
    MissingColumn {
        /// The exact, case-sensitive column name that was not found.
        column: &'static str,
    },
}
