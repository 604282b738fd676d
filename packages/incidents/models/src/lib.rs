#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident record types shared across the dashboard core.
//!
//! Defines the canonical in-memory shape of one police-reported incident
//! as loaded from the cleaned extract, plus [`MonthPeriod`], the
//! structured year/month key used for all chronological ordering. Period
//! labels are only parsed here and only formatted back to text at the
//! API boundary, so no other crate ever sorts period strings lexically.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Sentinel substituted for missing or blank location descriptions.
pub const NO_LOCATION: &str = "No Location";

/// One reported crime incident from the cleaned extract.
///
/// Records are immutable once loaded; the only transform applied is the
/// one-time location normalization pass in the store's loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Calendar year of the report, `None` when missing or unparseable.
    pub year: Option<i32>,
    /// Month label as found in the extract.
    pub month: Option<String>,
    /// Raw year-month period label (e.g. `"March 2023"`), kept for display.
    pub date: String,
    /// Structured period parsed from `date`; `None` when the label is
    /// malformed (such records fall into the series' not-available bucket).
    pub period: Option<MonthPeriod>,
    /// Crime type label.
    pub crime_type: Option<String>,
    /// Last outcome category; `None` for unresolved incidents.
    pub outcome_category: Option<String>,
    /// Normalized street/area description. Never empty: blank input is
    /// replaced by [`NO_LOCATION`] during loading.
    pub location: String,
    /// Latitude, absent for some records.
    pub latitude: Option<f64>,
    /// Longitude, absent for some records.
    pub longitude: Option<f64>,
    /// LSOA area label, passed through unchanged.
    pub lsoa_name: Option<String>,
}

impl Record {
    /// Returns the display value of `field`, or `None` when missing.
    ///
    /// Missing values are excluded from counts and distinct-value sets by
    /// every aggregation, so absence is represented uniformly here rather
    /// than per call site.
    #[must_use]
    pub fn field_value(&self, field: RecordField) -> Option<Cow<'_, str>> {
        match field {
            RecordField::Year => self.year.map(|y| Cow::Owned(y.to_string())),
            RecordField::Month => self.month.as_deref().map(Cow::Borrowed),
            RecordField::Date => {
                (!self.date.is_empty()).then(|| Cow::Borrowed(self.date.as_str()))
            }
            RecordField::CrimeType => self.crime_type.as_deref().map(Cow::Borrowed),
            RecordField::Outcome => self.outcome_category.as_deref().map(Cow::Borrowed),
            RecordField::Location => Some(Cow::Borrowed(self.location.as_str())),
            RecordField::LsoaName => self.lsoa_name.as_deref().map(Cow::Borrowed),
        }
    }

    /// Whether both coordinates are present (map-renderable).
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Named record fields addressable by grouped-count queries and the
/// `field=` API parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecordField {
    /// Calendar year.
    Year,
    /// Month label.
    Month,
    /// Raw period label.
    Date,
    /// Crime type label.
    CrimeType,
    /// Last outcome category.
    Outcome,
    /// Normalized location.
    Location,
    /// LSOA area label.
    LsoaName,
}

/// A calendar month period.
///
/// Ordering is strictly chronological (`(year, month)`), never lexical on
/// the label, so `"February 2023"` sorts before `"March 2023"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthPeriod {
    /// Creates a period from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodParseError::MonthOutOfRange`] if `month` is not in
    /// the range 1-12.
    pub const fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if matches!(month, 1..=12) {
            Ok(Self { year, month })
        } else {
            Err(PeriodParseError::MonthOutOfRange { month })
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month number, 1 (January) through 12 (December).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// The period immediately after this one.
    #[must_use]
    pub const fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Full English month name.
    #[must_use]
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl FromStr for MonthPeriod {
    type Err = PeriodParseError;

    /// Parses the extract's `"<month name> <year>"` label shape
    /// (e.g. `"March 2023"`). Month names are matched case-insensitively
    /// via [`chrono::Month`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(PeriodParseError::Shape {
                input: s.to_string(),
            });
        };

        let month = chrono::Month::from_str(month).map_err(|_| PeriodParseError::MonthName {
            name: month.to_string(),
        })?;
        let year: i32 = year.parse().map_err(|_| PeriodParseError::Year {
            year: year.to_string(),
        })?;

        Ok(Self {
            year,
            month: month.number_from_month(),
        })
    }
}

/// Errors from parsing or constructing a [`MonthPeriod`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    /// The label was not two whitespace-separated tokens.
    #[error("invalid period label {input:?}: expected \"<month name> <year>\"")]
    Shape {
        /// The offending label.
        input: String,
    },

    /// The first token was not a recognizable month name.
    #[error("invalid month name {name:?}")]
    MonthName {
        /// The offending token.
        name: String,
    },

    /// The second token was not an integer year.
    #[error("invalid year {year:?}")]
    Year {
        /// The offending token.
        year: String,
    },

    /// A month number outside 1-12 was supplied.
    #[error("month number {month} out of range: expected 1-12")]
    MonthOutOfRange {
        /// The invalid month number.
        month: u32,
    },
}
