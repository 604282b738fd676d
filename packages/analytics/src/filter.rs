//! The filter engine: pure, order-preserving equality filtering.

use dorset_dash_analytics_models::FilterCriteria;
use dorset_dash_incident_models::{Record, RecordField};

/// Returns the records matching every non-`"All"` criterion, in the
/// original record order.
///
/// Filtering never mutates the input and an empty result is a valid
/// outcome, not an error.
#[must_use]
pub fn apply<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

/// Whether one record satisfies every criterion (logical AND).
#[must_use]
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    criteria
        .year
        .matches(record.field_value(RecordField::Year).as_deref())
        && criteria
            .month
            .matches(record.field_value(RecordField::Month).as_deref())
        && criteria
            .crime_type
            .matches(record.field_value(RecordField::CrimeType).as_deref())
        && criteria
            .location
            .matches(record.field_value(RecordField::Location).as_deref())
}
