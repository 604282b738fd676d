//! Shared record fixtures for the pipeline tests.

use dorset_dash_incident_models::Record;

/// Builds a January record with the given year, crime type, and location.
pub fn record(year: &str, crime_type: &str, location: &str) -> Record {
    let date = format!("January {year}");
    Record {
        year: year.parse().ok(),
        month: Some("January".to_string()),
        period: date.parse().ok(),
        date,
        crime_type: Some(crime_type.to_string()),
        outcome_category: None,
        location: location.to_string(),
        latitude: None,
        longitude: None,
        lsoa_name: None,
    }
}

/// Builds a record per `(year, crime_type, location)` row.
pub fn store_of(rows: &[(&str, &str, &str)]) -> Vec<Record> {
    rows.iter().map(|(y, c, l)| record(y, c, l)).collect()
}
