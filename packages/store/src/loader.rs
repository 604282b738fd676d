//! CSV loader for the cleaned incident extract.
//!
//! The column contract is exact and case-sensitive: a missing required
//! column fails the whole load, while malformed individual cells degrade
//! to missing values on the affected record only.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use dorset_dash_incident_models::{MonthPeriod, Record};

use crate::DataLoadError;
use crate::normalize::normalize_location;

/// Column headers the extract must carry, exact and case-sensitive.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Year",
    "Month",
    "Date",
    "Crime type",
    "Last outcome category",
    "Location",
    "Latitude",
    "Longitude",
    "LSOA name",
];

/// The immutable incident snapshot the whole dashboard reads from.
///
/// Loaded once at startup; all filtering and aggregation downstream
/// produces fresh views and never mutates the records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Loads the extract from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] if the file is missing or unreadable,
    /// the content is not valid CSV, or a required column is absent.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        log::info!("Loading incident extract from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads the extract from any reader, same contract as [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] if the content is not valid CSV or a
    /// required column is absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            records.push(columns.record(&row));
        }

        let unparsed_periods = records
            .iter()
            .filter(|r| r.period.is_none() && !r.date.is_empty())
            .count();
        if unparsed_periods > 0 {
            log::warn!(
                "{unparsed_periods} records have unparseable Date labels and will fall into the not-available bucket"
            );
        }

        log::info!("Loaded {} incident records", records.len());
        Ok(Self { records })
    }

    /// The full record snapshot, in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolved positions of the required columns within the header row.
struct ColumnIndex {
    year: usize,
    month: usize,
    date: usize,
    crime_type: usize,
    outcome: usize,
    location: usize,
    latitude: usize,
    longitude: usize,
    lsoa: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DataLoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(DataLoadError::MissingColumn { column })
        };

        Ok(Self {
            year: find("Year")?,
            month: find("Month")?,
            date: find("Date")?,
            crime_type: find("Crime type")?,
            outcome: find("Last outcome category")?,
            location: find("Location")?,
            latitude: find("Latitude")?,
            longitude: find("Longitude")?,
            lsoa: find("LSOA name")?,
        })
    }

    fn record(&self, row: &csv::StringRecord) -> Record {
        let date = cell(row, self.date).unwrap_or_default().to_string();
        let period = date.parse::<MonthPeriod>().ok();
        let location = normalize_location(row.get(self.location).unwrap_or_default());

        Record {
            year: cell(row, self.year).and_then(|v| v.parse().ok()),
            month: cell(row, self.month).map(str::to_string),
            date,
            period,
            crime_type: cell(row, self.crime_type).map(str::to_string),
            outcome_category: cell(row, self.outcome).map(str::to_string),
            location,
            latitude: cell(row, self.latitude).and_then(|v| v.parse().ok()),
            longitude: cell(row, self.longitude).and_then(|v| v.parse().ok()),
            lsoa_name: cell(row, self.lsoa).map(str::to_string),
        }
    }
}

/// Returns the trimmed cell value, or `None` when out of range or blank.
fn cell(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use dorset_dash_incident_models::NO_LOCATION;

    use super::*;

    const HEADER: &str =
        "Year,Month,Date,Crime type,Last outcome category,Location,Latitude,Longitude,LSOA name";

    fn load(csv: &str) -> RecordStore {
        RecordStore::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn loads_complete_rows() {
        let store = load(&format!(
            "{HEADER}\n2023,March,March 2023,Burglary,Under investigation,On or near High Street,50.71,-1.98,Bournemouth 001A\n"
        ));
        assert_eq!(store.len(), 1);

        let record = &store.records()[0];
        assert_eq!(record.year, Some(2023));
        assert_eq!(record.month.as_deref(), Some("March"));
        assert_eq!(record.period, Some(MonthPeriod::new(2023, 3).unwrap()));
        assert_eq!(record.crime_type.as_deref(), Some("Burglary"));
        assert_eq!(record.location, "High Street");
        assert!(record.has_coordinates());
        assert_eq!(record.lsoa_name.as_deref(), Some("Bournemouth 001A"));
    }

    #[test]
    fn blank_cells_become_missing_values() {
        let store = load(&format!("{HEADER}\n,,, , ,  ,,,\n"));
        let record = &store.records()[0];
        assert_eq!(record.year, None);
        assert_eq!(record.month, None);
        assert_eq!(record.period, None);
        assert_eq!(record.crime_type, None);
        assert_eq!(record.outcome_category, None);
        assert_eq!(record.location, NO_LOCATION);
        assert!(!record.has_coordinates());
    }

    #[test]
    fn malformed_date_degrades_to_missing_period() {
        let store = load(&format!(
            "{HEADER}\n2023,March,2023/03,Theft,,Park Lane,,,\n"
        ));
        let record = &store.records()[0];
        assert_eq!(record.date, "2023/03");
        assert_eq!(record.period, None);
    }

    #[test]
    fn missing_required_column_fails_load() {
        let result = RecordStore::from_reader(
            "Year,Month,Date,Crime type,Location,Latitude,Longitude,LSOA name\n".as_bytes(),
        );
        assert!(matches!(
            result,
            Err(DataLoadError::MissingColumn {
                column: "Last outcome category"
            })
        ));
    }

    #[test]
    fn every_required_column_is_enforced() {
        for dropped in REQUIRED_COLUMNS {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != dropped)
                .collect();
            let result = RecordStore::from_reader(format!("{}\n", header.join(",")).as_bytes());
            assert!(
                matches!(result, Err(DataLoadError::MissingColumn { column }) if column == dropped),
                "load succeeded without column {dropped:?}"
            );
        }
    }

    #[test]
    fn column_order_is_not_significant() {
        let store = load(
            "Location,Year,Month,Date,Crime type,Last outcome category,Latitude,Longitude,LSOA name\nOn or near Beach Road,2024,May,May 2024,Theft,,,,\n",
        );
        let record = &store.records()[0];
        assert_eq!(record.location, "Beach Road");
        assert_eq!(record.year, Some(2024));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let store = load(&format!(
            "{HEADER},Reported by\n2023,June,June 2023,Drugs,,On or near Pier,,,,Dorset Police\n"
        ));
        assert_eq!(store.records()[0].crime_type.as_deref(), Some("Drugs"));
        assert_eq!(store.records()[0].location, "Pier");
    }

    #[test]
    fn preserves_source_order() {
        let store = load(&format!(
            "{HEADER}\n2023,January,January 2023,Theft,,A,,,\n2023,February,February 2023,Theft,,B,,,\n2023,March,March 2023,Theft,,C,,,\n"
        ));
        let locations: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.location.as_str())
            .collect();
        assert_eq!(locations, ["A", "B", "C"]);
    }
}
