//! The aggregator: grouped counts and summary scalars over a view.
//!
//! All functions take the borrowed view a filter run produced and treat
//! missing field values as excluded from counts and distinct sets. An
//! empty view yields zero/`None`/empty results, never an error.

use std::collections::{HashMap, HashSet};

use dorset_dash_analytics_models::{DatasetSummary, ValueCount};
use dorset_dash_incident_models::{Record, RecordField};

/// Number of records in the view.
#[must_use]
pub fn total_count(view: &[&Record]) -> u64 {
    view.len() as u64
}

/// Every distinct non-missing value of `field` with its occurrence
/// count, descending by count; ties keep first-occurrence order.
#[must_use]
pub fn group_counts(view: &[&Record], field: RecordField) -> Vec<ValueCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for record in view {
        let Some(value) = record.field_value(field) else {
            continue;
        };
        let value = value.into_owned();
        if let Some(count) = counts.get_mut(&value) {
            *count += 1;
        } else {
            counts.insert(value.clone(), 1);
            order.push(value);
        }
    }

    let mut grouped: Vec<ValueCount> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            ValueCount { value, count }
        })
        .collect();
    // Stable sort: equal counts keep first-occurrence order.
    grouped.sort_by(|a, b| b.count.cmp(&a.count));
    grouped
}

/// The `n` most frequent values of `field`.
#[must_use]
pub fn top_n(view: &[&Record], field: RecordField, n: usize) -> Vec<ValueCount> {
    let mut grouped = group_counts(view, field);
    grouped.truncate(n);
    grouped
}

/// The most frequent non-missing value of `field`, or `None` when every
/// value is missing.
#[must_use]
pub fn mode(view: &[&Record], field: RecordField) -> Option<String> {
    group_counts(view, field).into_iter().next().map(|vc| vc.value)
}

/// Count of distinct non-missing values of `field`.
#[must_use]
pub fn distinct_count(view: &[&Record], field: RecordField) -> usize {
    view.iter()
        .filter_map(|record| record.field_value(field))
        .collect::<HashSet<_>>()
        .len()
}

/// Headline numbers for the summary cards, computed over the full
/// dataset (the original dashboard never filtered these).
#[must_use]
pub fn summary(records: &[Record]) -> DatasetSummary {
    let view: Vec<&Record> = records.iter().collect();
    DatasetSummary {
        total_crimes: total_count(&view),
        most_common_crime: mode(&view, RecordField::CrimeType),
        most_common_outcome: mode(&view, RecordField::Outcome),
        unique_locations: distinct_count(&view, RecordField::Location) as u64,
    }
}

#[cfg(test)]
mod tests {
    use dorset_dash_store::RecordStore;

    use super::*;
    use crate::test_support::{record, store_of};

    fn view(records: &[Record]) -> Vec<&Record> {
        records.iter().collect()
    }

    fn crime_counts() -> Vec<Record> {
        let mut rows = Vec::new();
        for _ in 0..3 {
            rows.push(("2023", "Burglary", "A"));
        }
        for _ in 0..5 {
            rows.push(("2023", "Theft", "B"));
        }
        for _ in 0..2 {
            rows.push(("2023", "Assault", "C"));
        }
        store_of(&rows)
    }

    #[test]
    fn mode_returns_most_frequent() {
        let records = crime_counts();
        assert_eq!(
            mode(&view(&records), RecordField::CrimeType).as_deref(),
            Some("Theft")
        );
    }

    #[test]
    fn top_n_orders_and_truncates() {
        let records = crime_counts();
        let top = top_n(&view(&records), RecordField::CrimeType, 2);
        assert_eq!(
            top,
            vec![
                ValueCount {
                    value: "Theft".to_string(),
                    count: 5
                },
                ValueCount {
                    value: "Burglary".to_string(),
                    count: 3
                },
            ]
        );
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let records = store_of(&[
            ("2023", "Shoplifting", "A"),
            ("2023", "Arson", "B"),
            ("2023", "Shoplifting", "C"),
            ("2023", "Arson", "D"),
        ]);
        let grouped = group_counts(&view(&records), RecordField::CrimeType);
        assert_eq!(grouped[0].value, "Shoplifting");
        assert_eq!(grouped[1].value, "Arson");
        assert_eq!(
            mode(&view(&records), RecordField::CrimeType).as_deref(),
            Some("Shoplifting")
        );
    }

    #[test]
    fn group_counts_sum_to_non_missing_total() {
        let mut records = crime_counts();
        let mut no_crime = record("2023", "Theft", "X");
        no_crime.crime_type = None;
        records.push(no_crime);

        let grouped = group_counts(&view(&records), RecordField::CrimeType);
        let sum: u64 = grouped.iter().map(|vc| vc.count).sum();
        assert_eq!(sum, 10); // 11 records, one with a missing crime type
    }

    #[test]
    fn empty_view_yields_empty_outputs() {
        let empty: Vec<&Record> = Vec::new();
        assert_eq!(total_count(&empty), 0);
        assert_eq!(mode(&empty, RecordField::CrimeType), None);
        assert_eq!(distinct_count(&empty, RecordField::Location), 0);
        assert!(group_counts(&empty, RecordField::CrimeType).is_empty());
        assert!(top_n(&empty, RecordField::CrimeType, 5).is_empty());
    }

    #[test]
    fn mode_is_none_when_all_values_missing() {
        let mut records = store_of(&[("2023", "Theft", "A")]);
        records[0].outcome_category = None;
        assert_eq!(mode(&view(&records), RecordField::Outcome), None);
    }

    #[test]
    fn summary_counts_full_dataset() {
        let records = crime_counts();
        let summary = summary(&records);
        assert_eq!(summary.total_crimes, 10);
        assert_eq!(summary.most_common_crime.as_deref(), Some("Theft"));
        assert_eq!(summary.most_common_outcome, None);
        assert_eq!(summary.unique_locations, 3);
    }

    #[test]
    fn normalized_locations_count_as_distinct() {
        // End-to-end through the loader: "On or near High Street", blank,
        // and " Main Road " normalize to three distinct locations.
        let store = RecordStore::from_reader(
            "Year,Month,Date,Crime type,Last outcome category,Location,Latitude,Longitude,LSOA name\n\
             2023,March,March 2023,Theft,,On or near High Street,,,\n\
             2023,March,March 2023,Theft,,,,,\n\
             2023,March,March 2023,Theft,, Main Road ,,,\n"
                .as_bytes(),
        )
        .unwrap();

        let locations: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.location.as_str())
            .collect();
        assert_eq!(locations, ["High Street", "No Location", "Main Road"]);

        let all: Vec<&Record> = store.records().iter().collect();
        assert_eq!(distinct_count(&all, RecordField::Location), 3);
    }
}
