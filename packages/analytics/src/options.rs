//! Filter option listing for the dashboard's selection controls.

use std::str::FromStr as _;

use dorset_dash_analytics_models::{ALL, FilterOptions};
use dorset_dash_incident_models::{Record, RecordField};

use crate::aggregate;

/// The sorted distinct value set per filter field, each with `"All"`
/// prepended, ready for the dashboard's dropdowns.
///
/// Years sort ascending numerically, months in calendar order where the
/// labels are month names (lexically otherwise), crime types and
/// locations lexically. Missing values are excluded.
#[must_use]
pub fn filter_options(records: &[Record]) -> FilterOptions {
    FilterOptions {
        years: with_all(sorted_years(records)),
        months: with_all(sorted_months(records)),
        crime_types: with_all(sorted_distinct(records, RecordField::CrimeType)),
        locations: with_all(sorted_distinct(records, RecordField::Location)),
    }
}

fn with_all(mut values: Vec<String>) -> Vec<String> {
    values.insert(0, ALL.to_string());
    values
}

fn sorted_years(records: &[Record]) -> Vec<String> {
    let mut years: Vec<i32> = records.iter().filter_map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years.iter().map(ToString::to_string).collect()
}

fn sorted_months(records: &[Record]) -> Vec<String> {
    let mut months = distinct(records, RecordField::Month);
    months.sort_by(|a, b| month_sort_key(a).cmp(&month_sort_key(b)).then_with(|| a.cmp(b)));
    months
}

/// Calendar position for month-name labels; non-month labels sort last,
/// lexically among themselves.
fn month_sort_key(label: &str) -> u32 {
    chrono::Month::from_str(label).map_or(u32::MAX, |m| m.number_from_month())
}

fn sorted_distinct(records: &[Record], field: RecordField) -> Vec<String> {
    let mut values = distinct(records, field);
    values.sort_unstable();
    values
}

fn distinct(records: &[Record], field: RecordField) -> Vec<String> {
    let view: Vec<&Record> = records.iter().collect();
    aggregate::group_counts(&view, field)
        .into_iter()
        .map(|vc| vc.value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store_of;

    #[test]
    fn all_is_prepended_to_every_field() {
        let records = store_of(&[("2023", "Theft", "B"), ("2022", "Arson", "A")]);
        let options = filter_options(&records);
        assert_eq!(options.years.first().map(String::as_str), Some(ALL));
        assert_eq!(options.months.first().map(String::as_str), Some(ALL));
        assert_eq!(options.crime_types.first().map(String::as_str), Some(ALL));
        assert_eq!(options.locations.first().map(String::as_str), Some(ALL));
    }

    #[test]
    fn years_sort_numerically_ascending() {
        let records = store_of(&[
            ("2024", "Theft", "A"),
            ("2022", "Theft", "B"),
            ("2023", "Theft", "C"),
            ("2022", "Theft", "D"),
        ]);
        let options = filter_options(&records);
        assert_eq!(options.years, ["All", "2022", "2023", "2024"]);
    }

    #[test]
    fn months_sort_in_calendar_order() {
        let mut records = store_of(&[
            ("2023", "Theft", "A"),
            ("2023", "Theft", "B"),
            ("2023", "Theft", "C"),
        ]);
        records[0].month = Some("March".to_string());
        records[1].month = Some("January".to_string());
        records[2].month = Some("February".to_string());

        let options = filter_options(&records);
        assert_eq!(options.months, ["All", "January", "February", "March"]);
    }

    #[test]
    fn values_sort_lexically_and_missing_are_excluded() {
        let mut records = store_of(&[
            ("2023", "Theft", "Pier"),
            ("2023", "Arson", "Beach Road"),
            ("2023", "Theft", "Pier"),
        ]);
        records[2].crime_type = None;

        let options = filter_options(&records);
        assert_eq!(options.crime_types, ["All", "Arson", "Theft"]);
        assert_eq!(options.locations, ["All", "Beach Road", "Pier"]);
    }

    #[test]
    fn empty_dataset_yields_all_only() {
        let options = filter_options(&[]);
        assert_eq!(options.years, [ALL]);
        assert_eq!(options.crime_types, [ALL]);
    }
}
