//! Trip cleaning pass

use super::dates::parse_calendar_date;
use super::report::{CleaningReport, DropReason};
use super::text::{capitalize, title_case};
use crate::ingest::{RawTable, cell};
use crate::models::{RecordId, Trip, UNKNOWN};
use crate::{RecordsError, Result};
use std::collections::HashSet;
use tracing::info;

const DATASET: &str = "Trips";
const REQUIRED_COLUMNS: [&str; 4] = ["travel_id", "traveler_id", "departure_date", "return_date"];

/// Clean raw trip rows.
///
/// In order: drop repeated `travel_id`s (first wins), fill and case
/// destination and purpose, parse both dates, drop rows with an unparseable
/// date, drop rows returning before they depart, then stable-sort by
/// (`traveler_id`, `departure_date`).
///
/// # Errors
/// `RecordsError::Schema` when any of `travel_id`, `traveler_id`,
/// `departure_date` or `return_date` is absent.
pub fn normalize_trips(table: &RawTable) -> Result<(Vec<Trip>, CleaningReport)> {
    let missing = table.missing_columns(&REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(RecordsError::schema(DATASET, missing));
    }

    let travel_col = table.column("travel_id");
    let traveler_col = table.column("traveler_id");
    let destination_col = table.column("destination");
    let departure_col = table.column("departure_date");
    let return_col = table.column("return_date");
    let purpose_col = table.column("purpose");

    let mut report = CleaningReport::new(DATASET, table.len());
    let mut seen: HashSet<RecordId> = HashSet::new();
    let mut trips = Vec::with_capacity(table.len());

    for (idx, row) in table.rows.iter().enumerate() {
        let row_number = idx + 1;
        let travel_id = RecordId::new(cell(row, travel_col).unwrap_or_default());

        if !seen.insert(travel_id.clone()) {
            report.record_drop(row_number, travel_id.as_str(), DropReason::Duplicate);
            continue;
        }

        let destination = match cell(row, destination_col) {
            Some(value) => title_case(value),
            None => {
                report.record_default("destination");
                UNKNOWN.to_string()
            }
        };
        let purpose = match cell(row, purpose_col) {
            Some(value) => capitalize(value),
            None => {
                report.record_default("purpose");
                UNKNOWN.to_string()
            }
        };

        let departure = cell(row, departure_col).and_then(parse_calendar_date);
        let returned = cell(row, return_col).and_then(parse_calendar_date);
        let (Some(departure_date), Some(return_date)) = (departure, returned) else {
            report.record_drop(row_number, travel_id.as_str(), DropReason::InvalidDate);
            continue;
        };

        if return_date < departure_date {
            report.record_drop(row_number, travel_id.as_str(), DropReason::InvertedRange);
            continue;
        }

        trips.push(Trip {
            travel_id,
            traveler_id: RecordId::new(cell(row, traveler_col).unwrap_or_default()),
            destination,
            departure_date,
            return_date,
            purpose,
        });
    }

    // sort_by is stable, so ties keep input order
    trips.sort_by(|a, b| {
        a.traveler_id
            .cmp(&b.traveler_id)
            .then(a.departure_date.cmp(&b.departure_date))
    });

    report.rows_kept = trips.len();
    info!("{}", report.summary());

    Ok((trips, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADERS: [&str; 6] = [
        "travel_id",
        "traveler_id",
        "destination",
        "departure_date",
        "return_date",
        "purpose",
    ];

    fn table(rows: &[[&str; 6]]) -> RawTable {
        RawTable::new(
            &HEADERS,
            rows.iter()
                .map(|r| r.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    fn ids(trips: &[Trip]) -> Vec<&str> {
        trips.iter().map(|t| t.travel_id.as_str()).collect()
    }

    #[test]
    fn test_paris_trips_merge_and_sort_by_departure() {
        let input = table(&[
            ["1", "1", "paris", "2024-03-01", "2024-03-05", "leisure"],
            ["2", "1", "Paris", "2024-02-01", "2024-02-03", "BUSINESS"],
        ]);

        let (trips, report) = normalize_trips(&input).unwrap();

        assert_eq!(ids(&trips), vec!["2", "1"]);
        assert!(trips.iter().all(|t| t.destination == "Paris"));
        assert_eq!(trips[0].purpose, "Business");
        assert_eq!(report.rows_kept, 2);
    }

    #[test]
    fn test_inverted_range_is_dropped() {
        let input = table(&[
            ["1", "1", "rome", "2024-05-10", "2024-05-01", "work"],
            ["2", "1", "rome", "2024-05-10", "2024-05-10", "work"],
        ]);

        let (trips, report) = normalize_trips(&input).unwrap();

        assert_eq!(ids(&trips), vec!["2"]);
        assert_eq!(report.inverted_ranges_dropped, 1);
        assert_eq!(report.dropped[0].reason, DropReason::InvertedRange);
    }

    #[test]
    fn test_invalid_dates_are_dropped() {
        let input = table(&[
            ["1", "1", "oslo", "someday", "2024-05-01", "work"],
            ["2", "1", "oslo", "2024-05-01", "", "work"],
            ["3", "1", "oslo", "2024-05-01", "2024-05-02", "work"],
        ]);

        let (trips, report) = normalize_trips(&input).unwrap();

        assert_eq!(ids(&trips), vec!["3"]);
        assert_eq!(report.invalid_dates_dropped, 2);
    }

    #[test]
    fn test_duplicate_travel_id_keeps_first() {
        let input = table(&[
            ["9", "1", "lima", "2024-01-01", "2024-01-02", "a"],
            ["9", "2", "cusco", "2024-01-01", "2024-01-09", "b"],
        ]);

        let (trips, report) = normalize_trips(&input).unwrap();

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].destination, "Lima");
        assert_eq!(report.duplicates_removed, 1);
    }

    #[test]
    fn test_duplicate_check_runs_before_date_validation() {
        let input = table(&[
            ["4", "1", "lima", "garbage", "2024-01-02", "a"],
            ["4", "1", "lima", "2024-01-01", "2024-01-02", "a"],
        ]);

        let (trips, report) = normalize_trips(&input).unwrap();

        assert!(trips.is_empty());
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.invalid_dates_dropped, 1);
    }

    #[test]
    fn test_sort_by_traveler_then_departure_is_stable() {
        let input = table(&[
            ["1", "10", "a", "2024-01-05", "2024-01-06", "x"],
            ["2", "2", "b", "2024-03-01", "2024-03-02", "x"],
            ["3", "2", "c", "2024-01-01", "2024-01-02", "x"],
            ["4", "2", "d", "2024-03-01", "2024-03-04", "x"],
        ]);

        let (trips, _) = normalize_trips(&input).unwrap();

        assert_eq!(ids(&trips), vec!["3", "2", "4", "1"]);
    }

    #[test]
    fn test_missing_text_fields_default() {
        let input = table(&[["1", "1", "", "2024-01-01", "2024-01-03", " "]]);

        let (trips, report) = normalize_trips(&input).unwrap();

        assert_eq!(trips[0].destination, "Unknown");
        assert_eq!(trips[0].purpose, "Unknown");
        assert_eq!(
            trips[0].departure_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(report.total_defaults(), 2);
    }

    #[test]
    fn test_missing_required_columns_is_schema_error() {
        let input = RawTable::new(&["travel_id", "destination", "departure_date"], vec![]);

        match normalize_trips(&input) {
            Err(RecordsError::Schema { missing, .. }) => {
                assert_eq!(missing, vec!["traveler_id", "return_date"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}
