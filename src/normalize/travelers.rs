//! Traveler cleaning pass

use super::report::{CleaningReport, DropReason};
use super::text::title_case;
use crate::ingest::{RawTable, cell};
use crate::models::{RecordId, Traveler, UNKNOWN, UNKNOWN_EMAIL};
use crate::{RecordsError, Result};
use std::collections::HashSet;
use tracing::info;

const DATASET: &str = "Travelers";
const REQUIRED_COLUMNS: [&str; 1] = ["traveler_id"];

/// Clean raw traveler rows.
///
/// Rows repeating an earlier (`traveler_id`, `email`) pair are dropped, first
/// occurrence wins. Missing names, phones and passports become `"Unknown"`,
/// missing emails `"unknown@example.com"`, and names are title-cased. A
/// missing email compares equal to the placeholder when deduplicating so the
/// pair stays unique after filling.
///
/// # Errors
/// `RecordsError::Schema` when the `traveler_id` column is absent.
pub fn normalize_travelers(table: &RawTable) -> Result<(Vec<Traveler>, CleaningReport)> {
    let missing = table.missing_columns(&REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(RecordsError::schema(DATASET, missing));
    }

    let id_col = table.column("traveler_id");
    let name_col = table.column("name");
    let email_col = table.column("email");
    let phone_col = table.column("phone");
    let passport_col = table.column("passport_number");

    let mut report = CleaningReport::new(DATASET, table.len());
    let mut seen: HashSet<(RecordId, String)> = HashSet::new();
    let mut travelers = Vec::with_capacity(table.len());

    for (idx, row) in table.rows.iter().enumerate() {
        let traveler_id = RecordId::new(cell(row, id_col).unwrap_or_default());
        let email = cell(row, email_col);
        let key = (
            traveler_id.clone(),
            email.unwrap_or(UNKNOWN_EMAIL).to_string(),
        );

        if !seen.insert(key) {
            report.record_drop(idx + 1, traveler_id.as_str(), DropReason::Duplicate);
            continue;
        }

        let mut fill = |value: Option<&str>, column: &str, default: &str| match value {
            Some(v) => v.to_string(),
            None => {
                report.record_default(column);
                default.to_string()
            }
        };

        let name = title_case(&fill(cell(row, name_col), "name", UNKNOWN));
        let email = fill(email, "email", UNKNOWN_EMAIL);
        let phone = fill(cell(row, phone_col), "phone", UNKNOWN);
        let passport_number = fill(cell(row, passport_col), "passport_number", UNKNOWN);

        travelers.push(Traveler {
            traveler_id,
            name,
            email,
            phone,
            passport_number,
        });
    }

    report.rows_kept = travelers.len();
    info!("{}", report.summary());

    Ok((travelers, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers,
            rows.iter()
                .map(|r| r.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    const HEADERS: [&str; 5] = ["traveler_id", "name", "email", "phone", "passport_number"];

    #[test]
    fn test_duplicate_pair_keeps_first() {
        let input = table(
            &HEADERS,
            &[
                &["1", "ada lovelace", "ada@x.io", "555-0100", "P1"],
                &["1", "ada lovelace", "ada@x.io", "555-0199", "P1"],
            ],
        );

        let (travelers, report) = normalize_travelers(&input).unwrap();

        assert_eq!(travelers.len(), 1);
        assert_eq!(travelers[0].phone, "555-0100");
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.dropped[0].row, 2);
    }

    #[test]
    fn test_same_id_different_email_is_kept() {
        let input = table(
            &HEADERS,
            &[
                &["1", "ada", "ada@x.io", "", ""],
                &["1", "ada", "ada@work.io", "", ""],
            ],
        );

        let (travelers, _) = normalize_travelers(&input).unwrap();
        assert_eq!(travelers.len(), 2);
    }

    #[test]
    fn test_defaults_and_title_case() {
        let input = table(
            &HEADERS,
            &[
                &["7", "", "", "", ""],
                &["8", "GRACE hopper", "g@x.io", "1", "X9"],
            ],
        );

        let (travelers, report) = normalize_travelers(&input).unwrap();

        assert_eq!(travelers[0].name, "Unknown");
        assert_eq!(travelers[0].email, "unknown@example.com");
        assert_eq!(travelers[0].phone, "Unknown");
        assert_eq!(travelers[0].passport_number, "Unknown");
        assert_eq!(travelers[1].name, "Grace Hopper");
        assert_eq!(report.total_defaults(), 4);
    }

    #[test]
    fn test_missing_email_collides_with_placeholder() {
        let input = table(
            &HEADERS,
            &[
                &["3", "kim", "", "", ""],
                &["3", "kim", "unknown@example.com", "", ""],
            ],
        );

        let (travelers, report) = normalize_travelers(&input).unwrap();
        assert_eq!(travelers.len(), 1);
        assert_eq!(report.duplicates_removed, 1);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let input = table(&["traveler_id"], &[&["1"], &["2"]]);

        let (travelers, _) = normalize_travelers(&input).unwrap();
        assert_eq!(travelers.len(), 2);
        assert!(travelers.iter().all(|t| t.email == UNKNOWN_EMAIL));
    }

    #[test]
    fn test_missing_id_column_is_schema_error() {
        let input = table(&["name", "email"], &[&["ada", "ada@x.io"]]);

        let result = normalize_travelers(&input);
        match result {
            Err(RecordsError::Schema { dataset, missing }) => {
                assert_eq!(dataset, "Travelers");
                assert_eq!(missing, vec!["traveler_id"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}
