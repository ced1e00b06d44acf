//! Raw tabular input as read from a CSV file

use crate::Result;
use crate::models::{Traveler, Trip};
use csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Header row plus untyped data rows.
///
/// Cells are trimmed on read. Rows may be shorter than the header; absent
/// cells count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    #[must_use]
    pub fn new<H: AsRef<str>>(headers: &[H], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().trim().to_string()).collect(),
            rows,
        }
    }

    /// Parse CSV text with a mandatory header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Re-tabulate cleaned travelers in output column order
    #[must_use]
    pub fn from_travelers(travelers: &[Traveler]) -> Self {
        Self::new(
            &Traveler::COLUMNS,
            travelers.iter().map(Traveler::to_row).collect(),
        )
    }

    /// Re-tabulate cleaned trips in output column order
    #[must_use]
    pub fn from_trips(trips: &[Trip]) -> Self {
        Self::new(&Trip::COLUMNS, trips.iter().map(Trip::to_row).collect())
    }

    /// Index of a named column
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Names from `required` that have no column
    #[must_use]
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column(name).is_none())
            .map(|name| (*name).to_string())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cell lookup by column index; empty and whitespace-only cells are missing
#[must_use]
pub fn cell(row: &[String], column: Option<usize>) -> Option<&str> {
    column
        .and_then(|idx| row.get(idx))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_trims_and_keeps_short_rows() {
        let csv = "traveler_id, name ,email\n1,  alice smith ,a@x.io\n2,bob\n";
        let table = RawTable::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.headers, vec!["traveler_id", "name", "email"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], "alice smith");
        assert_eq!(table.rows[1].len(), 2);

        let email = table.column("email");
        assert_eq!(cell(&table.rows[0], email), Some("a@x.io"));
        assert_eq!(cell(&table.rows[1], email), None);
    }

    #[test]
    fn test_missing_columns() {
        let table = RawTable::new(&["travel_id", "destination"], vec![]);
        let missing = table.missing_columns(&["travel_id", "traveler_id", "return_date"]);
        assert_eq!(missing, vec!["traveler_id", "return_date"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_blank_cells_are_missing() {
        let row = vec!["1".to_string(), "   ".to_string()];
        assert_eq!(cell(&row, Some(1)), None);
        assert_eq!(cell(&row, None), None);
        assert_eq!(cell(&row, Some(0)), Some("1"));
    }
}
