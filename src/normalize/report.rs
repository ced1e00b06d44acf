//! Structured account of what a cleaning pass changed

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Why a row was left out of the cleaned set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Repeats the key of an earlier row
    Duplicate,
    /// Departure or return date is not a calendar date
    InvalidDate,
    /// Return date falls before departure date
    InvertedRange,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DropReason::Duplicate => "duplicate key",
            DropReason::InvalidDate => "invalid date",
            DropReason::InvertedRange => "return before departure",
        };
        f.write_str(text)
    }
}

/// One row removed during cleaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRow {
    /// 1-based data row number in the input (header excluded)
    pub row: usize,
    /// Key of the row as read, e.g. the travel id
    pub key: String,
    pub reason: DropReason,
}

/// Counts and audit trail for one cleaning pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    /// Dataset label, "Travelers" or "Trips"
    pub dataset: String,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub duplicates_removed: usize,
    pub invalid_dates_dropped: usize,
    pub inverted_ranges_dropped: usize,
    /// Default substitutions per column
    pub defaults_applied: BTreeMap<String, usize>,
    pub dropped: Vec<DroppedRow>,
}

impl CleaningReport {
    #[must_use]
    pub fn new<S: Into<String>>(dataset: S, rows_read: usize) -> Self {
        Self {
            dataset: dataset.into(),
            rows_read,
            ..Self::default()
        }
    }

    pub(crate) fn record_drop(&mut self, row: usize, key: &str, reason: DropReason) {
        match reason {
            DropReason::Duplicate => self.duplicates_removed += 1,
            DropReason::InvalidDate => self.invalid_dates_dropped += 1,
            DropReason::InvertedRange => self.inverted_ranges_dropped += 1,
        }
        tracing::debug!(row, key, %reason, "Dropping {} row", self.dataset);
        self.dropped.push(DroppedRow {
            row,
            key: key.to_string(),
            reason,
        });
    }

    pub(crate) fn record_default(&mut self, column: &str) {
        *self.defaults_applied.entry(column.to_string()).or_insert(0) += 1;
    }

    /// Total rows left out
    #[must_use]
    pub fn rows_dropped(&self) -> usize {
        self.dropped.len()
    }

    /// Total default substitutions across all columns
    #[must_use]
    pub fn total_defaults(&self) -> usize {
        self.defaults_applied.values().sum()
    }

    /// One-line human summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: kept {} of {} rows ({} duplicates, {} invalid dates, {} inverted ranges removed; {} defaults applied)",
            self.dataset,
            self.rows_kept,
            self.rows_read,
            self.duplicates_removed,
            self.invalid_dates_dropped,
            self.inverted_ranges_dropped,
            self.total_defaults()
        )
    }
}
