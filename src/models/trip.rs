//! Trip record

use super::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cleaned trip with validated dates (`return_date >= departure_date`).
///
/// Field order matches the CSV column layout; dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub travel_id: RecordId,
    /// Not required to match any loaded traveler
    pub traveler_id: RecordId,
    /// Title-cased destination
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    /// Capitalized purpose
    pub purpose: String,
}

impl Trip {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 6] = [
        "travel_id",
        "traveler_id",
        "destination",
        "departure_date",
        "return_date",
        "purpose",
    ];

    /// Whole days between departure and return
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.return_date - self.departure_date).num_days()
    }

    /// Format as a one-line itinerary entry
    #[must_use]
    pub fn format_itinerary(&self) -> String {
        format!(
            "{} | {} → {} | {}",
            self.destination,
            self.departure_date.format("%Y-%m-%d"),
            self.return_date.format("%Y-%m-%d"),
            self.purpose
        )
    }

    /// Cell values in `COLUMNS` order
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.travel_id.to_string(),
            self.traveler_id.to_string(),
            self.destination.clone(),
            self.departure_date.format("%Y-%m-%d").to_string(),
            self.return_date.format("%Y-%m-%d").to_string(),
            self.purpose.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(dep: (i32, u32, u32), ret: (i32, u32, u32)) -> Trip {
        Trip {
            travel_id: RecordId::from(1),
            traveler_id: RecordId::from(7),
            destination: "Lisbon".to_string(),
            departure_date: NaiveDate::from_ymd_opt(dep.0, dep.1, dep.2).unwrap(),
            return_date: NaiveDate::from_ymd_opt(ret.0, ret.1, ret.2).unwrap(),
            purpose: "Business".to_string(),
        }
    }

    #[test]
    fn test_duration_days() {
        assert_eq!(trip((2024, 2, 27), (2024, 3, 2)).duration_days(), 4);
        assert_eq!(trip((2024, 5, 1), (2024, 5, 1)).duration_days(), 0);
    }

    #[test]
    fn test_format_itinerary() {
        let line = trip((2024, 3, 1), (2024, 3, 5)).format_itinerary();
        assert_eq!(line, "Lisbon | 2024-03-01 → 2024-03-05 | Business");
    }

    #[test]
    fn test_row_matches_columns() {
        let row = trip((2024, 3, 1), (2024, 3, 5)).to_row();
        assert_eq!(row.len(), Trip::COLUMNS.len());
        assert_eq!(row[3], "2024-03-01");
    }
}
