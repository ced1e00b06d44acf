//! Traveler record

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Placeholder for missing text fields
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing email address
pub const UNKNOWN_EMAIL: &str = "unknown@example.com";

/// A cleaned traveler.
///
/// Field order matches the CSV column layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveler {
    pub traveler_id: RecordId,
    /// Title-cased display name
    pub name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
}

impl Traveler {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 5] =
        ["traveler_id", "name", "email", "phone", "passport_number"];

    /// Cell values in `COLUMNS` order
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.traveler_id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.passport_number.clone(),
        ]
    }
}
