//! Identifier type shared by travelers and trips

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a traveler or trip, kept as its trimmed source text.
///
/// Equality is textual. Ordering is numeric when both sides are integers,
/// so `"2"` sorts before `"10"`; integers sort before anything else, and
/// non-integer identifiers compare lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from raw cell text
    #[must_use]
    pub fn new<S: AsRef<str>>(raw: S) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u32> for RecordId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids_sort_by_value() {
        let mut ids: Vec<RecordId> = ["10", "2", "1"].into_iter().map(RecordId::from).collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(RecordId::as_str).collect();
        assert_eq!(sorted, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_mixed_ids_put_integers_first() {
        let mut ids: Vec<RecordId> = ["b7", "3", "a1"].into_iter().map(RecordId::from).collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(RecordId::as_str).collect();
        assert_eq!(sorted, vec!["3", "a1", "b7"]);
    }

    #[test]
    fn test_equality_is_textual() {
        assert_ne!(RecordId::from("01"), RecordId::from("1"));
        assert_eq!(RecordId::from(" 1 "), RecordId::from("1"));
        let (one, padded) = (RecordId::from("1"), RecordId::from("01"));
        assert_ne!(one.cmp(&padded), Ordering::Equal);
    }
}
