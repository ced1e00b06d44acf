//! Record normalizer
//!
//! Turns raw tables into canonical traveler and trip sets:
//! - Deduplication on the entity key, first occurrence wins
//! - Default substitution and casing of text fields
//! - Date coercion and range validation for trips
//!
//! Each pass returns a [`CleaningReport`] next to the cleaned records.
//! Cleaning is idempotent: feeding the output back in yields the same
//! records.

pub mod dates;
pub mod report;
pub mod text;
pub mod travelers;
pub mod trips;

pub use dates::parse_calendar_date;
pub use report::{CleaningReport, DropReason, DroppedRow};
pub use text::{capitalize, title_case};
pub use travelers::normalize_travelers;
pub use trips::normalize_trips;
