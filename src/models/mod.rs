//! Data models for traveler and trip records
//!
//! This module contains the cleaned entity types:
//! - RecordId: identifiers shared by both record kinds
//! - Traveler: a person with contact and passport details
//! - Trip: one journey of a traveler with validated dates

pub mod record_id;
pub mod traveler;
pub mod trip;

// Re-export all public types for convenient access
pub use record_id::RecordId;
pub use traveler::{Traveler, UNKNOWN, UNKNOWN_EMAIL};
pub use trip::Trip;
