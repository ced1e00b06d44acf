//! `travel-records` - cleaning and summarizing traveler and trip records
//!
//! This library loads traveler and trip CSV files, normalizes them into
//! validated entity sets, and answers the lookups and aggregations used to
//! display them.

pub mod chart;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod query;
pub mod session;

// Re-export core types for public API
pub use chart::BarChart;
pub use config::RecordsConfig;
pub use error::RecordsError;
pub use ingest::RawTable;
pub use models::{RecordId, Traveler, Trip};
pub use normalize::{CleaningReport, DropReason, normalize_travelers, normalize_trips};
pub use query::{
    DestinationTotal, duration_by_destination, find_traveler_by_name, trips_for_traveler,
};
pub use session::{Loaded, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RecordsError>;
