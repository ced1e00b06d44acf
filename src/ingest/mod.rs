//! CSV boundary for traveler and trip files
//!
//! Reads raw tables from disk and writes cleaned entity sets back out in
//! the same column layout, with ISO-8601 dates and no index column.

pub mod table;

pub use table::{RawTable, cell};

use crate::models::{Traveler, Trip};
use crate::{RecordsError, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Load a CSV file into a raw table
#[tracing::instrument(level = "debug")]
pub fn read_table<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<RawTable> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RecordsError::missing_input(path));
    }

    let file = File::open(path)?;
    let table = RawTable::from_reader(file)?;
    debug!(
        "Read {} rows with columns [{}] from {:?}",
        table.len(),
        table.headers.join(", "),
        path
    );
    Ok(table)
}

/// Write cleaned travelers to `path`
pub fn write_travelers<P: AsRef<Path>>(path: P, travelers: &[Traveler]) -> Result<()> {
    write_records(path.as_ref(), &Traveler::COLUMNS, travelers)
}

/// Write cleaned trips to `path`
pub fn write_trips<P: AsRef<Path>>(path: P, trips: &[Trip]) -> Result<()> {
    write_records(path.as_ref(), &Trip::COLUMNS, trips)
}

fn write_records<T: Serialize>(path: &Path, columns: &[&str], records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    // header written explicitly so an empty set still produces one
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(columns)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
