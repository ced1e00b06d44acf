//! Application state: the currently loaded traveler and trip sets
//!
//! Both files load independently. A failure on one leaves that set empty and
//! is kept as an issue; the other set stays usable. Reloading replaces a set
//! wholesale and yields a new session.

use crate::ingest::read_table;
use crate::models::{Traveler, Trip};
use crate::normalize::{CleaningReport, normalize_travelers, normalize_trips};
use crate::query;
use crate::{RecordsError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// A cleaned entity set and where it came from
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub report: CleaningReport,
    pub source: PathBuf,
}

/// Read and clean a travelers file
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_travelers<P: AsRef<Path>>(path: P) -> Result<Loaded<Traveler>> {
    let table = read_table(path.as_ref())?;
    let (records, report) = normalize_travelers(&table)?;
    Ok(Loaded {
        records,
        report,
        source: path.as_ref().to_path_buf(),
    })
}

/// Read and clean a trips file
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_trips<P: AsRef<Path>>(path: P) -> Result<Loaded<Trip>> {
    let table = read_table(path.as_ref())?;
    let (records, report) = normalize_trips(&table)?;
    Ok(Loaded {
        records,
        report,
        source: path.as_ref().to_path_buf(),
    })
}

/// Loaded data for one interactive session
#[derive(Debug, Default)]
pub struct Session {
    travelers: Option<Loaded<Traveler>>,
    trips: Option<Loaded<Trip>>,
    traveler_issue: Option<RecordsError>,
    trip_issue: Option<RecordsError>,
}

impl Session {
    /// Load both files, each independently of the other
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(travelers_path: P, trips_path: Q) -> Self {
        Self::default()
            .reload_travelers(travelers_path)
            .reload_trips(trips_path)
    }

    /// Replace the traveler set with the contents of `path`
    #[must_use]
    pub fn reload_travelers<P: AsRef<Path>>(self, path: P) -> Self {
        let (travelers, traveler_issue) = split(load_travelers(path));
        Self {
            travelers,
            traveler_issue,
            ..self
        }
    }

    /// Replace the trip set with the contents of `path`
    #[must_use]
    pub fn reload_trips<P: AsRef<Path>>(self, path: P) -> Self {
        let (trips, trip_issue) = split(load_trips(path));
        Self {
            trips,
            trip_issue,
            ..self
        }
    }

    #[must_use]
    pub fn travelers(&self) -> &[Traveler] {
        self.travelers.as_ref().map(|l| l.records.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        self.trips.as_ref().map(|l| l.records.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn traveler_report(&self) -> Option<&CleaningReport> {
        self.travelers.as_ref().map(|l| &l.report)
    }

    #[must_use]
    pub fn trip_report(&self) -> Option<&CleaningReport> {
        self.trips.as_ref().map(|l| &l.report)
    }

    /// Load failures, travelers first
    pub fn issues(&self) -> impl Iterator<Item = &RecordsError> {
        self.traveler_issue.iter().chain(self.trip_issue.iter())
    }

    /// Both sets hold at least one record
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.travelers().is_empty() && !self.trips().is_empty()
    }

    /// Names for a traveler selector
    #[must_use]
    pub fn traveler_names(&self) -> Vec<&str> {
        query::traveler_names(self.travelers())
    }

    /// Look up a traveler by name and return their trips.
    ///
    /// `None` when no traveler has that name; an empty list when they have
    /// no trips.
    #[must_use]
    pub fn itinerary(&self, name: &str) -> Option<(&Traveler, Vec<&Trip>)> {
        let traveler = query::find_traveler_by_name(self.travelers(), name)?;
        Some((traveler, query::trips_for_traveler(self.trips(), traveler)))
    }
}

fn split<T>(outcome: Result<Loaded<T>>) -> (Option<Loaded<T>>, Option<RecordsError>) {
    match outcome {
        Ok(loaded) => {
            info!(
                "Loaded {} records from {}",
                loaded.records.len(),
                loaded.source.display()
            );
            (Some(loaded), None)
        }
        Err(err) => {
            warn!("{}", err);
            (None, Some(err))
        }
    }
}
