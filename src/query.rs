//! Read-only queries over cleaned traveler and trip sets

use crate::models::{Traveler, Trip};
use serde::Serialize;
use std::collections::HashMap;

/// Summed trip length for one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationTotal {
    pub destination: String,
    pub total_days: i64,
}

/// Length of a single trip, for per-traveler charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripDuration {
    pub destination: String,
    pub days: i64,
}

/// Trips belonging to `traveler`, in the order they were cleaned
#[must_use]
pub fn trips_for_traveler<'a>(trips: &'a [Trip], traveler: &Traveler) -> Vec<&'a Trip> {
    trips
        .iter()
        .filter(|trip| trip.traveler_id == traveler.traveler_id)
        .collect()
}

/// Total days per destination, longest first, ties by name.
pub fn duration_by_destination<'a, I>(trips: I) -> Vec<DestinationTotal>
where
    I: IntoIterator<Item = &'a Trip>,
{
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for trip in trips {
        *totals.entry(trip.destination.as_str()).or_insert(0) += trip.duration_days();
    }

    let mut ordered: Vec<DestinationTotal> = totals
        .into_iter()
        .map(|(destination, total_days)| DestinationTotal {
            destination: destination.to_string(),
            total_days,
        })
        .collect();
    ordered.sort_by(|a, b| {
        b.total_days
            .cmp(&a.total_days)
            .then_with(|| a.destination.cmp(&b.destination))
    });
    ordered
}

/// First traveler whose cleaned name matches exactly; `None` when absent
#[must_use]
pub fn find_traveler_by_name<'a>(travelers: &'a [Traveler], name: &str) -> Option<&'a Traveler> {
    travelers.iter().find(|traveler| traveler.name == name)
}

/// Each trip's destination and length, in input order
pub fn trip_durations<'a, I>(trips: I) -> Vec<TripDuration>
where
    I: IntoIterator<Item = &'a Trip>,
{
    trips
        .into_iter()
        .map(|trip| TripDuration {
            destination: trip.destination.clone(),
            days: trip.duration_days(),
        })
        .collect()
}

/// Traveler names in load order, as offered by a name selector
#[must_use]
pub fn traveler_names(travelers: &[Traveler]) -> Vec<&str> {
    travelers.iter().map(|t| t.name.as_str()).collect()
}
