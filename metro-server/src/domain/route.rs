//! Path and itinerary types.
//!
//! A `Path` is the station sequence of a shortest route. An `Itinerary`
//! groups that sequence into rides on a single line each.

use super::{LineId, StationId};

/// An ordered station sequence, source first, target last.
///
/// # Invariants
///
/// - At least one station
/// - No station appears twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stations: Vec<StationId>,
}

impl Path {
    /// Constructs a path, returning `None` if the sequence is empty or
    /// repeats a station.
    pub fn new(stations: Vec<StationId>) -> Option<Self> {
        if stations.is_empty() {
            return None;
        }
        let mut seen = std::collections::HashSet::with_capacity(stations.len());
        if !stations.iter().all(|id| seen.insert(*id)) {
            return None;
        }
        Some(Path { stations })
    }

    /// Returns the single-station path for a trip that goes nowhere.
    pub fn single(station: StationId) -> Self {
        Path {
            stations: vec![station],
        }
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns the first station.
    pub fn source(&self) -> StationId {
        self.stations[0]
    }

    /// Returns the last station.
    pub fn target(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Returns the number of stations on the path.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: a path holds at least one station.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over consecutive station pairs.
    pub fn hops(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.stations.windows(2).map(|w| (w[0], w[1]))
    }
}

/// One ride on a single line, from boarding to alighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    pub line: LineId,
    pub board: StationId,
    pub alight: StationId,
}

/// Ordered rides with line changes between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    rides: Vec<Ride>,
}

impl Itinerary {
    /// Constructs an itinerary from rides in travel order.
    pub fn new(rides: Vec<Ride>) -> Self {
        Self { rides }
    }

    /// Returns all rides in order.
    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Returns the number of line changes (rides - 1, or 0).
    pub fn change_count(&self) -> usize {
        self.rides.len().saturating_sub(1)
    }

    /// Returns true if there are no rides.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}
