//! Query surface over one network snapshot.
//!
//! A `Planner` borrows an immutable [`Network`] and answers every question
//! the front ends ask: shortest routes by station name, the spanning tree,
//! connectivity and station search. It holds no state of its own, so any
//! number of planners can query the same snapshot concurrently.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Itinerary, Path, StationId};
use crate::network::Network;

use super::config::PlannerConfig;
use super::connectivity::is_connected;
use super::itinerary::build_itinerary;
use super::shortest_path::{PathError, ShortestPaths, compute_distances};
use super::spanning_tree::{SpanningTree, build_spanning_tree};

/// Error from a network query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No station has this name
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    /// Both stations exist but no path joins them
    #[error("no route between {from} and {to}")]
    Unreachable { from: String, to: String },

    /// Internal path computation failure
    #[error(transparent)]
    Path(#[from] PathError),
}

/// A shortest route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations in travel order
    pub path: Path,
    /// Total travel time in seconds
    pub total_seconds: u64,
    /// Rides and line changes along the path
    pub itinerary: Itinerary,
}

/// A station found by name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMatch {
    pub id: StationId,
    pub name: String,
}

/// Answers queries about one network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner over a network.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Resolve a station name (case-insensitive, exact).
    pub fn resolve(&self, name: &str) -> Result<StationId, QueryError> {
        self.network
            .find_by_name(name)
            .ok_or_else(|| QueryError::StationNotFound {
                name: name.trim().to_string(),
            })
    }

    /// Compute the shortest-path tree rooted at `source`.
    pub fn shortest_paths_from(&self, source: StationId) -> Result<ShortestPaths, QueryError> {
        Ok(compute_distances(
            self.network,
            source,
            self.config.algorithm,
        )?)
    }

    /// Find the shortest route between two stations by name.
    pub fn shortest_path(&self, source_name: &str, target_name: &str) -> Result<Route, QueryError> {
        let source = self.resolve(source_name)?;
        let target = self.resolve(target_name)?;
        let paths = self.shortest_paths_from(source)?;
        self.route_to(&paths, target)
    }

    /// Extract the route to `target` from a precomputed shortest-path tree.
    pub fn route_to(&self, paths: &ShortestPaths, target: StationId) -> Result<Route, QueryError> {
        let Some(total_seconds) = paths.distance(target) else {
            return Err(QueryError::Unreachable {
                from: self.display_name(paths.source()),
                to: self.display_name(target),
            });
        };

        let path = paths.path_to(target)?;
        let itinerary = build_itinerary(&path, |s| self.network.lines_of(s));
        debug!(
            from = %paths.source(),
            to = %target,
            seconds = total_seconds,
            stations = path.len(),
            rides = itinerary.rides().len(),
            "found route"
        );

        Ok(Route {
            path,
            total_seconds,
            itinerary,
        })
    }

    /// Build the minimum spanning tree of the first station's component.
    pub fn spanning_tree(&self) -> SpanningTree {
        build_spanning_tree(self.network)
    }

    /// Returns true if the whole network is one connected component.
    pub fn is_connected(&self) -> bool {
        is_connected(self.network)
    }

    /// Find stations whose name starts with `prefix`, ignoring case.
    ///
    /// Results are in declaration order, one per distinct name. An empty
    /// prefix matches nothing.
    pub fn search_stations(&self, prefix: &str) -> Vec<StationMatch> {
        let query = prefix.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        self.network
            .stations()
            .iter()
            .filter_map(|station| {
                let lower = station.name.to_lowercase();
                if lower.starts_with(&query) && seen.insert(lower) {
                    Some(StationMatch {
                        id: station.id,
                        name: station.name.clone(),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    fn display_name(&self, id: StationId) -> String {
        self.network
            .name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}
