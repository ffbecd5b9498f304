//! Single-source shortest paths and path reconstruction.
//!
//! Both algorithms produce a shortest-path tree as a distance table and a
//! predecessor table. All weights are positive, so every predecessor chain
//! ends at the source.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::domain::{Path, StationId};
use crate::network::Network;

use super::config::Algorithm;

/// Errors from shortest path computation and path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The station is not part of the network
    #[error("station {0} is not in the network")]
    UnknownStation(StationId),

    /// The predecessor chain from the target does not reach the source.
    ///
    /// Reconstructing a path to an unreachable target is a caller error;
    /// check [`ShortestPaths::distance`] first.
    #[error("no path from {from} to {to}")]
    Unreachable { from: StationId, to: StationId },
}

/// Shortest-path tree rooted at one source station.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: StationId,
    /// Seconds from the source; `None` means unreachable.
    distances: HashMap<StationId, Option<u64>>,
    /// Previous station on the shortest path; `None` for the source and
    /// for unreachable stations.
    predecessors: HashMap<StationId, Option<StationId>>,
}

impl ShortestPaths {
    /// Returns the source station.
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Returns the distance in seconds to a station.
    ///
    /// `None` if the station is unreachable or unknown.
    pub fn distance(&self, to: StationId) -> Option<u64> {
        self.distances.get(&to).copied().flatten()
    }

    /// Returns the previous station on the shortest path to `to`.
    pub fn predecessor(&self, to: StationId) -> Option<StationId> {
        self.predecessors.get(&to).copied().flatten()
    }

    /// Returns the full predecessor table.
    pub fn predecessors(&self) -> &HashMap<StationId, Option<StationId>> {
        &self.predecessors
    }

    /// Returns the number of stations reachable from the source, itself
    /// included.
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Reconstruct the shortest path to `to`.
    pub fn path_to(&self, to: StationId) -> Result<Path, PathError> {
        if !self.distances.contains_key(&to) {
            return Err(PathError::UnknownStation(to));
        }
        reconstruct(&self.predecessors, self.source, to)
    }
}

/// Compute shortest distances and predecessors from `source`.
pub fn compute_distances(
    network: &Network,
    source: StationId,
    algorithm: Algorithm,
) -> Result<ShortestPaths, PathError> {
    let source_idx = network
        .index_of(source)
        .ok_or(PathError::UnknownStation(source))?;

    let (dist, pred) = match algorithm {
        Algorithm::Dijkstra => dijkstra(network, source_idx),
        Algorithm::BellmanFord => bellman_ford(network, source_idx),
    };

    let mut distances = HashMap::with_capacity(dist.len());
    let mut predecessors = HashMap::with_capacity(pred.len());
    for (i, (d, p)) in dist.into_iter().zip(pred).enumerate() {
        let id = network.station_at(i).id;
        distances.insert(id, d);
        predecessors.insert(id, p.map(|j| network.station_at(j).id));
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Dense distance and predecessor tables, indexed like the network.
type Tables = (Vec<Option<u64>>, Vec<Option<usize>>);

/// Relax every adjacency entry `|V| - 1` times, stopping early once a pass
/// changes nothing.
fn bellman_ford(network: &Network, source: usize) -> Tables {
    let n = network.station_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[source] = Some(0);

    for pass in 0..n.saturating_sub(1) {
        let mut changed = false;
        for u in 0..n {
            let Some(du) = dist[u] else {
                continue;
            };
            for nb in network.neighbors_at(u) {
                let candidate = du + u64::from(nb.weight);
                if dist[nb.index].is_none_or(|dv| candidate < dv) {
                    dist[nb.index] = Some(candidate);
                    pred[nb.index] = Some(u);
                    changed = true;
                }
            }
        }
        if !changed {
            trace!(passes = pass + 1, "relaxation converged");
            break;
        }
    }

    (dist, pred)
}

fn dijkstra(network: &Network, source: usize) -> Tables {
    let n = network.station_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((du, u))) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        for nb in network.neighbors_at(u) {
            if settled[nb.index] {
                continue;
            }
            let candidate = du + u64::from(nb.weight);
            if dist[nb.index].is_none_or(|dv| candidate < dv) {
                dist[nb.index] = Some(candidate);
                pred[nb.index] = Some(u);
                heap.push(Reverse((candidate, nb.index)));
            }
        }
    }

    (dist, pred)
}

/// Walk predecessor links from `to` back to `from`.
///
/// The walk is bounded by the size of the table, so a target whose chain
/// never reaches `from` gives [`PathError::Unreachable`] instead of looping.
pub fn reconstruct(
    predecessors: &HashMap<StationId, Option<StationId>>,
    from: StationId,
    to: StationId,
) -> Result<Path, PathError> {
    let unreachable = PathError::Unreachable { from, to };

    let mut stations = vec![to];
    let mut current = to;
    while current != from {
        if stations.len() > predecessors.len() {
            return Err(unreachable);
        }
        current = predecessors
            .get(&current)
            .copied()
            .flatten()
            .ok_or_else(|| unreachable.clone())?;
        stations.push(current);
    }
    stations.reverse();

    Path::new(stations).ok_or(unreachable)
}
