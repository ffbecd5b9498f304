//! The immutable network snapshot.
//!
//! A `Network` is built once through [`NetworkBuilder`] and never changes
//! afterwards. Stations are stored densely in declaration order; the
//! planner algorithms work on those dense indices and translate back to
//! [`StationId`] at their boundary.

use std::collections::HashMap;

use crate::domain::{LineId, Station, StationId};

/// An undirected connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: StationId,
    pub b: StationId,
    /// Traversal time in seconds
    pub weight: u32,
}

/// One entry of a station's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub station: StationId,
    /// Dense index of `station` in the network
    pub index: usize,
    /// Traversal time in seconds
    pub weight: u32,
}

/// A read-only transit network.
///
/// Connections are symmetric: each edge appears in the adjacency list of
/// both of its endpoints, and once in the flat edge list.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<Neighbor>>,
    lines: Vec<Vec<LineId>>,
    edges: Vec<Edge>,
    /// Lower-cased name to the last station declared with that name.
    by_name: HashMap<String, StationId>,
}

impl Network {
    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of edges (each undirected edge counted once).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns all stations in declaration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the flat edge list in file order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.index_of(id).map(|i| &self.stations[i])
    }

    /// Returns the dense index of a station.
    pub fn index_of(&self, id: StationId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns the station at a dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= station_count()`.
    pub fn station_at(&self, index: usize) -> &Station {
        &self.stations[index]
    }

    /// Returns the display name of a station.
    pub fn name_of(&self, id: StationId) -> Option<&str> {
        self.station(id).map(|s| s.name.as_str())
    }

    /// Returns the adjacency list of the station at a dense index.
    pub fn neighbors_at(&self, index: usize) -> &[Neighbor] {
        &self.adjacency[index]
    }

    /// Returns the adjacency list of a station (empty if unknown).
    pub fn neighbors(&self, id: StationId) -> &[Neighbor] {
        self.index_of(id)
            .map(|i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
    }

    /// Returns every line the station was declared on, one entry per
    /// vertex record, in file order.
    pub fn lines_of(&self, id: StationId) -> &[LineId] {
        self.index_of(id)
            .map(|i| self.lines[i].as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of distinct lines in the network.
    pub fn line_count(&self) -> usize {
        let mut all: Vec<&LineId> = self.lines.iter().flatten().collect();
        all.sort();
        all.dedup();
        all.len()
    }

    /// Find a station by exact, case-insensitive name.
    ///
    /// Surrounding whitespace is ignored. When several stations share a
    /// name, the one declared last wins.
    pub fn find_by_name(&self, name: &str) -> Option<StationId> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    /// Returns the weight of the direct edge between two stations, if any.
    ///
    /// Parallel edges are allowed; the lightest one is returned.
    pub fn edge_weight(&self, from: StationId, to: StationId) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .filter(|n| n.station == to)
            .map(|n| n.weight)
            .min()
    }
}

/// Builder for a [`Network`].
///
/// Applies the loading rules of the network description: re-declaring a
/// station overwrites its attributes and accumulates its lines, and edges
/// to unknown stations are refused.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station, or re-declare an existing one.
    pub fn add_station(&mut self, station: Station) -> &mut Self {
        let line = station.line.clone();
        match self.inner.index.get(&station.id) {
            Some(&i) => {
                self.inner.stations[i] = station;
                self.inner.lines[i].push(line);
            }
            None => {
                let i = self.inner.stations.len();
                self.inner.index.insert(station.id, i);
                self.inner.stations.push(station);
                self.inner.adjacency.push(Vec::new());
                self.inner.lines.push(vec![line]);
            }
        }
        self
    }

    /// Add an undirected edge.
    ///
    /// Returns `false` (and adds nothing) if either endpoint is undeclared.
    pub fn add_edge(&mut self, a: StationId, b: StationId, weight: u32) -> bool {
        let (Some(ia), Some(ib)) = (self.inner.index_of(a), self.inner.index_of(b)) else {
            return false;
        };
        self.inner.adjacency[ia].push(Neighbor {
            station: b,
            index: ib,
            weight,
        });
        self.inner.adjacency[ib].push(Neighbor {
            station: a,
            index: ia,
            weight,
        });
        self.inner.edges.push(Edge { a, b, weight });
        true
    }

    /// Returns true if the station has been declared.
    pub fn contains(&self, id: StationId) -> bool {
        self.inner.index.contains_key(&id)
    }

    /// Build the network.
    pub fn build(mut self) -> Network {
        let mut by_name = HashMap::with_capacity(self.inner.stations.len());
        for station in &self.inner.stations {
            by_name.insert(station.name.to_lowercase(), station.id);
        }
        self.inner.by_name = by_name;
        self.inner
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn empty_network() {
        let net = NetworkBuilder::new().build();
        assert!(net.is_empty());
        assert_eq!(net.station_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.neighbors(id(1)).is_empty());
    }

    #[test]
    fn edges_are_symmetric() {
        let net = network(&[(1, "A", "1"), (2, "B", "1")], &[(1, 2, 60)]);

        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.edge_weight(id(1), id(2)), Some(60));
        assert_eq!(net.edge_weight(id(2), id(1)), Some(60));
        assert_eq!(net.neighbors(id(1)).len(), 1);
        assert_eq!(net.neighbors(id(2)).len(), 1);
    }

    #[test]
    fn edge_to_unknown_station_is_refused() {
        let mut builder = NetworkBuilder::new();
        builder.add_station(station(1, "A", "1"));
        assert!(!builder.add_edge(id(1), id(9), 60));
        let net = builder.build();
        assert_eq!(net.edge_count(), 0);
        assert!(net.neighbors(id(1)).is_empty());
    }

    #[test]
    fn redeclaration_overwrites_and_accumulates_lines() {
        let mut builder = NetworkBuilder::new();
        builder.add_station(station(1, "Old", "1"));
        builder.add_station(station(2, "B", "1"));
        builder.add_edge(id(1), id(2), 30);
        builder.add_station(station(1, "New", "4"));
        let net = builder.build();

        assert_eq!(net.station_count(), 2);
        assert_eq!(net.name_of(id(1)), Some("New"));
        assert_eq!(net.station(id(1)).unwrap().line, line("4"));
        assert_eq!(net.lines_of(id(1)), &[line("1"), line("4")]);
        // Declaration order and adjacency are kept
        assert_eq!(net.stations()[0].id, id(1));
        assert_eq!(net.edge_weight(id(1), id(2)), Some(30));
    }

    #[test]
    fn find_by_name_is_case_insensitive_and_last_wins() {
        let net = network(
            &[(1, "Chatelet", "1"), (2, "Nation", "1"), (3, "CHATELET", "4")],
            &[],
        );

        assert_eq!(net.find_by_name("chatelet"), Some(id(3)));
        assert_eq!(net.find_by_name("  Nation "), Some(id(2)));
        assert_eq!(net.find_by_name("Natio"), None);
    }

    #[test]
    fn line_count_is_distinct() {
        let net = network(&[(1, "A", "1"), (2, "B", "1"), (3, "C", "2")], &[]);
        assert_eq!(net.line_count(), 2);
    }

    #[test]
    fn parallel_edges_report_lightest() {
        let net = network(&[(1, "A", "1"), (2, "B", "1")], &[(1, 2, 90), (2, 1, 45)]);
        assert_eq!(net.edge_count(), 2);
        assert_eq!(net.edge_weight(id(1), id(2)), Some(45));
    }
}
