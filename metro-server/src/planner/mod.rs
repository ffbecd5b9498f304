//! Network queries.
//!
//! This module holds the graph algorithms that answer questions about a
//! loaded network: shortest routes and their line-by-line itineraries,
//! the minimum spanning tree, and connectivity. Every function here is a
//! pure query over an immutable [`Network`](crate::network::Network).

mod config;
mod connectivity;
mod itinerary;
mod query;
mod shortest_path;
mod spanning_tree;

pub use config::{Algorithm, PlannerConfig, UnknownAlgorithm};
pub use connectivity::is_connected;
pub use itinerary::build_itinerary;
pub use query::{Planner, QueryError, Route, StationMatch};
pub use shortest_path::{PathError, ShortestPaths, compute_distances, reconstruct};
pub use spanning_tree::{SpanningTree, TreeEdge, build_spanning_tree};
