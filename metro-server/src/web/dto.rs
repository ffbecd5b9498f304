//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Ride, StationId};
use crate::network::{Network, StationPosition, StationPositions};
use crate::planner::{Route, SpanningTree, StationMatch};

/// Request to plan a route between two named stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub start: String,

    /// Destination station name
    pub end: String,
}

/// Travel time split into minutes and seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationResult {
    pub minutes: u64,
    pub seconds: u64,

    /// Human-readable form, e.g. "12 min 5 s"
    pub text: String,
}

impl DurationResult {
    pub fn from_seconds(total: u64) -> Self {
        let minutes = total / 60;
        let seconds = total % 60;
        Self {
            minutes,
            seconds,
            text: format!("{minutes} min {seconds} s"),
        }
    }
}

/// One ride of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideResult {
    /// Line identifier
    pub line: String,

    /// Boarding station name
    pub from: String,

    /// Alighting station name
    pub to: String,
}

impl RideResult {
    fn from_ride(ride: &Ride, network: &Network) -> Self {
        Self {
            line: ride.line.to_string(),
            from: station_name(network, ride.board),
            to: station_name(network, ride.alight),
        }
    }

    /// The instruction sentence for this ride.
    pub fn instruction(&self) -> String {
        format!("Take line {} from {} to {}.", self.line, self.from, self.to)
    }
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Station names in travel order
    pub path: Vec<String>,

    /// Total travel time in seconds
    pub total_seconds: u64,

    pub duration: DurationResult,

    pub rides: Vec<RideResult>,

    /// One sentence per ride
    pub instructions: Vec<String>,

    /// Plot coordinates of path stations with a known position
    pub x_coords: Vec<i64>,
    pub y_coords: Vec<i64>,
}

impl RouteResponse {
    /// Create from a route, naming stations from `network`.
    pub fn from_route(route: &Route, network: &Network, positions: &StationPositions) -> Self {
        let path: Vec<String> = route
            .path
            .stations()
            .iter()
            .map(|&id| station_name(network, id))
            .collect();

        let (x_coords, y_coords): (Vec<i64>, Vec<i64>) = path
            .iter()
            .filter_map(|name| positions.plot_coords(name))
            .unzip();

        let rides: Vec<RideResult> = route
            .itinerary
            .rides()
            .iter()
            .map(|r| RideResult::from_ride(r, network))
            .collect();
        let instructions = rides.iter().map(RideResult::instruction).collect();

        Self {
            path,
            total_seconds: route.total_seconds,
            duration: DurationResult::from_seconds(route.total_seconds),
            rides,
            instructions,
            x_coords,
            y_coords,
        }
    }
}

/// Response for the connectivity check.
#[derive(Debug, Serialize)]
pub struct ConnectivityResponse {
    pub connected: bool,
}

/// An edge of the spanning tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdgeResult {
    /// Station name on the root side
    pub parent: String,

    /// Station name on the leaf side
    pub child: String,

    /// Traversal time in seconds
    pub weight: u32,
}

/// The minimum spanning tree.
#[derive(Debug, Serialize)]
pub struct SpanningTreeResponse {
    pub edges: Vec<TreeEdgeResult>,
    pub total_weight: u64,
    pub covered_stations: usize,
    pub spans_network: bool,
}

impl SpanningTreeResponse {
    pub fn from_tree(tree: &SpanningTree, network: &Network) -> Self {
        Self {
            edges: tree
                .edges
                .iter()
                .map(|e| TreeEdgeResult {
                    parent: station_name(network, e.parent),
                    child: station_name(network, e.child),
                    weight: e.weight,
                })
                .collect(),
            total_weight: tree.total_weight,
            covered_stations: tree.covered,
            spans_network: tree.spans_network(),
        }
    }
}

/// Request to search stations by name prefix.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Name prefix (missing means empty)
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSearchResult {
    pub id: u32,
    pub name: String,
}

impl From<StationMatch> for StationSearchResult {
    fn from(m: StationMatch) -> Self {
        Self {
            id: m.id.value(),
            name: m.name,
        }
    }
}

/// A station position in plot coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionResult {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl From<&StationPosition> for PositionResult {
    fn from(p: &StationPosition) -> Self {
        Self {
            x: p.x,
            y: -p.y,
            label: p.label.clone(),
        }
    }
}

/// Summary of the published network.
#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    pub stations: usize,
    pub edges: usize,
    pub lines: usize,
    pub generation: u64,
}

impl NetworkSummary {
    pub fn new(network: &Network, generation: u64) -> Self {
        Self {
            stations: network.station_count(),
            edges: network.edge_count(),
            lines: network.line_count(),
            generation,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn station_name(network: &Network, id: StationId) -> String {
    network
        .name_of(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}
