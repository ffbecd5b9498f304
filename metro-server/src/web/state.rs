//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::RouteCache;
use crate::network::{SharedNetwork, StationPositions};
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Currently published network
    pub network: SharedNetwork,

    /// Station plot positions (empty when no position file is configured)
    pub positions: Arc<StationPositions>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,

    /// Shortest-path trees per snapshot and source station
    pub routes: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: SharedNetwork,
        positions: StationPositions,
        config: PlannerConfig,
        routes: RouteCache,
    ) -> Self {
        Self {
            network,
            positions: Arc::new(positions),
            config: Arc::new(config),
            routes: Arc::new(routes),
        }
    }
}
