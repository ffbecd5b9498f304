//! Web layer for the metro planner.
//!
//! Provides JSON endpoints for route planning, network analysis and station
//! lookup over the currently published network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
