//! Domain types for the metro network.
//!
//! This module contains the validated identifiers and value types shared by
//! the network model and the planner. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod route;
mod station;

pub use error::DomainError;
pub use route::{Itinerary, Path, Ride};
pub use station::{LineId, Station, StationId};
