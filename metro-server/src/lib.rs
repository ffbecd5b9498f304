//! Metro network planner server.
//!
//! Loads a metro network description and answers: "what is the fastest way
//! from this station to that one, and which lines do I take?" Alongside
//! routes it reports connectivity, the minimum spanning tree and station
//! search over the same network.

pub mod cache;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
