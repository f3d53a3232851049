//! Core network types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Station`]: A polling site (network node)
//! - [`StationNetwork`]: The owned station table plus undirected, weighted adjacency
//! - [`algorithms`]: Shortest path and radius searches over a network

mod station_network;
mod types;
pub mod algorithms;

pub use station_network::{Neighbors, StationNetwork};
pub use types::{NearbyStation, NetworkStats, Route, Station, StationId};
