//! # stationnet
//!
//! A weighted, undirected network of polling stations with two queries:
//! shortest path between two stations and "which stations are within this
//! distance" radius search.
//!
//! ## Architecture
//!
//! ```text
//! Callers (console, incident handling, reports)
//!     ↓
//! StationNetwork (stations + symmetric adjacency, single mutation path)
//!     ↓
//! Algorithms (Dijkstra, breadth-first radius, bounded Dijkstra radius)
//! ```
//!
//! Mutations return [`Result`] and leave the network unchanged when declined.
//! Queries never fail: unknown stations and unreachable targets give empty
//! results.
//!
//! The network has no internal locking. A host that shares one across
//! threads must serialize access itself.
//!
//! ## Example
//!
//! ```rust
//! use stationnet::StationNetwork;
//!
//! let mut network = StationNetwork::new();
//! network.add_station("P1", "Town Hall", "1 Main St", 500).unwrap();
//! network.add_station("P2", "Library", "2 Oak Ave", 300).unwrap();
//! network.add_station("P3", "School", "3 Elm St", 800).unwrap();
//! network.add_connection("P1", "P2", 2.5).unwrap();
//! network.add_connection("P2", "P3", 3.2).unwrap();
//! network.add_connection("P1", "P3", 10.0).unwrap();
//!
//! assert_eq!(network.find_shortest_path("P1", "P3"), vec!["P1", "P2", "P3"]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod network;

// Re-export main types
pub use config::{NetworkConfig, RadiusSearch};
pub use error::{NetworkError, Result};
pub use network::{
    algorithms, NearbyStation, Neighbors, NetworkStats, Route, Station, StationId, StationNetwork,
};
