//! Core network types: stations, IDs, and query results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Unique identifier for a station (caller-chosen string key).
pub type StationId = String;

/// A polling station: one node of the network.
///
/// The identifier never changes after creation. `total_voters` may exceed
/// `capacity`; see [`Station::is_over_capacity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier within a network
    pub id: StationId,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Number of voters the site is sized for
    pub capacity: u32,
    /// When the station was registered
    pub created_at: SystemTime,
    /// Voters recorded so far
    pub total_voters: u32,
    /// Whether the station is currently operating
    pub is_active: bool,
}

impl Station {
    /// Create a new, active station with no voters recorded.
    pub fn new(
        id: impl Into<StationId>,
        name: impl Into<String>,
        address: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            capacity,
            created_at: SystemTime::now(),
            total_voters: 0,
            is_active: true,
        }
    }

    /// Fraction of capacity in use (0.0 when capacity is zero).
    pub fn utilization_rate(&self) -> f64 {
        if self.capacity > 0 {
            f64::from(self.total_voters) / f64::from(self.capacity)
        } else {
            0.0
        }
    }

    /// True when more voters were recorded than the station is sized for.
    pub fn is_over_capacity(&self) -> bool {
        self.total_voters > self.capacity
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PollingStation{{id='{}', name='{}', address='{}', capacity={}, voters={}, active={}, utilization={:.1}%}}",
            self.id,
            self.name,
            self.address,
            self.capacity,
            self.total_voters,
            self.is_active,
            self.utilization_rate() * 100.0
        )
    }
}

/// A station found by a radius search, with the cumulative distance of the
/// path the search used to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyStation {
    /// Station that was reached
    pub station_id: StationId,
    /// Cumulative distance from the search source
    pub distance: f64,
}

impl fmt::Display for NearbyStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} km)", self.station_id, self.distance)
    }
}

/// A shortest path together with its total length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Stations from source to target, both inclusive
    pub stations: Vec<StationId>,
    /// Sum of the connection distances along `stations`
    pub total_distance: f64,
}

impl Route {
    /// Number of connections traversed.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Aggregate counts for a network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Number of stations
    pub station_count: usize,
    /// Number of undirected connections (each counted once)
    pub connection_count: usize,
    /// Mean number of connections per station
    pub average_degree: f64,
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NetworkStats{{stations={}, connections={}, avgConnections={:.1}}}",
            self.station_count, self.connection_count, self.average_degree
        )
    }
}
