//! Main StationNetwork interface for network mutation and lookup.

use super::algorithms;
use super::types::{NearbyStation, NetworkStats, Route, Station, StationId};
use crate::config::{NetworkConfig, RadiusSearch};
use crate::error::{NetworkError, Result};
use log::{debug, trace, warn};
use std::collections::{BTreeMap, HashMap};

/// Neighbor table of one station: neighbor ID -> connection distance.
///
/// Ordered so traversals visit neighbors in a reproducible order.
pub type Neighbors = BTreeMap<StationId, f64>;

/// A weighted, undirected network of polling stations.
///
/// The station table and the adjacency table are only written through the
/// methods below, so every station has exactly one neighbor table and every
/// connection is stored symmetrically under both endpoints.
#[derive(Debug, Clone, Default)]
pub struct StationNetwork {
    config: NetworkConfig,
    stations: HashMap<StationId, Station>,
    adjacency: HashMap<StationId, Neighbors>,
}

impl StationNetwork {
    /// Create an empty network with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Config`] if the configuration fails validation.
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// The configuration this network was built with.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Register a new station with an empty neighbor table.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateStation`] if the ID is taken. The
    /// existing station is left untouched.
    pub fn add_station(
        &mut self,
        id: impl Into<StationId>,
        name: impl Into<String>,
        address: impl Into<String>,
        capacity: u32,
    ) -> Result<()> {
        let id = id.into();
        if self.stations.contains_key(&id) {
            warn!("Station {id} already exists!");
            return Err(NetworkError::DuplicateStation { station_id: id });
        }

        debug!("Adding station: id={id}, capacity={capacity}");
        let station = Station::new(id.clone(), name, address, capacity);
        self.adjacency.insert(id.clone(), Neighbors::new());
        self.stations.insert(id, station);
        Ok(())
    }

    /// Connect two stations with an undirected edge of the given distance.
    ///
    /// Re-adding an existing connection overwrites its distance.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::StationNotFound`] if either endpoint is missing
    /// - [`NetworkError::SelfLoop`] if both endpoints are the same station
    /// - [`NetworkError::InvalidDistance`] if the distance is negative or not finite
    pub fn add_connection(&mut self, id_a: &str, id_b: &str, distance: f64) -> Result<()> {
        for id in [id_a, id_b] {
            if !self.stations.contains_key(id) {
                warn!("One or both stations do not exist! ({id_a}, {id_b})");
                return Err(NetworkError::not_found(id));
            }
        }

        if id_a == id_b {
            warn!("Cannot connect a station to itself! ({id_a})");
            return Err(NetworkError::SelfLoop {
                station_id: id_a.to_string(),
            });
        }

        if !distance.is_finite() || distance < 0.0 {
            warn!("Rejecting connection {id_a} <-> {id_b}: invalid distance {distance}");
            return Err(NetworkError::InvalidDistance { distance });
        }

        debug!("Adding connection: {id_a} <-> {id_b}, distance={distance}");
        self.neighbors_mut(id_a)?.insert(id_b.to_string(), distance);
        self.neighbors_mut(id_b)?.insert(id_a.to_string(), distance);
        Ok(())
    }

    /// Record the number of voters seen at a station.
    ///
    /// Counts above capacity are accepted.
    pub fn set_voter_count(&mut self, id: &str, total_voters: u32) -> Result<()> {
        let station = self.station_mut(id)?;
        station.total_voters = total_voters;
        if station.is_over_capacity() {
            debug!(
                "Station {id} over capacity: {total_voters}/{}",
                station.capacity
            );
        }
        Ok(())
    }

    /// Mark a station as operating or closed.
    pub fn set_active(&mut self, id: &str, active: bool) -> Result<()> {
        debug!("Setting station {id} active={active}");
        self.station_mut(id)?.is_active = active;
        Ok(())
    }

    /// Get a station by ID.
    pub fn get_station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Whether a station with this ID is registered.
    pub fn contains_station(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    /// Snapshot of every station.
    ///
    /// The returned map is an independent copy; changing it never affects
    /// the network.
    pub fn get_all_stations(&self) -> HashMap<StationId, Station> {
        self.stations.clone()
    }

    /// All station IDs in ascending order.
    pub fn station_ids(&self) -> Vec<StationId> {
        let mut ids: Vec<StationId> = self.stations.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// IDs of the stations directly connected to `id` (empty if unknown).
    pub fn get_connected_stations(&self, id: &str) -> Vec<StationId> {
        self.adjacency
            .get(id)
            .map(|neighbors| neighbors.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Read-only view of a station's neighbor table.
    pub fn neighbors(&self, id: &str) -> Option<&Neighbors> {
        self.adjacency.get(id)
    }

    /// Distance of the direct connection between two stations, if any.
    pub fn connection_distance(&self, id_a: &str, id_b: &str) -> Option<f64> {
        self.adjacency.get(id_a)?.get(id_b).copied()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Station, connection and average-degree totals.
    pub fn get_network_stats(&self) -> NetworkStats {
        let station_count = self.station_count();
        let connection_count = self.connection_count();
        let average_degree = if station_count > 0 {
            2.0 * connection_count as f64 / station_count as f64
        } else {
            0.0
        };
        trace!("Network stats: stations={station_count}, connections={connection_count}");

        NetworkStats {
            station_count,
            connection_count,
            average_degree,
        }
    }

    /// Shortest path between two stations (see [`algorithms::shortest_path`]).
    pub fn find_shortest_path(&self, source: &str, target: &str) -> Vec<StationId> {
        algorithms::shortest_path(self, source, target)
    }

    /// Shortest path with its total distance (see [`algorithms::shortest_route`]).
    pub fn find_shortest_route(&self, source: &str, target: &str) -> Option<Route> {
        algorithms::shortest_route(self, source, target)
    }

    /// Stations reachable within `max_distance`, first-reached semantics
    /// (see [`algorithms::nearest_stations`]).
    pub fn find_nearest_stations(&self, source: &str, max_distance: f64) -> Vec<NearbyStation> {
        algorithms::nearest_stations(self, source, max_distance)
    }

    /// Stations whose shortest distance is within `max_distance`
    /// (see [`algorithms::nearest_stations_exact`]).
    pub fn find_nearest_stations_exact(
        &self,
        source: &str,
        max_distance: f64,
    ) -> Vec<NearbyStation> {
        algorithms::nearest_stations_exact(self, source, max_distance)
    }

    /// Radius search using the configured radius and strategy.
    pub fn find_nearest_stations_default(&self, source: &str) -> Vec<NearbyStation> {
        let radius = self.config.default_search_radius;
        match self.config.radius_search {
            RadiusSearch::FirstReached => self.find_nearest_stations(source, radius),
            RadiusSearch::ShortestDistance => self.find_nearest_stations_exact(source, radius),
        }
    }

    fn station_mut(&mut self, id: &str) -> Result<&mut Station> {
        self.stations
            .get_mut(id)
            .ok_or_else(|| NetworkError::not_found(id))
    }

    fn neighbors_mut(&mut self, id: &str) -> Result<&mut Neighbors> {
        self.adjacency
            .get_mut(id)
            .ok_or_else(|| NetworkError::not_found(id))
    }
}
