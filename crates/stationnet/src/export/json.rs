//! JSON export for web and reporting tools.
//!
//! Generates JSON with "stations" and "connections" arrays plus a "stats"
//! summary. Each undirected connection appears once, with `from < to`.

use crate::error::{NetworkError, Result};
use crate::{Station, StationNetwork};
use serde_json::{json, Value};
use std::time::UNIX_EPOCH;

/// Export network to JSON
pub fn export_json(network: &StationNetwork) -> Result<String> {
    let value = export_json_value(network);
    serde_json::to_string_pretty(&value)
        .map_err(|e| NetworkError::serialization("Failed to serialize network", Some(e)))
}

/// Build the JSON document without rendering it to a string
pub fn export_json_value(network: &StationNetwork) -> Value {
    let ids = network.station_ids();

    let stations: Vec<Value> = ids
        .iter()
        .filter_map(|id| network.get_station(id))
        .map(station_to_json)
        .collect();

    let mut connections = Vec::new();
    for id in &ids {
        if let Some(neighbors) = network.neighbors(id) {
            for (neighbor, distance) in neighbors.iter().filter(|(n, _)| *n > id) {
                connections.push(json!({
                    "from": id,
                    "to": neighbor,
                    "distance": distance,
                }));
            }
        }
    }

    json!({
        "stations": stations,
        "connections": connections,
        "stats": network.get_network_stats(),
    })
}

fn station_to_json(station: &Station) -> Value {
    let created_at = station
        .created_at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    json!({
        "id": station.id,
        "name": station.name,
        "address": station.address,
        "capacity": station.capacity,
        "total_voters": station.total_voters,
        "is_active": station.is_active,
        "utilization": station.utilization_rate(),
        "over_capacity": station.is_over_capacity(),
        "created_at": created_at,
    })
}
