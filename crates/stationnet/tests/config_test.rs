//! Integration tests for loading network configuration from disk.

use stationnet::{NetworkConfig, NetworkError, RadiusSearch, StationNetwork};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("network.json");

    let config = NetworkConfig::exact().with_search_radius(7.5);
    fs::write(&path, config.to_json_string().unwrap()).unwrap();

    let loaded = NetworkConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = NetworkConfig::from_json_file(temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(NetworkError::Config { .. })));
}

#[test]
fn test_invalid_radius_in_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("network.json");
    fs::write(&path, r#"{"default_search_radius": -2.0}"#).unwrap();

    let result = NetworkConfig::from_json_file(&path);
    assert!(matches!(result, Err(NetworkError::Config { .. })));
}

#[test]
fn test_network_uses_loaded_config() {
    let config = NetworkConfig::from_json_str(
        r#"{"default_search_radius": 1.0, "radius_search": "shortest_distance"}"#,
    )
    .unwrap();
    let mut network = StationNetwork::with_config(config).unwrap();
    assert_eq!(network.config().radius_search, RadiusSearch::ShortestDistance);

    network.add_station("A", "A", "", 10).unwrap();
    network.add_station("B", "B", "", 10).unwrap();
    network.add_station("C", "C", "", 10).unwrap();
    network.add_connection("A", "B", 0.6).unwrap();
    network.add_connection("B", "C", 0.6).unwrap();

    let result = network.find_nearest_stations_default("A");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].station_id, "B");
}
