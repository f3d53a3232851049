//! Basic usage example for stationnet
//!
//! This example demonstrates:
//! - Building a small station network
//! - Shortest path and radius queries
//! - Network statistics and export

use stationnet::{export, StationNetwork};

fn main() -> stationnet::Result<()> {
    let mut network = StationNetwork::new();

    println!("Creating a sample polling station network...\n");

    network.add_station("PS001", "Downtown Community Center", "123 Main St", 1500)?;
    network.add_station("PS002", "Eastside School", "456 Oak Ave", 1200)?;
    network.add_station("PS003", "Westside Library", "789 Pine St", 800)?;
    network.add_station("PS004", "Central High School", "321 Elm St", 2000)?;

    network.add_connection("PS001", "PS002", 2.5)?;
    network.add_connection("PS001", "PS004", 1.8)?;
    network.add_connection("PS002", "PS003", 3.2)?;
    network.add_connection("PS003", "PS004", 2.1)?;

    // Rejected mutations leave the network unchanged
    if let Err(e) = network.add_connection("PS001", "PS001", 1.0) {
        println!("✗ {e}");
    }

    println!("\n{}", export::render_text(&network));

    match network.find_shortest_route("PS002", "PS004") {
        Some(route) => println!(
            "Shortest path PS002 -> PS004: {} ({:.1} km)",
            route.stations.join(" -> "),
            route.total_distance
        ),
        None => println!("No path from PS002 to PS004"),
    }

    println!("\nStations within 3.0 km of PS001:");
    for nearby in network.find_nearest_stations("PS001", 3.0) {
        println!("  {nearby}");
    }

    println!("\n{}", network.get_network_stats());
    println!("\n{}", export::export_dot(&network));

    Ok(())
}
