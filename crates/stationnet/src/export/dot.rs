//! DOT format export for Graphviz visualization.
//!
//! Renders the network as an undirected Graphviz graph. Stations and
//! connections are emitted in ascending ID order so output is stable.

use crate::{Station, StationNetwork};

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Fill color for active stations (hex color code)
    pub active_color: String,
    /// Fill color for inactive stations
    pub inactive_color: String,
    /// Fill color for stations holding more voters than their capacity
    pub over_capacity_color: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Append the address to each station label
    pub show_address: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            active_color: "#90CAF9".to_string(),
            inactive_color: "#E0E0E0".to_string(),
            over_capacity_color: "#FFAB91".to_string(),
            rankdir: "LR".to_string(),
            show_address: false,
        }
    }
}

/// Export network to Graphviz DOT format
pub fn export_dot(network: &StationNetwork) -> String {
    export_dot_styled(network, &DotOptions::default())
}

/// Export network to Graphviz DOT format with custom styling
pub fn export_dot_styled(network: &StationNetwork, options: &DotOptions) -> String {
    let mut output = String::new();

    output.push_str("graph station_network {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled, shape=box];\n\n");

    let ids = network.station_ids();

    for id in &ids {
        if let Some(station) = network.get_station(id) {
            let mut label = escape_dot_label(&station.name);
            if options.show_address && !station.address.is_empty() {
                label.push_str("\\n");
                label.push_str(&escape_dot_label(&station.address));
            }
            output.push_str(&format!(
                "    \"{}\" [label=\"{label}\", fillcolor=\"{}\"];\n",
                escape_dot_label(id),
                station_color(station, options)
            ));
        }
    }

    output.push('\n');

    // Each undirected connection is stored under both endpoints; emit it once
    for id in &ids {
        let Some(neighbors) = network.neighbors(id) else {
            continue;
        };
        for (neighbor, distance) in neighbors.iter().filter(|(n, _)| *n > id) {
            output.push_str(&format!(
                "    \"{}\" -- \"{}\" [label=\"{distance:.1} km\"];\n",
                escape_dot_label(id),
                escape_dot_label(neighbor)
            ));
        }
    }

    output.push_str("}\n");
    output
}

fn station_color<'a>(station: &Station, options: &'a DotOptions) -> &'a str {
    if station.is_over_capacity() {
        &options.over_capacity_color
    } else if station.is_active {
        &options.active_color
    } else {
        &options.inactive_color
    }
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
