//! Plain-text listing of the network, one block per station.

use crate::StationNetwork;
use std::fmt::Write;

/// Render every station followed by its connections.
///
/// ```text
/// Polling Station Network:
/// PollingStation{id='PS001', ...}
///   Connected to:
///     PS002 (2.5 km)
/// ```
pub fn render_text(network: &StationNetwork) -> String {
    let mut output = String::from("Polling Station Network:\n");

    for id in network.station_ids() {
        let Some(station) = network.get_station(&id) else {
            continue;
        };
        let _ = writeln!(output, "{station}");

        match network.neighbors(&id) {
            Some(neighbors) if !neighbors.is_empty() => {
                output.push_str("  Connected to:\n");
                for (neighbor, distance) in neighbors {
                    let _ = writeln!(output, "    {neighbor} ({distance:.1} km)");
                }
            }
            _ => output.push_str("  No connections\n"),
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_isolated_station() {
        let mut network = StationNetwork::new();
        network.add_station("PS001", "Hall", "1 Main St", 10).unwrap();
        let text = render_text(&network);
        assert!(text.starts_with("Polling Station Network:\n"));
        assert!(text.contains("id='PS001'"));
        assert!(text.contains("  No connections\n"));
    }

    #[test]
    fn test_render_connections_both_sides() {
        let mut network = StationNetwork::new();
        network.add_station("PS001", "Hall", "", 10).unwrap();
        network.add_station("PS002", "School", "", 10).unwrap();
        network.add_connection("PS001", "PS002", 2.5).unwrap();
        let text = render_text(&network);
        assert!(text.contains("    PS002 (2.5 km)\n"));
        assert!(text.contains("    PS001 (2.5 km)\n"));
        assert!(!text.contains("No connections"));
    }
}
