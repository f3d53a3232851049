//! Network traversal algorithms.
//!
//! Provides Dijkstra shortest paths and two flavours of radius search:
//! a breadth-first "first reached" expansion and a bounded Dijkstra.
//!
//! All functions here are read-only and fail softly: an unknown station or
//! an unreachable target yields an empty result rather than an error.

use super::station_network::StationNetwork;
use super::types::{NearbyStation, Route, StationId};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// Frontier entry for Dijkstra, ordered so that `BinaryHeap` pops the
/// smallest distance first. Equal distances fall back to the station ID.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<'a> {
    distance: f64,
    station: &'a str,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.station.cmp(self.station))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// State left behind by a Dijkstra run.
struct DijkstraSearch<'a> {
    distances: HashMap<&'a str, f64>,
    previous: HashMap<&'a str, &'a str>,
    /// Stations in the order they were finalized
    settled: Vec<&'a str>,
}

/// Dijkstra from `source`, stopping early once `target` is settled and never
/// pushing stations farther than `bound`.
///
/// `source` must be a station of `network`.
fn dijkstra<'a>(
    network: &'a StationNetwork,
    source: &'a str,
    target: Option<&str>,
    bound: Option<f64>,
) -> DijkstraSearch<'a> {
    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut settled = Vec::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(source, 0.0);
    frontier.push(FrontierEntry {
        distance: 0.0,
        station: source,
    });

    while let Some(FrontierEntry { distance, station }) = frontier.pop() {
        // A station can sit in the heap several times; only the first pop counts
        if !visited.insert(station) {
            trace!("Skipping stale frontier entry for {station} ({distance})");
            continue;
        }
        settled.push(station);

        if target == Some(station) {
            trace!("Target {station} settled at {distance}");
            break;
        }

        let Some(neighbors) = network.neighbors(station) else {
            continue;
        };

        for (neighbor, weight) in neighbors {
            let neighbor = neighbor.as_str();
            let candidate = distance + weight;
            if bound.is_some_and(|max| candidate > max) {
                continue;
            }

            let best = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                trace!("Relaxing {neighbor}: {best} -> {candidate} via {station}");
                distances.insert(neighbor, candidate);
                previous.insert(neighbor, station);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    station: neighbor,
                });
            }
        }
    }

    DijkstraSearch {
        distances,
        previous,
        settled,
    }
}

/// Resolve a caller-supplied ID to the key stored in the network, so the
/// search can borrow station IDs for the network's lifetime.
fn station_key<'a>(network: &'a StationNetwork, id: &str) -> Option<&'a str> {
    network
        .get_station(id)
        .map(|station| station.id.as_str())
}

/// Find the shortest path between two stations using Dijkstra's algorithm.
///
/// # Parameters
/// - `network`: The network to search
/// - `source`: Starting station ID
/// - `target`: Destination station ID
///
/// # Returns
/// Station IDs from `source` to `target` inclusive. `[source]` when the two
/// are the same station; empty when either station is unknown or the target
/// cannot be reached.
///
/// Among several equally short paths, which one is returned is not part of
/// the contract.
pub fn shortest_path(network: &StationNetwork, source: &str, target: &str) -> Vec<StationId> {
    shortest_route(network, source, target)
        .map(|route| route.stations)
        .unwrap_or_default()
}

/// Like [`shortest_path`], but also reports the total distance.
///
/// Returns `None` when either station is unknown or no path exists.
pub fn shortest_route(network: &StationNetwork, source: &str, target: &str) -> Option<Route> {
    let (Some(source), Some(target)) = (station_key(network, source), station_key(network, target))
    else {
        debug!("Shortest path requested for unknown station(s): {source} -> {target}");
        return None;
    };

    let search = dijkstra(network, source, Some(target), None);

    let mut path = VecDeque::new();
    let mut current = Some(target);
    while let Some(station) = current {
        path.push_front(station.to_string());
        current = search.previous.get(station).copied();
    }

    if path.front().map(String::as_str) != Some(source) {
        debug!("No path from {source} to {target}");
        return None;
    }

    let total_distance = search.distances.get(target).copied()?;
    Some(Route {
        stations: path.into(),
        total_distance,
    })
}

/// Find stations within `max_distance` of `source` by breadth-first expansion.
///
/// A station is marked visited the first time it is enqueued and keeps the
/// cumulative distance of that first path, even if a shorter route is
/// discovered later. A station reachable only through such a route can
/// therefore be missed. Use [`nearest_stations_exact`] when true shortest
/// distances are required.
///
/// # Returns
/// Stations in visitation (FIFO) order, excluding `source`. Empty when
/// `source` is unknown.
pub fn nearest_stations(
    network: &StationNetwork,
    source: &str,
    max_distance: f64,
) -> Vec<NearbyStation> {
    let Some(source) = station_key(network, source) else {
        debug!("Radius search from unknown station {source}");
        return Vec::new();
    };

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(source);
    queue.push_back((source, 0.0_f64));

    while let Some((current, distance)) = queue.pop_front() {
        if current != source && distance <= max_distance {
            result.push(NearbyStation {
                station_id: current.to_string(),
                distance,
            });
        }

        let Some(neighbors) = network.neighbors(current) else {
            continue;
        };

        for (neighbor, weight) in neighbors {
            let neighbor = neighbor.as_str();
            let candidate = distance + weight;
            if !visited.contains(neighbor) && candidate <= max_distance {
                visited.insert(neighbor);
                queue.push_back((neighbor, candidate));
            }
        }
    }

    debug!(
        "Radius search from {source} within {max_distance}: {} station(s)",
        result.len()
    );
    result
}

/// Find stations whose shortest distance from `source` is within
/// `max_distance`, using Dijkstra bounded by the radius.
///
/// # Returns
/// Stations in ascending distance order, excluding `source`. Empty when
/// `source` is unknown.
pub fn nearest_stations_exact(
    network: &StationNetwork,
    source: &str,
    max_distance: f64,
) -> Vec<NearbyStation> {
    let Some(source) = station_key(network, source) else {
        debug!("Radius search from unknown station {source}");
        return Vec::new();
    };

    let search = dijkstra(network, source, None, Some(max_distance));
    search
        .settled
        .into_iter()
        .filter(|station| *station != source)
        .filter_map(|station| {
            search.distances.get(station).map(|&distance| NearbyStation {
                station_id: station.to_string(),
                distance,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(weights: &[f64]) -> StationNetwork {
        let mut network = StationNetwork::new();
        for i in 0..=weights.len() {
            network
                .add_station(format!("S{i}"), format!("Station {i}"), "", 100)
                .unwrap();
        }
        for (i, weight) in weights.iter().enumerate() {
            network
                .add_connection(&format!("S{i}"), &format!("S{}", i + 1), *weight)
                .unwrap();
        }
        network
    }

    #[test]
    fn test_frontier_pops_smallest_distance() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { distance: 3.0, station: "c" });
        heap.push(FrontierEntry { distance: 1.0, station: "a" });
        heap.push(FrontierEntry { distance: 2.0, station: "b" });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.station).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_shortest_path_along_line() {
        let network = line(&[1.0, 2.0, 3.0]);
        let route = shortest_route(&network, "S0", "S3").unwrap();
        assert_eq!(route.stations, vec!["S0", "S1", "S2", "S3"]);
        assert!((route.total_distance - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_shortest_path_to_self() {
        let network = line(&[1.0]);
        let route = shortest_route(&network, "S1", "S1").unwrap();
        assert_eq!(route.stations, vec!["S1"]);
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn test_bfs_radius_stops_at_bound() {
        let network = line(&[1.0, 1.0, 1.0]);
        let result = nearest_stations(&network, "S0", 2.0);
        let ids: Vec<_> = result.iter().map(|n| n.station_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2"]);
    }

    #[test]
    fn test_exact_radius_sorted_by_distance() {
        let network = line(&[0.5, 0.5, 5.0]);
        let result = nearest_stations_exact(&network, "S1", 10.0);
        let distances: Vec<_> = result.iter().map(|n| n.distance).collect();
        assert_eq!(distances, vec![0.5, 0.5, 5.5]);
    }
}
