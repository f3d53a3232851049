use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stationnet::StationNetwork;

// side x side grid with unit-ish weights that vary by position
fn build_grid(side: usize) -> StationNetwork {
    let mut network = StationNetwork::new();
    let id = |row: usize, col: usize| format!("S{row:04}_{col:04}");

    for row in 0..side {
        for col in 0..side {
            network
                .add_station(id(row, col), format!("Station {row}/{col}"), "", 1000)
                .unwrap();
        }
    }

    for row in 0..side {
        for col in 0..side {
            let weight = 1.0 + ((row * 7 + col * 13) % 10) as f64 / 10.0;
            if col + 1 < side {
                network
                    .add_connection(&id(row, col), &id(row, col + 1), weight)
                    .unwrap();
            }
            if row + 1 < side {
                network
                    .add_connection(&id(row, col), &id(row + 1, col), weight)
                    .unwrap();
            }
        }
    }

    network
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for side in [10, 30, 60].iter() {
        let network = build_grid(*side);
        let target = format!("S{:04}_{:04}", side - 1, side - 1);

        group.bench_with_input(BenchmarkId::new("corner_to_corner", side * side), side, |b, _| {
            b.iter(|| {
                black_box(network.find_shortest_path("S0000_0000", &target));
            });
        });
    }

    group.finish();
}

fn bench_radius_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_search");
    let network = build_grid(60);

    for radius in [5.0, 15.0, 40.0].iter() {
        group.bench_with_input(BenchmarkId::new("first_reached", radius), radius, |b, &r| {
            b.iter(|| {
                black_box(network.find_nearest_stations("S0030_0030", r));
            });
        });

        group.bench_with_input(BenchmarkId::new("shortest_distance", radius), radius, |b, &r| {
            b.iter(|| {
                black_box(network.find_nearest_stations_exact("S0030_0030", r));
            });
        });
    }

    group.finish();
}

fn bench_network_stats(c: &mut Criterion) {
    let network = build_grid(60);
    c.bench_function("network_stats", |b| {
        b.iter(|| black_box(network.get_network_stats()));
    });
}

criterion_group!(
    benches,
    bench_shortest_path,
    bench_radius_search,
    bench_network_stats
);
criterion_main!(benches);
