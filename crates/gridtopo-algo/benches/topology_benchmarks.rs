//! Topology query benchmarks.
//!
//! Measures construction, single-edge queries and the full N-1 sweep on
//! generated radial feeders with a fixed share of normally-open ties.
//!
//! ```bash
//! cargo bench -p gridtopo-algo
//! cargo bench -p gridtopo-algo -- n1_sweep
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridtopo_algo::{ContingencySweep, ContingencySweepConfig};
use gridtopo_core::{NetworkConfig, TopologyGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex counts, from a single LV feeder up to a small MV network
const VERTEX_COUNTS: &[usize] = &[25, 100, 400];

/// One normally-open tie per this many vertices
const TIE_SPACING: usize = 10;

fn radial_feeder(vertex_count: usize) -> NetworkConfig {
    let mut rng = StdRng::seed_from_u64(vertex_count as u64);
    let vertices: Vec<i64> = (0..vertex_count as i64).collect();
    let mut pairs: Vec<(i64, i64)> = (1..vertex_count)
        .map(|i| (rng.gen_range(0..i) as i64, i as i64))
        .collect();
    let mut enabled = vec![true; pairs.len()];
    for _ in 0..vertex_count / TIE_SPACING {
        pairs.push((
            rng.gen_range(0..vertex_count) as i64,
            rng.gen_range(0..vertex_count) as i64,
        ));
        enabled.push(false);
    }
    let offset = vertex_count as i64;
    let edge_ids: Vec<i64> = (0..pairs.len() as i64).map(|i| offset + i).collect();
    NetworkConfig::from_raw(&vertices, &edge_ids, &pairs, &enabled, 0)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for &n in VERTEX_COUNTS {
        let config = radial_feeder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| TopologyGraph::from_config(black_box(config.clone())).unwrap())
        });
    }
    group.finish();
}

fn bench_alternative_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternative_edges");
    for &n in VERTEX_COUNTS {
        let graph = TopologyGraph::from_config(radial_feeder(n)).unwrap();
        let edge = graph.enabled_edges()[n / 2];
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| graph.alternative_edges(black_box(edge)).unwrap())
        });
    }
    group.finish();
}

fn bench_n1_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("n1_sweep");
    group.sample_size(10);
    for &n in VERTEX_COUNTS {
        let graph = TopologyGraph::from_config(radial_feeder(n)).unwrap();
        for (label, config) in [
            ("serial", ContingencySweepConfig::default().serial()),
            ("parallel", ContingencySweepConfig::default()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &graph, |b, graph| {
                b.iter(|| ContingencySweep::new(graph, config.clone()).run().unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_alternative_edges,
    bench_n1_sweep
);
criterion_main!(benches);
