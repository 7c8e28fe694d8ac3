mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spatial_bernoulli::compare::compare;
use spatial_bernoulli::network::{build_network, NetworkConfig};
use spatial_bernoulli::points::PointPatternKind;
use spatial_bernoulli::sampling::sample_points;
use spatial_bernoulli::sif::SpatialInteraction;

const NODE_COUNTS: [usize; 3] = [100, 400, 1_000];

fn network_build_benches(c: &mut Criterion) {
    let boundary = common::square_boundary(20.0);

    for sif in SpatialInteraction::ALL {
        let mut group = c.benchmark_group(format!("network/build/{sif}"));
        let config = NetworkConfig::new(sif).with_threshold(0.1);

        for &n in &NODE_COUNTS {
            let points = sample_points(boundary.clone(), n, PointPatternKind::Poisson, Some(n as u64))
                .expect("sample points");
            group.throughput(common::elements_throughput(n * n));

            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| {
                    let net = build_network(&points, &config).expect("build network");
                    black_box(net.edge_count());
                });
            });
        }

        group.finish();
    }
}

fn network_compare_benches(c: &mut Criterion) {
    let boundary = common::square_boundary(20.0);
    let config = NetworkConfig::default().with_threshold(0.1);
    let mut group = c.benchmark_group("network/compare");

    for &n in &NODE_COUNTS {
        let poisson = sample_points(boundary.clone(), n, PointPatternKind::Poisson, Some(7))
            .expect("sample points");
        let halton = sample_points(boundary.clone(), n, PointPatternKind::Halton, Some(7))
            .expect("sample points");
        let a = build_network(&poisson, &config).expect("build network");
        let b = build_network(&halton, &config).expect("build network");
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                let report = compare(&a, &b, "poisson", "halton").expect("compare");
                black_box(report.values());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = network_build_benches, network_compare_benches
}
criterion_main!(benches);
