//! # Signature Validation Benchmarks
//!
//! | Operation | Scaling |
//! |-----------|---------|
//! | Aggregation | linear in signatures x layers |
//! | Report rendering | linear in audit nodes |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use sv_02_validation_report::{Aggregator, ReportChain, ReportConfig};
use sv_tests::fixtures::{two_layer_chain, wide_layer};

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sv-02-aggregation");
    group.measurement_time(Duration::from_secs(5));

    let aggregator = Aggregator::default();
    group.bench_function("two_layer_chain", |b| {
        let chain = two_layer_chain();
        b.iter(|| black_box(aggregator.aggregate(chain.layers())))
    });

    for signatures in [1, 10, 100, 1000] {
        let chain = ReportChain::new(vec![wide_layer(signatures, 1), wide_layer(signatures, 0)]);
        group.throughput(Throughput::Elements(signatures as u64));
        group.bench_with_input(
            BenchmarkId::new("wide_chain", signatures),
            &chain,
            |b, chain| b.iter(|| black_box(aggregator.aggregate(chain.layers()))),
        );
    }

    group.finish();
}

/// The XML report is rendered when the result is frozen, so each
/// configuration is measured through a full aggregation.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("sv-02-rendering");
    group.measurement_time(Duration::from_secs(5));

    let chain = ReportChain::single(wide_layer(100, 3));
    let compact = Aggregator::default();
    let pretty = Aggregator::new(ReportConfig::default().with_indent(Some(2)))
        .unwrap_or_else(|e| panic!("indent 2 is a valid configuration: {e}"));

    group.bench_function("compact_100_signatures", |b| {
        b.iter(|| black_box(compact.aggregate(chain.layers())))
    });
    group.bench_function("pretty_100_signatures", |b| {
        b.iter(|| black_box(pretty.aggregate(chain.layers())))
    });

    group.finish();
}

criterion_group!(benches, bench_aggregation, bench_rendering);
criterion_main!(benches);
