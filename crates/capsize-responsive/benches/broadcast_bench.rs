//! Benchmarks for responsive broadcasting.
//!
//! Run with: cargo bench -p capsize-responsive --bench broadcast_bench
//!
//! Workloads:
//! - **Typical**: a handful of breakpoints, one spacing repeated.
//! - **Wide**: many breakpoints with matching spacing arrays.
//! - **Padded**: long spacing array under `Alignment::Longest`.

use capsize_core::FontMetrics;
use capsize_responsive::{Alignment, Broadcaster, ResponsiveOptions, broadcast};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const METRICS: FontMetrics = FontMetrics::new(1456.0, 1900.0, -500.0, 0.0, 2048.0);

fn sizes(n: usize) -> Vec<f64> {
    (0..n).map(|i| 12.0 + i as f64 * 2.0).collect()
}

fn bench_broadcast_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast_iter");
    for n in [4usize, 64, 1024] {
        let axis = sizes(n);
        let spacing = vec![8.0];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                broadcast(black_box(&axis), black_box(&spacing), Alignment::Axis)
                    .map(|(a, s)| a + s.unwrap_or_default())
                    .sum::<f64>()
            });
        });
    }
    group.finish();
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    let typical =
        ResponsiveOptions::cap_height_with_line_gap([12.0, 16.0, 24.0, 32.0], [8.0], METRICS);
    group.bench_function("typical", |b| {
        let broadcaster = Broadcaster::new();
        b.iter(|| broadcaster.compute(black_box(&typical)));
    });

    let wide = ResponsiveOptions::font_size_with_leading(sizes(256), sizes(256), METRICS);
    group.bench_function("wide", |b| {
        let broadcaster = Broadcaster::new();
        b.iter(|| broadcaster.compute(black_box(&wide)));
    });

    let padded = ResponsiveOptions::font_size_with_line_gap([16.0], sizes(256), METRICS);
    group.bench_function("padded_longest", |b| {
        let broadcaster = Broadcaster::new().alignment(Alignment::Longest);
        b.iter(|| broadcaster.compute(black_box(&padded)));
    });

    group.finish();
}

criterion_group!(benches, bench_broadcast_iter, bench_compute);
criterion_main!(benches);
