// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_markup_benches::{Lcg, document};
use understory_selection::pick;

fn bench_topmost_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing/topmost_at");
    for count in [64usize, 512, 4_096] {
        let doc = document(1920, 1080, count, 7);
        let mut rng = Lcg::new(11);
        let probes: Vec<_> = (0..256)
            .map(|_| kurbo::Point::new(rng.next_f64(1920.0), rng.next_f64(1080.0)))
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &probes, |b, probes| {
            b.iter(|| {
                for p in probes {
                    black_box(pick::topmost_at(doc.annotations(), *p));
                }
            });
        });
    }
    group.finish();
}

fn bench_marquee(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing/intersecting");
    let marquee = Rect::new(400.0, 300.0, 1200.0, 800.0);
    for count in [64usize, 512, 4_096] {
        let doc = document(1920, 1080, count, 7);
        let items = doc.annotations();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| black_box(pick::intersecting(items, black_box(marquee))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_topmost_at, bench_marquee);
criterion_main!(benches);
