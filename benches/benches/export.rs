// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_markup_benches::document;
use understory_markup_render::Compositor;

fn bench_preview_vs_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    let compositor = Compositor::default();
    for count in [12usize, 60] {
        let doc = document(640, 480, count, 5);
        group.bench_function(BenchmarkId::new("render", count), |b| {
            b.iter(|| black_box(compositor.render(&doc, 1.0)));
        });
        group.bench_function(BenchmarkId::new("export_final", count), |b| {
            b.iter(|| black_box(compositor.export_final(&doc, 1.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_preview_vs_export);
criterion_main!(benches);
