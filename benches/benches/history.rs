// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use peniko::Color;
use understory_annotation::{Annotation, Counter};
use understory_markup_benches::document;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/add");
    // Each step snapshots the whole collection, so cost grows with document size.
    for count in [16usize, 256, 2_048] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || document(800, 600, count, 3),
                |mut doc| {
                    doc.add(Annotation::new(Counter::new(
                        1,
                        Point::new(10.0, 10.0),
                        Color::BLACK,
                        20.0,
                    )));
                    black_box(doc);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/undo_redo");
    for count in [16usize, 256, 2_048] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || document(800, 600, count, 3),
                |mut doc| {
                    doc.undo();
                    doc.redo();
                    black_box(doc);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_undo_redo);
criterion_main!(benches);
