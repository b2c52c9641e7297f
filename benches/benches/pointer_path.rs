// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for pointer path differencing over a nested layout.

use core::time::Duration;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use strata_pointer::{PointerTracker, hit_chain};
use strata_region::{RegionId, RegionTree};
use strata_shape::Shape;

/// A surface with `depth` levels of nested, inset rectangles in each of
/// four quadrants.
fn nested(depth: u32) -> (RegionTree<()>, RegionId) {
    let mut tree = RegionTree::new();
    let root = tree
        .create(Shape::rect(0.0, 0.0, 1024.0, 1024.0), (), None)
        .expect("valid root shape");
    for q in 0..4_u32 {
        let mut size = 512.0;
        let mut parent = tree
            .add_region(
                root,
                Shape::rect(f64::from(q % 2) * 512.0, f64::from(q / 2) * 512.0, size, size),
                (),
                None,
            )
            .expect("valid quadrant shape");
        for _ in 1..depth {
            size -= 16.0;
            parent = tree
                .add_region(parent, Shape::rect(8.0, 8.0, size, size), (), None)
                .expect("valid nested shape");
        }
    }
    (tree, root)
}

/// A diagonal sweep that crosses every quadrant boundary and the surface edge.
fn sweep() -> Vec<Point> {
    (0..=64)
        .map(|i| {
            let t = f64::from(i) * 17.0 - 8.0;
            Point::new(t, 1040.0 - t)
        })
        .collect()
}

fn pointer_path(c: &mut Criterion) {
    let mut g = c.benchmark_group("pointer_path");
    g.warm_up_time(Duration::from_secs(1));
    g.measurement_time(Duration::from_secs(3));

    let pts = sweep();
    for depth in [2_u32, 8, 24] {
        let (tree, root) = nested(depth);

        g.bench_with_input(BenchmarkId::new("hit_chain", depth), &tree, |b, tree| {
            b.iter(|| {
                for &p in &pts {
                    black_box(hit_chain(tree, root, black_box(p)));
                }
            });
        });

        g.bench_with_input(BenchmarkId::new("sweep", depth), &tree, |b, tree| {
            let mut tracker = PointerTracker::new();
            b.iter(|| {
                for &p in &pts {
                    black_box(tracker.pointer_move(tree, root, black_box(p)));
                }
                black_box(tracker.pointer_leave());
            });
        });
    }

    g.finish();
}

criterion_group!(benches, pointer_path);
criterion_main!(benches);
