// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for region tree hit testing, reordering and paint traversal.
//!
//! The tree is a deterministic synthetic layout: a surface holding a grid of
//! overlapping panels, each with a column of rows and a circular badge.

use core::time::Duration;
use criterion::measurement::WallTime;
use criterion::{
    BatchSize, BenchmarkGroup, BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use strata_region::{RegionId, RegionTree};
use strata_shape::Shape;

#[derive(Clone, Copy, Debug, Default)]
struct BuildStats {
    regions: usize,
    max_depth: usize,
}

fn build(
    panels_per_side: u32,
    rows_per_panel: u32,
) -> (RegionTree<u32>, RegionId, Vec<RegionId>, BuildStats) {
    let mut stats = BuildStats::default();
    let mut tree = RegionTree::new();
    let root = tree
        .create(Shape::rect(0.0, 0.0, 1200.0, 800.0), 0, None)
        .expect("valid root shape");
    let mut panels = Vec::new();
    let w = 1200.0 / f64::from(panels_per_side);
    let h = 800.0 / f64::from(panels_per_side);
    for iy in 0..panels_per_side {
        for ix in 0..panels_per_side {
            // Panels overlap their right and bottom neighbours by a quarter.
            let panel = tree
                .add_region(
                    root,
                    Shape::rect(f64::from(ix) * w, f64::from(iy) * h, w * 1.25, h * 1.25),
                    ix + iy,
                    None,
                )
                .expect("valid panel shape");
            let row_h = h / f64::from(rows_per_panel);
            for r in 0..rows_per_panel {
                tree.add_region(
                    panel,
                    Shape::rect(4.0, f64::from(r) * row_h, w - 8.0, row_h),
                    r,
                    None,
                )
                .expect("valid row shape");
            }
            tree.add_region(panel, Shape::circle(w - 12.0, 12.0, 8.0), 0, None)
                .expect("valid badge shape");
            panels.push(panel);
        }
    }
    stats.regions = tree.len();
    stats.max_depth = tree
        .paint_order(root)
        .iter()
        .map(|p| p.depth)
        .max()
        .unwrap_or(0);
    (tree, root, panels, stats)
}

fn points() -> Vec<Point> {
    let mut out = Vec::new();
    for iy in 0..=8 {
        for ix in 0..=12 {
            out.push(Point::new(f64::from(ix) * 100.0, f64::from(iy) * 100.0));
        }
    }
    out.extend([
        Point::new(0.0, 0.0),
        Point::new(1199.0, 0.0),
        Point::new(0.0, 799.0),
        Point::new(1199.0, 799.0),
        Point::new(600.0, 400.0),
    ]);
    out
}

fn bench_hit_test(g: &mut BenchmarkGroup<'_, WallTime>, name: &str, side: u32, rows: u32) {
    let (tree, root, _panels, _stats) = build(side, rows);
    let pts = points();

    g.bench_with_input(BenchmarkId::new("find_region_deep", name), &tree, |b, tree| {
        b.iter(|| {
            for &p in &pts {
                black_box(tree.find_region_by_xy(root, black_box(p), true));
            }
        });
    });
    g.bench_with_input(BenchmarkId::new("find_all_regions", name), &tree, |b, tree| {
        b.iter(|| {
            for &p in &pts {
                black_box(tree.find_all_regions_by_xy(root, black_box(p)));
            }
        });
    });
}

fn bench_reorder(g: &mut BenchmarkGroup<'_, WallTime>, name: &str, side: u32, rows: u32) {
    g.bench_with_input(BenchmarkId::new("bring_to_front", name), &name, |b, _| {
        b.iter_batched_ref(
            || {
                let (tree, root, _panels, _stats) = build(side, rows);
                (tree, root)
            },
            |(tree, root)| {
                let back = tree.children(*root)[0];
                black_box(tree.bring_to_front(*root, back)).ok();
            },
            BatchSize::LargeInput,
        );
    });

    let (mut tree, root, panels, _stats) = build(side, rows);
    let middle = panels[panels.len() / 2];
    g.bench_with_input(BenchmarkId::new("move_after_cycle", name), &name, |b, _| {
        b.iter(|| {
            let front = *tree.children(root).last().unwrap_or(&middle);
            black_box(tree.move_after(root, front, middle)).ok();
            black_box(tree.send_to_back(root, middle)).ok();
        });
    });
}

fn bench_paint_order(g: &mut BenchmarkGroup<'_, WallTime>, name: &str, side: u32, rows: u32) {
    let (tree, root, _panels, stats) = build(side, rows);
    assert_eq!(tree.paint_order(root).len(), stats.regions);
    assert_eq!(stats.max_depth, 2);
    g.bench_with_input(BenchmarkId::new("paint_order", name), &tree, |b, tree| {
        b.iter(|| black_box(tree.paint_order(root)));
    });
}

fn region_tree(c: &mut Criterion) {
    let mut g = c.benchmark_group("region_tree");
    g.warm_up_time(Duration::from_secs(1));
    g.measurement_time(Duration::from_secs(3));

    for (name, side, rows) in [("small_4x4x4", 4, 4), ("large_12x12x16", 12, 16)] {
        bench_hit_test(&mut g, name, side, rows);
        bench_reorder(&mut g, name, side, rows);
        bench_paint_order(&mut g, name, side, rows);
    }

    g.finish();
}

criterion_group!(benches, region_tree);
criterion_main!(benches);
