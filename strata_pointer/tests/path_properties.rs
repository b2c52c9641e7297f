// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for pointer path differencing.

use std::collections::HashSet;

use kurbo::Point;
use proptest::prelude::*;
use strata_pointer::{PointerEventKind, PointerTracker, hit_chain};
use strata_region::{RegionId, RegionTree};
use strata_shape::Shape;

/// A 4x4 grid of cells on a 160x160 surface, each cell holding a smaller
/// inset child.
fn grid() -> (RegionTree<()>, RegionId) {
    let mut tree = RegionTree::new();
    let root = tree
        .create(Shape::rect(0.0, 0.0, 160.0, 160.0), (), None)
        .unwrap();
    for row in 0..4 {
        for col in 0..4 {
            let cell = tree
                .add_region(
                    root,
                    Shape::rect(f64::from(col) * 40.0, f64::from(row) * 40.0, 40.0, 40.0),
                    (),
                    None,
                )
                .unwrap();
            tree.add_region(cell, Shape::rect(10.0, 10.0, 20.0, 20.0), (), None)
                .unwrap();
        }
    }
    (tree, root)
}

fn position() -> impl Strategy<Value = Point> {
    (-20_i32..180, -20_i32..180).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

fn ids(chain: &[strata_region::HitEntry]) -> Vec<RegionId> {
    chain.iter().map(|e| e.region).collect()
}

fn rank(kind: PointerEventKind) -> u8 {
    match kind {
        PointerEventKind::Leave => 0,
        PointerEventKind::Enter => 1,
        PointerEventKind::Move => 2,
    }
}

proptest! {
    #[test]
    fn transitions_account_for_every_region(path in prop::collection::vec(position(), 1..16)) {
        let (tree, root) = grid();
        let mut tracker = PointerTracker::new();
        let mut before: Vec<RegionId> = Vec::new();

        for pt in path {
            let transitions = tracker.pointer_move(&tree, root, pt);
            let after = ids(&hit_chain(&tree, root, pt));
            prop_assert_eq!(ids(tracker.chain()), after.clone());

            let old: HashSet<_> = before.iter().copied().collect();
            let new: HashSet<_> = after.iter().copied().collect();
            let of = |kind| -> HashSet<RegionId> {
                transitions.iter().filter(|t| t.kind == kind).map(|t| t.region).collect()
            };
            let common: HashSet<_> = old.intersection(&new).copied().collect();
            prop_assert_eq!(of(PointerEventKind::Leave), old.difference(&new).copied().collect::<HashSet<_>>());
            prop_assert_eq!(of(PointerEventKind::Enter), new.difference(&old).copied().collect::<HashSet<_>>());
            prop_assert_eq!(of(PointerEventKind::Move), common);

            // Leaves come first, then enters, then moves.
            let order: Vec<_> = transitions.iter().map(|t| rank(t.kind)).collect();
            prop_assert!(order.is_sorted());
            before = after;
        }
    }
}
