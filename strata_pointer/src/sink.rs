// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use strata_region::RegionTree;

use crate::transition::{PointerEventKind, PointerTransition};

/// Payloads that react to the pointer.
///
/// All methods default to doing nothing. `location` is in the region's
/// local frame.
pub trait PointerSink {
    /// The pointer entered the region.
    fn pointer_enter(&mut self, location: Point) {
        let _ = location;
    }

    /// The pointer left the region.
    fn pointer_leave(&mut self, location: Point) {
        let _ = location;
    }

    /// The pointer moved inside the region.
    fn pointer_move(&mut self, location: Point) {
        let _ = location;
    }
}

/// Route `transitions` to the payloads of their regions, in order.
///
/// Transitions addressed to regions that are no longer in `tree` are
/// skipped.
pub fn deliver<D: PointerSink>(tree: &mut RegionTree<D>, transitions: &[PointerTransition]) {
    for t in transitions {
        let Some(sink) = tree.data_mut(t.region) else {
            continue;
        };
        match t.kind {
            PointerEventKind::Enter => sink.pointer_enter(t.location),
            PointerEventKind::Leave => sink.pointer_leave(t.location),
            PointerEventKind::Move => sink.pointer_move(t.location),
        }
    }
}
