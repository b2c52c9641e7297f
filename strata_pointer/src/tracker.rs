// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/leave/move computation from successive hit chains.
//!
//! ## Usage
//!
//! 1) Keep one [`PointerTracker`] per surface.
//! 2) On every pointer move, call [`PointerTracker::pointer_move`] with the
//!    surface root and the pointer position in the root's frame.
//! 3) When the pointer leaves the surface, call
//!    [`PointerTracker::pointer_leave`].
//!
//! Use [`PointerTracker::handle_move`] and [`PointerTracker::handle_leave`]
//! to also deliver the transitions to payloads implementing
//! [`PointerSink`](crate::PointerSink).

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;
use strata_region::{HitEntry, RegionId, RegionTree};

use crate::logging::{debug, trace};
use crate::sink::{PointerSink, deliver};
use crate::transition::{PointerEventKind, PointerTransition};

/// Chains deeper than this spill to the heap.
const INLINE_DEPTH: usize = 8;

/// The chain of regions under `pt`, root first.
///
/// `pt` is in the frame `root`'s shape is expressed in. The chain is empty if
/// `root` is unknown or its shape does not contain `pt`; otherwise it starts
/// with an entry for `root` itself, followed by
/// [`RegionTree::find_all_regions_by_xy`] in the root's local frame.
pub fn hit_chain<D>(tree: &RegionTree<D>, root: RegionId, pt: Point) -> Vec<HitEntry> {
    let Some(shape) = tree.shape(root) else {
        return Vec::new();
    };
    if !shape.contains_point(pt) {
        return Vec::new();
    }
    let local = shape.local_point(pt);
    let mut chain = Vec::with_capacity(INLINE_DEPTH);
    chain.push(HitEntry {
        region: root,
        location: pt,
        local,
    });
    chain.extend(tree.find_all_regions_by_xy(root, local));
    chain
}

/// Remembers the regions under the pointer between events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    chain: SmallVec<[HitEntry; INLINE_DEPTH]>,
}

impl PointerTracker {
    /// Create a tracker with the pointer outside the surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The regions currently under the pointer, root first.
    pub fn chain(&self) -> &[HitEntry] {
        &self.chain
    }

    /// The deepest region currently under the pointer.
    pub fn hovered(&self) -> Option<RegionId> {
        self.chain.last().map(|e| e.region)
    }

    /// Returns `true` if `region` is currently under the pointer.
    pub fn is_hovered(&self, region: RegionId) -> bool {
        self.chain.iter().any(|e| e.region == region)
    }

    /// Compute the transitions caused by moving the pointer to `pt`.
    ///
    /// Emitted in this order:
    /// - `Leave` for regions no longer under the pointer, deepest first.
    /// - `Enter` for regions newly under the pointer, deepest first.
    /// - `Move` for regions that stayed under the pointer, deepest first, the
    ///   root last.
    ///
    /// If `root` does not contain `pt` this behaves like
    /// [`PointerTracker::pointer_leave`].
    pub fn pointer_move<D>(
        &mut self,
        tree: &RegionTree<D>,
        root: RegionId,
        pt: Point,
    ) -> Vec<PointerTransition> {
        let next = hit_chain(tree, root, pt);
        if next.is_empty() {
            return self.pointer_leave();
        }
        let common = self
            .chain
            .iter()
            .zip(&next)
            .take_while(|(old, new)| old.region == new.region)
            .count();

        let mut out = Vec::with_capacity(self.chain.len() + next.len());
        out.extend(
            self.chain[common..]
                .iter()
                .rev()
                .map(|e| PointerTransition::new(PointerEventKind::Leave, e.region, e.local)),
        );
        out.extend(
            next[common..]
                .iter()
                .rev()
                .map(|e| PointerTransition::new(PointerEventKind::Enter, e.region, e.local)),
        );
        out.extend(
            next[..common]
                .iter()
                .rev()
                .map(|e| PointerTransition::new(PointerEventKind::Move, e.region, e.local)),
        );
        trace!(
            depth = next.len(),
            common,
            transitions = out.len(),
            "pointer moved"
        );
        self.chain = SmallVec::from_vec(next);
        out
    }

    /// Leave every region under the pointer, deepest first.
    pub fn pointer_leave(&mut self) -> Vec<PointerTransition> {
        let out: Vec<_> = self
            .chain
            .drain(..)
            .rev()
            .map(|e| PointerTransition::new(PointerEventKind::Leave, e.region, e.local))
            .collect();
        if !out.is_empty() {
            debug!(left = out.len(), "pointer left surface");
        }
        out
    }

    /// [`PointerTracker::pointer_move`], then [`deliver`] the transitions.
    pub fn handle_move<D: PointerSink>(
        &mut self,
        tree: &mut RegionTree<D>,
        root: RegionId,
        pt: Point,
    ) -> Vec<PointerTransition> {
        let transitions = self.pointer_move(tree, root, pt);
        deliver(tree, &transitions);
        transitions
    }

    /// [`PointerTracker::pointer_leave`], then [`deliver`] the transitions.
    pub fn handle_leave<D: PointerSink>(
        &mut self,
        tree: &mut RegionTree<D>,
    ) -> Vec<PointerTransition> {
        let transitions = self.pointer_leave();
        deliver(tree, &transitions);
        transitions
    }
}
