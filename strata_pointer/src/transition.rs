// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use strata_region::RegionId;

/// Kind of a [`PointerTransition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// The pointer entered the region.
    Enter,
    /// The pointer left the region.
    Leave,
    /// The pointer moved while staying inside the region.
    Move,
}

/// A pointer notification addressed to one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTransition {
    /// What happened.
    pub kind: PointerEventKind,
    /// The region being notified.
    pub region: RegionId,
    /// Pointer position in the region's local frame.
    ///
    /// For [`PointerEventKind::Leave`] this is the last position observed
    /// while the pointer was still inside the region.
    pub location: Point,
}

impl PointerTransition {
    pub(crate) fn new(kind: PointerEventKind, region: RegionId, location: Point) -> Self {
        Self {
            kind,
            region,
            location,
        }
    }
}
