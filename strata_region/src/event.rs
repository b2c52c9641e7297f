// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutation notifications.

use alloc::boxed::Box;

use strata_shape::Shape;

use crate::RegionId;

/// Callback installed on a region to observe its mutations.
pub type RegionHandler = Box<dyn FnMut(&RegionEvent)>;

/// A mutation observed by a region's [`RegionHandler`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEvent {
    /// A child was appended to `parent`.
    RegionAdded {
        /// The region whose child list changed.
        parent: RegionId,
        /// The new child.
        region: RegionId,
    },
    /// A child was detached from `parent`.
    RegionRemoved {
        /// The region whose child list changed.
        parent: RegionId,
        /// The detached child.
        region: RegionId,
    },
    /// The region's shape was replaced.
    ShapeChanged {
        /// The updated region.
        region: RegionId,
        /// The new shape.
        shape: Shape,
    },
}

impl RegionEvent {
    /// Event name as used by embedders that key handlers by string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegionAdded { .. } => "regionAdded",
            Self::RegionRemoved { .. } => "regionRemoved",
            Self::ShapeChanged { .. } => "shapeChanged",
        }
    }
}
