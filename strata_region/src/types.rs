// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region tree: identifiers, hit entries and updates.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use kurbo::Point;
use strata_shape::Shape;

use crate::event::{RegionEvent, RegionHandler};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a region.
///
/// Ids are allocated from a single process-wide counter when a region is
/// created. They increase monotonically, are never reused and never change,
/// so an id is the region's identity for its whole lifetime, in any tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(u64);

impl RegionId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One step of a hit chain produced by
/// [`RegionTree::find_all_regions_by_xy`](crate::RegionTree::find_all_regions_by_xy).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitEntry {
    /// The region that was hit.
    pub region: RegionId,
    /// The hit point in the frame the region's shape is expressed in (its
    /// parent's local frame). For the first entry of a chain this is the
    /// point originally queried.
    pub location: Point,
    /// The same point in the region's own local frame.
    pub local: Point,
}

/// A region visited by [`RegionTree::paint_order`](crate::RegionTree::paint_order).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaintItem {
    /// The region to paint.
    pub region: RegionId,
    /// The region's shape related into the frame of the traversal root.
    pub shape: Shape,
    /// Distance from the traversal root (the root itself is `0`).
    pub depth: usize,
}

/// A partial update applied by [`RegionTree::update`](crate::RegionTree::update).
///
/// Fields that are not set are left unchanged. Setting `data` always replaces
/// the payload, even when the new value is "empty" (for example `None` for an
/// `Option` payload); only leaving it unset is a no-op.
///
/// ```
/// use strata_region::RegionUpdate;
/// use strata_shape::Shape;
///
/// let update: RegionUpdate<Option<u32>> = RegionUpdate::new()
///     .shape(Shape::rect(0.0, 0.0, 10.0, 10.0))
///     .data(None);
/// assert!(!update.is_empty());
/// assert!(RegionUpdate::<u32>::new().is_empty());
/// ```
pub struct RegionUpdate<D> {
    pub(crate) shape: Option<Shape>,
    pub(crate) data: Option<D>,
    pub(crate) handler: Option<RegionHandler>,
}

impl<D> RegionUpdate<D> {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self {
            shape: None,
            data: None,
            handler: None,
        }
    }

    /// Replace the region's shape.
    #[must_use]
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Replace the region's payload.
    #[must_use]
    pub fn data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// Replace the region's mutation handler.
    #[must_use]
    pub fn handler(mut self, handler: impl FnMut(&RegionEvent) + 'static) -> Self {
        self.handler = Some(alloc::boxed::Box::new(handler));
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.shape.is_none() && self.data.is_none() && self.handler.is_none()
    }
}

impl<D> Default for RegionUpdate<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: fmt::Debug> fmt::Debug for RegionUpdate<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionUpdate")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_monotonically() {
        let a = RegionId::next();
        let b = RegionId::next();
        assert!(b > a);
        assert!(b.get() > a.get());
    }

    #[test]
    fn display_uses_hash_prefix() {
        let id = RegionId(42);
        assert_eq!(alloc::format!("{id}"), "#42");
    }
}
