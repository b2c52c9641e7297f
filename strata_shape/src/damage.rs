// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-area accumulation for repaint scheduling.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::{Shape, intersects};

/// A batch of shapes invalidated since the last repaint.
///
/// `DirtyArea` is intentionally coarse: shapes may overlap and are not
/// merged. A repaint scheduler marks the old and new geometry of every region
/// that changed, then asks [`DirtyArea::affects`] for each candidate sibling
/// to decide whether it must be redrawn too.
///
/// ```
/// use strata_shape::{DirtyArea, Shape};
///
/// let mut dirty = DirtyArea::default();
/// dirty.mark(Shape::rect(0.0, 0.0, 50.0, 50.0));
///
/// assert!(dirty.affects(&Shape::rect(25.0, 25.0, 50.0, 50.0)));
/// assert!(!dirty.affects(&Shape::circle(100.0, 100.0, 10.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DirtyArea {
    shapes: Vec<Shape>,
}

impl DirtyArea {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape to the batch. [`Shape::Empty`] is ignored.
    pub fn mark(&mut self, shape: Shape) {
        if !shape.is_empty() {
            self.shapes.push(shape);
        }
    }

    /// Returns `true` if nothing has been marked.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes marked so far, in marking order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns `true` if `shape` overlaps any marked shape.
    pub fn affects(&self, shape: &Shape) -> bool {
        self.shapes.iter().any(|dirty| intersects(dirty, shape))
    }

    /// Returns the union of the bounding boxes of all marked shapes.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.shapes.iter().filter_map(Shape::bounding_box);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Removes and returns the marked shapes, leaving the batch empty.
    pub fn take(&mut self) -> Vec<Shape> {
        core::mem::take(&mut self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_area_affects_nothing() {
        let dirty = DirtyArea::new();
        assert!(dirty.is_empty());
        assert!(!dirty.affects(&Shape::rect(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(dirty.bounds(), None);
    }

    #[test]
    fn empty_shapes_are_not_recorded() {
        let mut dirty = DirtyArea::new();
        dirty.mark(Shape::Empty);
        assert!(dirty.is_empty());
    }

    #[test]
    fn bounds_cover_rects_and_circles() {
        let mut dirty = DirtyArea::new();
        dirty.mark(Shape::rect(0.0, 0.0, 10.0, 10.0));
        dirty.mark(Shape::circle(30.0, 30.0, 5.0));
        assert_eq!(dirty.bounds(), Some(Rect::new(0.0, 0.0, 35.0, 35.0)));
    }

    #[test]
    fn take_drains_the_batch() {
        let mut dirty = DirtyArea::new();
        dirty.mark(Shape::rect(0.0, 0.0, 10.0, 10.0));
        let shapes = dirty.take();
        assert_eq!(shapes.len(), 1);
        assert!(dirty.is_empty());
        assert!(!dirty.affects(&Shape::rect(0.0, 0.0, 10.0, 10.0)));
    }
}
