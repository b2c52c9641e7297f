// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Shape: immutable geometry for region trees.
//!
//! A [`Shape`] is the geometric half of a region: it answers whether a point
//! lies inside it, can be translated into another coordinate frame, and
//! converts points into its own local frame. Shapes are small `Copy` values;
//! replacing a region's geometry means replacing its shape.
//!
//! ## Variants
//!
//! - [`Shape::Rect`]: an axis-aligned rectangle. Containment is half-open,
//!   `[x0, x1) × [y0, y1)`, so two rectangles sharing an edge never both
//!   claim a point on it.
//! - [`Shape::Circle`]: a closed disk.
//! - [`Shape::Empty`]: a placeholder for regions created before their
//!   geometry is known. It contains no points and is fixed under translation.
//!
//! ## Frames
//!
//! [`Shape::relate`] moves a shape by an offset (for example into its
//! parent's frame). [`Shape::local_point`] subtracts the shape's origin
//! (top-left corner for rectangles, centre for circles). For rectangles and
//! circles the two are inverses:
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use strata_shape::Shape;
//!
//! let s = Shape::rect(10.0, 20.0, 30.0, 40.0);
//! let d = Vec2::new(5.0, -5.0);
//! let p = Point::new(12.0, 22.0);
//! assert_eq!(s.relate(d).local_point(p + d), s.local_point(p));
//! assert_eq!(s.relate(d).contains_point(p + d), s.contains_point(p));
//! ```
//!
//! ## Overlap
//!
//! [`intersects`] is the pairwise overlap predicate used for repaint
//! scheduling, and [`DirtyArea`] batches dirty shapes so candidates can be
//! checked against everything invalidated since the last frame.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod intersect;
mod shape;

pub use damage::DirtyArea;
pub use intersect::intersects;
pub use shape::{InvalidShape, InvalidShapeReason, Shape};
