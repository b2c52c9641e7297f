// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Shape`] sum type and its validation.

use core::fmt;
use core::hash::{Hash, Hasher};

use kurbo::{Circle, Point, Rect, Vec2};

/// Geometry of a region.
///
/// Coordinates are expressed in the frame of the region's parent. See the
/// crate docs for the containment and translation rules.
#[derive(Clone, Copy, Debug, Default)]
pub enum Shape {
    /// No geometry: contains nothing, and translation leaves it unchanged.
    #[default]
    Empty,
    /// Axis-aligned rectangle, half-open on its right and bottom edges.
    Rect(Rect),
    /// Closed disk.
    Circle(Circle),
}

impl Shape {
    /// Rectangle with top-left corner `(x, y)` and the given size.
    ///
    /// The size is not normalized: a negative width or height produces a
    /// shape that fails [`Shape::validate`].
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rect(Rect::new(x, y, x + width, y + height))
    }

    /// Circle centered on `(x, y)`.
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Circle(Circle::new((x, y), radius))
    }

    /// Returns `true` for [`Shape::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if `pt` lies inside the shape.
    pub fn contains_point(&self, pt: Point) -> bool {
        match self {
            Self::Empty => false,
            Self::Rect(r) => pt.x >= r.x0 && pt.x < r.x1 && pt.y >= r.y0 && pt.y < r.y1,
            Self::Circle(c) => {
                let d = pt - c.center;
                c.radius * c.radius >= d.x * d.x + d.y * d.y
            }
        }
    }

    /// Returns a copy of the shape translated by `offset`.
    ///
    /// Typically used to express a child's shape in an ancestor's frame.
    #[must_use]
    pub fn relate(&self, offset: Vec2) -> Self {
        match *self {
            Self::Empty => Self::Empty,
            Self::Rect(r) => Self::Rect(Rect::new(
                r.x0 + offset.x,
                r.y0 + offset.y,
                r.x1 + offset.x,
                r.y1 + offset.y,
            )),
            Self::Circle(c) => Self::Circle(Circle::new(c.center + offset, c.radius)),
        }
    }

    /// Converts `pt` (in the shape's frame) into the shape's local frame.
    pub fn local_point(&self, pt: Point) -> Point {
        (pt - self.origin()).to_point()
    }

    /// The origin of the shape's local frame.
    ///
    /// Top-left corner for rectangles, centre for circles, and zero for
    /// [`Shape::Empty`].
    pub fn origin(&self) -> Point {
        match self {
            Self::Empty => Point::ZERO,
            Self::Rect(r) => Point::new(r.x0, r.y0),
            Self::Circle(c) => c.center,
        }
    }

    /// Axis-aligned bounds, or `None` for [`Shape::Empty`].
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Self::Empty => None,
            Self::Rect(r) => Some(*r),
            Self::Circle(c) => Some(Rect::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.center.x + c.radius,
                c.center.y + c.radius,
            )),
        }
    }

    /// Checks that the shape is usable as region geometry.
    ///
    /// All coordinates must be finite, rectangles must have non-negative
    /// extents and circles a non-negative radius. [`Shape::Empty`] is always
    /// valid.
    pub fn validate(&self) -> Result<(), InvalidShape> {
        let reason = match self {
            Self::Empty => None,
            Self::Rect(r) => {
                if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
                    Some(InvalidShapeReason::NonFinite)
                } else if r.x1 < r.x0 || r.y1 < r.y0 {
                    Some(InvalidShapeReason::NegativeExtent)
                } else {
                    None
                }
            }
            Self::Circle(c) => {
                if ![c.center.x, c.center.y, c.radius].iter().all(|v| v.is_finite()) {
                    Some(InvalidShapeReason::NonFinite)
                } else if c.radius < 0.0 {
                    Some(InvalidShapeReason::NegativeRadius)
                } else {
                    None
                }
            }
        };
        match reason {
            Some(reason) => Err(InvalidShape {
                shape: *self,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Value hash used for identity caching.
    ///
    /// Equal shapes always produce equal hashes. `-0.0` and `0.0` are
    /// treated as the same coordinate.
    pub fn value_hash(&self) -> u64 {
        match self {
            Self::Empty => u64::MAX,
            Self::Rect(r) => fold(23, &[r.x0, r.y0, r.x1, r.y1]),
            Self::Circle(c) => fold(29, &[c.center.x, c.center.y, c.radius]),
        }
    }

    fn bits(&self) -> (u8, [u64; 4]) {
        match self {
            Self::Empty => (0, [0; 4]),
            Self::Rect(r) => (1, [bits(r.x0), bits(r.y0), bits(r.x1), bits(r.y1)]),
            Self::Circle(c) => (2, [bits(c.center.x), bits(c.center.y), bits(c.radius), 0]),
        }
    }
}

fn bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

fn fold(factor: u64, parts: &[f64]) -> u64 {
    parts
        .iter()
        .fold(17_u64, |acc, v| acc.wrapping_mul(factor) ^ bits(*v))
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

/// Why a shape was rejected by [`Shape::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidShapeReason {
    /// A coordinate or radius is NaN or infinite.
    NonFinite,
    /// A rectangle's far edge lies before its near edge.
    NegativeExtent,
    /// A circle has a negative radius.
    NegativeRadius,
}

/// Error returned when a shape cannot be used as region geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidShape {
    /// The rejected shape.
    pub shape: Shape,
    /// What is wrong with it.
    pub reason: InvalidShapeReason,
}

impl fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.reason {
            InvalidShapeReason::NonFinite => "non-finite coordinate",
            InvalidShapeReason::NegativeExtent => "negative extent",
            InvalidShapeReason::NegativeRadius => "negative radius",
        };
        write!(f, "invalid shape {:?}: {what}", self.shape)
    }
}

impl core::error::Error for InvalidShape {}
