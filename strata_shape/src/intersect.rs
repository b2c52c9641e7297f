// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise shape overlap.

use kurbo::{Circle, Point, Rect};

use crate::Shape;

/// Returns `true` if the two shapes overlap.
///
/// - Rectangles overlap when their interiors do; touching edges do not count,
///   matching the half-open containment rule.
/// - Circles overlap when the distance between centres is at most the sum of
///   the radii.
/// - A rectangle and a circle overlap when the point of the rectangle nearest
///   to the centre lies within the radius.
///
/// [`Shape::Empty`] overlaps nothing, including itself.
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Empty, _) | (_, Shape::Empty) => false,
        (Shape::Rect(a), Shape::Rect(b)) => rects_overlap(a, b),
        (Shape::Circle(a), Shape::Circle(b)) => circles_overlap(a, b),
        (Shape::Rect(r), Shape::Circle(c)) | (Shape::Circle(c), Shape::Rect(r)) => {
            rect_circle_overlap(r, c)
        }
    }
}

fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let d = a.center - b.center;
    let reach = a.radius + b.radius;
    d.x * d.x + d.y * d.y <= reach * reach
}

fn rect_circle_overlap(r: &Rect, c: &Circle) -> bool {
    let nearest = Point::new(c.center.x.clamp(r.x0, r.x1), c.center.y.clamp(r.y0, r.y1));
    let d = c.center - nearest;
    d.x * d.x + d.y * d.y <= c.radius * c.radius
}
