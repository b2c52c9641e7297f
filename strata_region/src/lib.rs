// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Region: a tree of nested shapes with z-order and hit testing.
//!
//! A drawing surface is described by one root region whose children, and
//! their children in turn, partition the surface into interactive areas.
//! Each region pairs a [`Shape`](strata_shape::Shape) with an opaque payload
//! owned by the embedder (typically a widget).
//!
//! - [`RegionTree`] owns every region and is the single source of truth for
//!   structure and order.
//! - [`RegionId`] is a process-wide, monotonically increasing identifier; ids
//!   are never reused.
//! - Child order is z-order: later children are in front of earlier ones.
//!
//! ## Frames
//!
//! A child's shape is expressed in its parent's local frame, that is relative
//! to the parent shape's [origin](strata_shape::Shape::origin). Points given
//! to [`RegionTree::find_region_by_xy`] and
//! [`RegionTree::find_all_regions_by_xy`] are expressed in the local frame of
//! the region being searched.
//!
//! ## Ownership
//!
//! A region owns its children. [`RegionTree::remove_region`] detaches a
//! child from its parent but keeps the child's own subtree intact, so the
//! detached region can be inspected or re-used as a root.
//! [`RegionTree::destroy`] frees a region; its children become detached roots.
//!
//! ## Notifications
//!
//! A region may carry a [`RegionHandler`]. It receives
//! [`RegionEvent::RegionAdded`] and [`RegionEvent::RegionRemoved`] for changes
//! to the region's children and [`RegionEvent::ShapeChanged`] when its own
//! shape is replaced. Handlers run synchronously, after the mutation has been
//! applied and before the mutating call returns.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use strata_region::RegionTree;
//! use strata_shape::Shape;
//!
//! let mut tree = RegionTree::new();
//! let root = tree.create(Shape::rect(0.0, 0.0, 800.0, 600.0), "root", None).unwrap();
//! let a = tree.add_region(root, Shape::rect(0.0, 0.0, 50.0, 50.0), "a", None).unwrap();
//! let b = tree.add_region(root, Shape::rect(25.0, 25.0, 50.0, 50.0), "b", None).unwrap();
//!
//! // `b` was added last, so it is in front where the two overlap.
//! assert_eq!(tree.find_region_by_xy(root, Point::new(30.0, 30.0), false), Some(b));
//! assert_eq!(tree.find_region_by_xy(root, Point::new(10.0, 10.0), false), Some(a));
//!
//! tree.bring_to_front(root, a).unwrap();
//! assert_eq!(tree.find_region_by_xy(root, Point::new(30.0, 30.0), false), Some(a));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit structural and ordering changes as `tracing` events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod event;
mod logging;
mod tree;
mod types;

pub use error::RegionError;
pub use event::{RegionEvent, RegionHandler};
pub use tree::RegionTree;
pub use types::{HitEntry, PaintItem, RegionId, RegionUpdate};
