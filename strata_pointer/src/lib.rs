// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Pointer: pointer tracking and click dispatch over a region tree.
//!
//! [`PointerTracker`] remembers which regions were under the pointer at the
//! previous event and, given a new position, computes the enter, leave and
//! move notifications needed to bring every region up to date:
//!
//! - Regions no longer under the pointer get `Leave`, deepest first.
//! - Regions newly under the pointer get `Enter`, deepest first.
//! - Regions that stayed under the pointer get `Move`, from the deepest common
//!   ancestor up to the root.
//!
//! The chain always starts with the root itself when its shape contains the
//! pointer, so the root receives `Enter` and `Leave` like any other region.
//!
//! ```
//! use kurbo::Point;
//! use strata_pointer::{PointerEventKind, PointerTracker};
//! use strata_region::RegionTree;
//! use strata_shape::Shape;
//!
//! let mut tree = RegionTree::new();
//! let root = tree.create(Shape::rect(0.0, 0.0, 100.0, 100.0), (), None).unwrap();
//! let a = tree.add_region(root, Shape::rect(0.0, 0.0, 40.0, 40.0), (), None).unwrap();
//! let b = tree.add_region(root, Shape::rect(60.0, 0.0, 40.0, 40.0), (), None).unwrap();
//!
//! let mut tracker = PointerTracker::new();
//! tracker.pointer_move(&tree, root, Point::new(10.0, 10.0));
//!
//! let moved: Vec<_> = tracker
//!     .pointer_move(&tree, root, Point::new(70.0, 10.0))
//!     .into_iter()
//!     .map(|t| (t.kind, t.region))
//!     .collect();
//! assert_eq!(
//!     moved,
//!     [
//!         (PointerEventKind::Leave, a),
//!         (PointerEventKind::Enter, b),
//!         (PointerEventKind::Move, root),
//!     ]
//! );
//! ```
//!
//! Payloads opt into notifications through capability traits:
//!
//! - [`PointerSink`]: receives the transitions computed by the tracker, see
//!   [`PointerTracker::handle_move`] and [`deliver`].
//! - [`Clickable`]: receives clicks routed by [`dispatch_click`].
//! - [`Stacking`]: marks topmost payloads for [`activate`].
//!
//! ## Features
//!
//! - `tracing`: emit pointer transitions and click dispatch as `tracing`
//!   events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod click;
mod logging;
mod sink;
pub mod tracker;
mod transition;

pub use click::{Clickable, Stacking, activate, dispatch_click};
pub use sink::{PointerSink, deliver};
pub use tracker::{PointerTracker, hit_chain};
pub use transition::{PointerEventKind, PointerTransition};
