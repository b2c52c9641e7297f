// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click dispatch and raise-on-activate.

use kurbo::Point;
use strata_region::{RegionError, RegionId, RegionTree};

use crate::logging::debug;
use crate::tracker::hit_chain;

/// Payloads that respond to clicks.
pub trait Clickable {
    /// Handle a click at `location`, in the region's local frame.
    ///
    /// Return `true` to stop the click from reaching the region's ancestors.
    fn on_click(&mut self, location: Point) -> bool;
}

/// Payloads that take part in stacking.
pub trait Stacking {
    /// Topmost regions stay in front of their ordinary siblings when either
    /// is activated.
    fn is_top_most(&self) -> bool {
        false
    }
}

/// Deliver a click at `pt` (in `root`'s frame) to the deepest region under it.
///
/// The click bubbles toward `root` until a payload reports it handled.
/// Returns the region that handled it, if any.
pub fn dispatch_click<D: Clickable>(
    tree: &mut RegionTree<D>,
    root: RegionId,
    pt: Point,
) -> Option<RegionId> {
    let chain = hit_chain(tree, root, pt);
    for entry in chain.iter().rev() {
        let Some(data) = tree.data_mut(entry.region) else {
            continue;
        };
        if data.on_click(entry.local) {
            debug!(region = entry.region.get(), "click handled");
            return Some(entry.region);
        }
    }
    None
}

/// Raise child `id` to the front of its layer within `parent`.
///
/// A topmost child goes in front of all of its siblings. An ordinary child
/// goes directly in front of the frontmost other ordinary sibling, which
/// keeps it behind any topmost ones.
///
/// ## Errors
///
/// [`RegionError::UnknownRegion`] if `id` is not a child of `parent`.
pub fn activate<D: Stacking>(
    tree: &mut RegionTree<D>,
    parent: RegionId,
    id: RegionId,
) -> Result<(), RegionError> {
    let top_most = tree.data(id).is_some_and(Stacking::is_top_most);
    if top_most {
        return tree.bring_to_front(parent, id);
    }
    let below = tree
        .children(parent)
        .iter()
        .rev()
        .copied()
        .find(|c| *c != id && tree.data(*c).is_some_and(|d| !d.is_top_most()));
    match below {
        Some(target) => tree.move_after(parent, target, id),
        None => tree.send_to_back(parent, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use strata_shape::Shape;

    #[derive(Default)]
    struct Widget {
        top_most: bool,
        consumes: bool,
        clicks: Vec<Point>,
    }

    impl Clickable for Widget {
        fn on_click(&mut self, location: Point) -> bool {
            self.clicks.push(location);
            self.consumes
        }
    }

    impl Stacking for Widget {
        fn is_top_most(&self) -> bool {
            self.top_most
        }
    }

    fn widget(top_most: bool, consumes: bool) -> Widget {
        Widget {
            top_most,
            consumes,
            ..Widget::default()
        }
    }

    #[test]
    fn click_reaches_deepest_consumer() {
        let mut tree = RegionTree::new();
        let root = tree
            .create(Shape::rect(0.0, 0.0, 100.0, 100.0), widget(false, true), None)
            .unwrap();
        let panel = tree
            .add_region(root, Shape::rect(10.0, 10.0, 80.0, 80.0), widget(false, false), None)
            .unwrap();
        let button = tree
            .add_region(panel, Shape::rect(10.0, 10.0, 20.0, 20.0), widget(false, true), None)
            .unwrap();

        assert_eq!(dispatch_click(&mut tree, root, Point::new(25.0, 25.0)), Some(button));
        assert_eq!(tree.data(button).unwrap().clicks, vec![Point::new(5.0, 5.0)]);
        assert!(tree.data(panel).unwrap().clicks.is_empty());

        // Outside the button the click bubbles through the panel to the root.
        assert_eq!(dispatch_click(&mut tree, root, Point::new(60.0, 60.0)), Some(root));
        assert_eq!(tree.data(panel).unwrap().clicks, vec![Point::new(50.0, 50.0)]);

        assert_eq!(dispatch_click(&mut tree, root, Point::new(200.0, 0.0)), None);
    }

    #[test]
    fn activate_respects_top_most_layer() {
        let mut tree = RegionTree::new();
        let root = tree
            .create(Shape::rect(0.0, 0.0, 100.0, 100.0), widget(false, false), None)
            .unwrap();
        let mut add = |top_most| {
            tree.add_region(root, Shape::rect(0.0, 0.0, 10.0, 10.0), widget(top_most, false), None)
                .unwrap()
        };
        let a = add(false);
        let b = add(false);
        let palette = add(true);
        let c = add(false);
        tree.send_to_back(root, c).unwrap();
        assert_eq!(tree.children(root), &[c, a, b, palette]);

        activate(&mut tree, root, c).unwrap();
        assert_eq!(tree.children(root), &[a, b, c, palette]);

        activate(&mut tree, root, palette).unwrap();
        assert_eq!(tree.children(root), &[a, b, c, palette]);

        activate(&mut tree, root, a).unwrap();
        assert_eq!(tree.children(root), &[b, c, a, palette]);
    }

    #[test]
    fn activate_alone_among_top_most_goes_to_back() {
        let mut tree = RegionTree::new();
        let root = tree.create(Shape::Empty, widget(false, false), None).unwrap();
        let palette = tree.add_region(root, Shape::Empty, widget(true, false), None).unwrap();
        let doc = tree.add_region(root, Shape::Empty, widget(false, false), None).unwrap();

        activate(&mut tree, root, doc).unwrap();
        assert_eq!(tree.children(root), &[doc, palette]);

        let stranger = tree.create(Shape::Empty, widget(false, false), None).unwrap();
        assert_eq!(
            activate(&mut tree, root, stranger),
            Err(RegionError::UnknownRegion(stranger))
        );
    }
}
