// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, ordering, queries.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use strata_shape::Shape;

use crate::error::RegionError;
use crate::event::{RegionEvent, RegionHandler};
use crate::logging::{debug, trace};
use crate::types::{HitEntry, PaintItem, RegionId, RegionUpdate};

struct Node<D> {
    shape: Shape,
    data: D,
    parent: Option<RegionId>,
    children: Vec<RegionId>,
    handler: Option<RegionHandler>,
}

impl<D> Node<D> {
    fn new(shape: Shape, data: D, parent: Option<RegionId>, handler: Option<RegionHandler>) -> Self {
        Self {
            shape,
            data,
            parent,
            children: Vec::new(),
            handler,
        }
    }
}

/// Arena owning a forest of regions.
///
/// Every region lives in exactly one `RegionTree`. Roots are created with
/// [`RegionTree::create`] and children with [`RegionTree::add_region`];
/// the type parameter `D` is the embedder's payload.
pub struct RegionTree<D> {
    nodes: HashMap<RegionId, Node<D>>,
}

impl<D> fmt::Debug for RegionTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots = self.nodes.values().filter(|n| n.parent.is_none()).count();
        let handlers = self.nodes.values().filter(|n| n.handler.is_some()).count();
        f.debug_struct("RegionTree")
            .field("regions", &self.nodes.len())
            .field("roots", &roots)
            .field("handlers", &handlers)
            .finish_non_exhaustive()
    }
}

impl<D> Default for RegionTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> RegionTree<D> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Create a detached root region.
    ///
    /// Pass [`Shape::Empty`] when the geometry is not known yet.
    pub fn create(
        &mut self,
        shape: Shape,
        data: D,
        handler: Option<RegionHandler>,
    ) -> Result<RegionId, RegionError> {
        shape.validate()?;
        let id = RegionId::next();
        self.nodes.insert(id, Node::new(shape, data, None, handler));
        trace!(region = id.get(), "region created");
        Ok(id)
    }

    /// Append a new child to `parent`, in front of its existing children.
    ///
    /// Emits [`RegionEvent::RegionAdded`] through `parent`'s handler.
    ///
    /// ## Errors
    ///
    /// - [`RegionError::InvalidShape`] if `shape` fails validation.
    /// - [`RegionError::UnknownRegion`] if `parent` is not in the tree.
    pub fn add_region(
        &mut self,
        parent: RegionId,
        shape: Shape,
        data: D,
        handler: Option<RegionHandler>,
    ) -> Result<RegionId, RegionError> {
        shape.validate()?;
        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            return Err(RegionError::UnknownRegion(parent));
        };
        let id = RegionId::next();
        parent_node.children.push(id);
        self.nodes
            .insert(id, Node::new(shape, data, Some(parent), handler));
        debug!(parent = parent.get(), region = id.get(), "region added");
        self.notify(parent, RegionEvent::RegionAdded { parent, region: id });
        Ok(id)
    }

    /// Detach the child `id` from `parent`.
    ///
    /// Returns `false`, without touching anything, if `id` is not a child of
    /// `parent`. The detached region keeps its own children and stays in the
    /// tree as a root until it is [destroyed](Self::destroy).
    ///
    /// Emits [`RegionEvent::RegionRemoved`] through `parent`'s handler.
    pub fn remove_region(&mut self, parent: RegionId, id: RegionId) -> bool {
        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            return false;
        };
        let Some(index) = parent_node.children.iter().position(|c| *c == id) else {
            return false;
        };
        parent_node.children.remove(index);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
        debug!(parent = parent.get(), region = id.get(), "region removed");
        self.notify(parent, RegionEvent::RegionRemoved { parent, region: id });
        true
    }

    /// Apply a partial update to region `id`.
    ///
    /// A supplied handler is installed before any notification is sent, so
    /// it observes the [`RegionEvent::ShapeChanged`] emitted when the same
    /// update also replaces the shape.
    ///
    /// Returns `Ok(false)` if `id` is not in the tree.
    ///
    /// ## Errors
    ///
    /// [`RegionError::InvalidShape`] if the supplied shape fails validation.
    /// Nothing is changed in that case.
    pub fn update(&mut self, id: RegionId, update: RegionUpdate<D>) -> Result<bool, RegionError> {
        if let Some(shape) = &update.shape {
            shape.validate()?;
        }
        let Some(node) = self.nodes.get_mut(&id) else {
            return Ok(false);
        };
        let RegionUpdate {
            shape,
            data,
            handler,
        } = update;
        if let Some(handler) = handler {
            node.handler = Some(handler);
        }
        if let Some(data) = data {
            node.data = data;
        }
        if let Some(shape) = shape {
            node.shape = shape;
            trace!(region = id.get(), "shape changed");
            self.notify(id, RegionEvent::ShapeChanged { region: id, shape });
        }
        Ok(true)
    }

    /// Apply a partial update to the child `id` of `parent`.
    ///
    /// Returns `Ok(false)` if `id` is not a child of `parent`.
    ///
    /// ## Errors
    ///
    /// Same as [`RegionTree::update`].
    pub fn update_child_region(
        &mut self,
        parent: RegionId,
        id: RegionId,
        update: RegionUpdate<D>,
    ) -> Result<bool, RegionError> {
        if !self.children(parent).contains(&id) {
            return Ok(false);
        }
        self.update(id, update)
    }

    /// Visit the children of `parent` back to front, stopping as soon as
    /// `visit` returns `false`.
    pub fn enum_regions(&self, parent: RegionId, mut visit: impl FnMut(RegionId) -> bool) {
        for &child in self.children(parent) {
            if !visit(child) {
                break;
            }
        }
    }

    /// Move child `id` behind all of its siblings.
    ///
    /// ## Errors
    ///
    /// [`RegionError::UnknownRegion`] if `id` is not a child of `parent`.
    pub fn send_to_back(&mut self, parent: RegionId, id: RegionId) -> Result<(), RegionError> {
        self.reorder(parent, id, |children, index| {
            children[..=index].rotate_right(1);
        })?;
        debug!(parent = parent.get(), region = id.get(), "sent to back");
        Ok(())
    }

    /// Move child `id` in front of all of its siblings.
    ///
    /// ## Errors
    ///
    /// [`RegionError::UnknownRegion`] if `id` is not a child of `parent`.
    pub fn bring_to_front(&mut self, parent: RegionId, id: RegionId) -> Result<(), RegionError> {
        self.reorder(parent, id, |children, index| {
            children[index..].rotate_left(1);
        })?;
        debug!(parent = parent.get(), region = id.get(), "brought to front");
        Ok(())
    }

    /// Swap child `id` with the sibling directly behind it.
    ///
    /// ## Errors
    ///
    /// [`RegionError::UnknownRegion`] if `id` is not a child of `parent`.
    pub fn move_to_back(&mut self, parent: RegionId, id: RegionId) -> Result<(), RegionError> {
        self.reorder(parent, id, |children, index| {
            if index > 0 {
                children.swap(index, index - 1);
            }
        })?;
        debug!(parent = parent.get(), region = id.get(), "moved back");
        Ok(())
    }

    /// Swap child `id` with the sibling directly in front of it.
    ///
    /// ## Errors
    ///
    /// [`RegionError::UnknownRegion`] if `id` is not a child of `parent`.
    pub fn move_to_front(&mut self, parent: RegionId, id: RegionId) -> Result<(), RegionError> {
        self.reorder(parent, id, |children, index| {
            if index + 1 < children.len() {
                children.swap(index, index + 1);
            }
        })?;
        debug!(parent = parent.get(), region = id.get(), "moved front");
        Ok(())
    }

    /// Place child `id` directly in front of its sibling `target`.
    ///
    /// Siblings between the two positions shift by one and keep their
    /// relative order. Nothing moves if `id == target` or `id` already sits
    /// directly after `target`.
    ///
    /// ## Errors
    ///
    /// [`RegionError::UnknownRegion`] if either id is not a child of `parent`.
    pub fn move_after(
        &mut self,
        parent: RegionId,
        target: RegionId,
        id: RegionId,
    ) -> Result<(), RegionError> {
        let children = self.children(parent);
        let target_index = children
            .iter()
            .position(|c| *c == target)
            .ok_or(RegionError::UnknownRegion(target))?;
        self.reorder(parent, id, |children, index| {
            if index < target_index {
                children[index..=target_index].rotate_left(1);
            } else if index > target_index + 1 {
                children[target_index + 1..=index].rotate_right(1);
            }
        })?;
        debug!(
            parent = parent.get(),
            target = target.get(),
            region = id.get(),
            "moved after"
        );
        Ok(())
    }

    /// Find the frontmost child of `parent` whose shape contains `pt`.
    ///
    /// `pt` is in `parent`'s local frame. With `deep_search`, the search
    /// continues into the hit child (converting `pt` into its local frame) and
    /// returns the deepest matching descendant, or the child itself if none
    /// of its descendants match.
    pub fn find_region_by_xy(
        &self,
        parent: RegionId,
        pt: Point,
        deep_search: bool,
    ) -> Option<RegionId> {
        let (hit, shape) = self.child_at(parent, pt)?;
        if !deep_search {
            return Some(hit);
        }
        let local = shape.local_point(pt);
        Some(self.find_region_by_xy(hit, local, true).unwrap_or(hit))
    }

    /// Collect the chain of regions under `pt`, from the frontmost child of
    /// `parent` down to the deepest hit.
    ///
    /// `pt` is in `parent`'s local frame and `parent` itself is not part of
    /// the result. The chain is empty if no child of `parent` contains `pt`.
    pub fn find_all_regions_by_xy(&self, parent: RegionId, pt: Point) -> Vec<HitEntry> {
        let mut chain = Vec::new();
        let mut current = parent;
        let mut location = pt;
        while let Some((region, shape)) = self.child_at(current, location) {
            let local = shape.local_point(location);
            chain.push(HitEntry {
                region,
                location,
                local,
            });
            current = region;
            location = local;
        }
        chain
    }

    /// List `root` and its descendants in painting order.
    ///
    /// Parents come before their children and siblings back to front. Each
    /// shape is related into `root`'s frame. Returns an empty list if `root`
    /// is not in the tree.
    pub fn paint_order(&self, root: RegionId) -> Vec<PaintItem> {
        let mut out = Vec::new();
        if let Some(node) = self.nodes.get(&root) {
            self.collect_paint(root, node.shape, 0, &mut out);
        }
        out
    }

    /// Free region `id` and return its payload.
    ///
    /// If `id` is attached, it is first removed from its parent as by
    /// [`RegionTree::remove_region`]. Its children become detached roots.
    /// Returns `None` if `id` is not in the tree.
    pub fn destroy(&mut self, id: RegionId) -> Option<D> {
        if let Some(parent) = self.parent(id) {
            self.remove_region(parent, id);
        }
        let node = self.nodes.remove(&id)?;
        for child in &node.children {
            if let Some(child) = self.nodes.get_mut(child) {
                child.parent = None;
            }
        }
        trace!(region = id.get(), "region destroyed");
        Some(node.data)
    }

    /// Returns `true` if `id` refers to a region in this tree.
    pub fn contains(&self, id: RegionId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of regions in the tree, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no regions.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The shape of region `id`.
    pub fn shape(&self, id: RegionId) -> Option<Shape> {
        self.nodes.get(&id).map(|n| n.shape)
    }

    /// The payload of region `id`.
    pub fn data(&self, id: RegionId) -> Option<&D> {
        self.nodes.get(&id).map(|n| &n.data)
    }

    /// Mutable access to the payload of region `id`.
    pub fn data_mut(&mut self, id: RegionId) -> Option<&mut D> {
        self.nodes.get_mut(&id).map(|n| &mut n.data)
    }

    /// The parent of region `id`, or `None` for roots and unknown ids.
    pub fn parent(&self, id: RegionId) -> Option<RegionId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// The children of region `id`, back to front, or an empty slice for
    /// unknown ids.
    pub fn children(&self, id: RegionId) -> &[RegionId] {
        self.nodes.get(&id).map_or(&[], |n| &n.children)
    }

    /// The root of the tree containing `id`.
    pub fn root_of(&self, id: RegionId) -> Option<RegionId> {
        let mut node = self.nodes.get(&id).map(|_| id)?;
        while let Some(parent) = self.parent(node) {
            node = parent;
        }
        Some(node)
    }

    fn child_at(&self, parent: RegionId, pt: Point) -> Option<(RegionId, Shape)> {
        self.children(parent).iter().rev().find_map(|child| {
            let shape = self.nodes.get(child)?.shape;
            shape.contains_point(pt).then_some((*child, shape))
        })
    }

    fn collect_paint(&self, id: RegionId, shape: Shape, depth: usize, out: &mut Vec<PaintItem>) {
        out.push(PaintItem {
            region: id,
            shape,
            depth,
        });
        let offset = shape.origin().to_vec2();
        for child in self.children(id) {
            if let Some(node) = self.nodes.get(child) {
                self.collect_paint(*child, node.shape.relate(offset), depth + 1, out);
            }
        }
    }

    fn reorder(
        &mut self,
        parent: RegionId,
        id: RegionId,
        apply: impl FnOnce(&mut Vec<RegionId>, usize),
    ) -> Result<(), RegionError> {
        let children = self
            .nodes
            .get_mut(&parent)
            .map(|n| &mut n.children)
            .ok_or(RegionError::UnknownRegion(id))?;
        let index = children
            .iter()
            .position(|c| *c == id)
            .ok_or(RegionError::UnknownRegion(id))?;
        apply(children, index);
        Ok(())
    }

    fn notify(&mut self, target: RegionId, event: RegionEvent) {
        if let Some(node) = self.nodes.get_mut(&target)
            && let Some(handler) = node.handler.as_mut()
        {
            handler(&event);
        }
    }
}
