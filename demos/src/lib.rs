// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the strata demos.
//!
//! [`Surface`] wires a [`RegionTree`] of [`Control`]s to a
//! [`PointerTracker`], click dispatch and a [`DirtyArea`], the way a small
//! widget toolkit on top of strata would.

use kurbo::Point;
use strata_pointer::{Clickable, PointerSink, PointerTracker, Stacking, activate, dispatch_click};
use strata_region::{PaintItem, RegionError, RegionId, RegionTree};
use strata_shape::{DirtyArea, Shape};

/// What a control is.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    /// The drawing surface itself.
    Surface,
    /// A movable window.
    Dialog {
        /// Window title.
        title: String,
    },
    /// Static text.
    Label {
        /// The text.
        text: String,
    },
    /// A toggle.
    Checkbox {
        /// Current state.
        checked: bool,
    },
    /// A push button.
    Button {
        /// Caption.
        text: String,
    },
}

/// Payload stored in every region of a [`Surface`].
#[derive(Clone, Debug)]
pub struct Control {
    /// What the control is.
    pub kind: ControlKind,
    /// Whether the pointer is over the control.
    pub hovered: bool,
    /// Whether the control stays in front of its ordinary siblings.
    pub top_most: bool,
    /// Set by a click on a button, cleared by [`Surface::click`].
    pressed: bool,
    /// Set when the control's look changed and it needs repainting.
    stale: bool,
}

impl Control {
    /// A control of the given kind.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            hovered: false,
            top_most: false,
            pressed: false,
            stale: false,
        }
    }
}

impl PointerSink for Control {
    fn pointer_enter(&mut self, _location: Point) {
        self.hovered = true;
        self.stale = true;
    }

    fn pointer_leave(&mut self, _location: Point) {
        self.hovered = false;
        self.stale = true;
    }
}

impl Clickable for Control {
    fn on_click(&mut self, _location: Point) -> bool {
        match &mut self.kind {
            ControlKind::Checkbox { checked } => {
                *checked = !*checked;
                self.stale = true;
                true
            }
            ControlKind::Button { .. } => {
                self.pressed = true;
                true
            }
            _ => false,
        }
    }
}

impl Stacking for Control {
    fn is_top_most(&self) -> bool {
        self.top_most
    }
}

/// A headless drawing surface.
#[derive(Debug)]
pub struct Surface {
    tree: RegionTree<Control>,
    root: RegionId,
    pointer: PointerTracker,
    dirty: DirtyArea,
}

impl Surface {
    /// A surface of the given size.
    pub fn new(width: f64, height: f64) -> Result<Self, RegionError> {
        let mut tree = RegionTree::new();
        let shape = Shape::rect(0.0, 0.0, width, height);
        let root = tree.create(shape, Control::new(ControlKind::Surface), None)?;
        let mut dirty = DirtyArea::new();
        dirty.mark(shape);
        Ok(Self {
            tree,
            root,
            pointer: PointerTracker::new(),
            dirty,
        })
    }

    /// The surface region.
    pub fn root(&self) -> RegionId {
        self.root
    }

    /// The underlying region tree.
    pub fn tree(&self) -> &RegionTree<Control> {
        &self.tree
    }

    /// Add `control` to `parent` with `shape` in the parent's frame.
    pub fn add(
        &mut self,
        parent: RegionId,
        shape: Shape,
        control: Control,
    ) -> Result<RegionId, RegionError> {
        let id = self.tree.add_region(parent, shape, control, None)?;
        self.invalidate(id);
        Ok(id)
    }

    /// Remove and free `id` along with its subtree.
    pub fn close(&mut self, id: RegionId) {
        self.invalidate(id);
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            pending.extend_from_slice(self.tree.children(next));
            self.tree.destroy(next);
        }
    }

    /// The pointer moved to `pt` in surface coordinates.
    pub fn pointer_move(&mut self, pt: Point) {
        self.pointer.handle_move(&mut self.tree, self.root, pt);
        self.collect_stale();
    }

    /// The pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.pointer.handle_leave(&mut self.tree);
        self.collect_stale();
    }

    /// The deepest control under the pointer.
    pub fn hovered(&self) -> Option<RegionId> {
        self.pointer.hovered()
    }

    /// A click at `pt` in surface coordinates.
    ///
    /// The top-level control under the click is raised, then the click is
    /// dispatched. A pressed button closes the window it belongs to. Returns
    /// the region that handled the click.
    pub fn click(&mut self, pt: Point) -> Result<Option<RegionId>, RegionError> {
        let local = self
            .tree
            .shape(self.root)
            .map_or(pt, |s| s.local_point(pt));
        if let Some(window) = self.tree.find_region_by_xy(self.root, local, false) {
            activate(&mut self.tree, self.root, window)?;
            self.invalidate(window);
        }
        let handled = dispatch_click(&mut self.tree, self.root, pt);
        if let Some(id) = handled {
            let pressed = self
                .tree
                .data_mut(id)
                .is_some_and(|c| core::mem::take(&mut c.pressed));
            if pressed {
                let window = self.window_of(id);
                self.close(window);
                // Re-run hit testing so controls under the pointer see it.
                self.pointer_move(pt);
            }
        }
        self.collect_stale();
        Ok(handled)
    }

    /// Paint everything touched since the last call, back to front.
    pub fn repaint(&mut self) -> Vec<PaintItem> {
        if self.dirty.is_empty() {
            return Vec::new();
        }
        let items: Vec<PaintItem> = self
            .tree
            .paint_order(self.root)
            .into_iter()
            .filter(|item| self.dirty.affects(&item.shape))
            .collect();
        self.dirty.take();
        items
    }

    /// The shape of `id` in surface coordinates.
    pub fn absolute_shape(&self, id: RegionId) -> Option<Shape> {
        let mut shape = self.tree.shape(id)?;
        let mut parent = self.tree.parent(id);
        while let Some(p) = parent {
            shape = shape.relate(self.tree.shape(p)?.origin().to_vec2());
            parent = self.tree.parent(p);
        }
        Some(shape)
    }

    fn window_of(&self, id: RegionId) -> RegionId {
        let mut current = id;
        while let Some(parent) = self.tree.parent(current) {
            if parent == self.root {
                break;
            }
            current = parent;
        }
        current
    }

    fn invalidate(&mut self, id: RegionId) {
        if let Some(shape) = self.absolute_shape(id) {
            self.dirty.mark(shape);
        }
    }

    fn collect_stale(&mut self) {
        let stale: Vec<_> = self
            .tree
            .paint_order(self.root)
            .into_iter()
            .filter(|item| {
                self.tree
                    .data(item.region)
                    .is_some_and(|c| c.stale)
            })
            .collect();
        for item in stale {
            if let Some(control) = self.tree.data_mut(item.region) {
                control.stale = false;
            }
            self.dirty.mark(item.shape);
        }
    }
}

/// Build the test dialog: a title, a label, a checkbox and OK/Cancel
/// buttons, in a 800x600 surface.
pub fn dialog_surface() -> Result<(Surface, DialogIds), RegionError> {
    let mut surface = Surface::new(800.0, 600.0)?;
    let root = surface.root();
    let dialog = surface.add(
        root,
        Shape::rect(50.0, 100.0, 200.0, 120.0),
        Control::new(ControlKind::Dialog {
            title: "Test dialog".into(),
        }),
    )?;
    let label = surface.add(
        dialog,
        Shape::rect(16.0, 40.0, 180.0, 16.0),
        Control::new(ControlKind::Label {
            text: "Test dialog window".into(),
        }),
    )?;
    let checkbox = surface.add(
        dialog,
        Shape::rect(16.0, 60.0, 16.0, 16.0),
        Control::new(ControlKind::Checkbox { checked: true }),
    )?;
    let ok = surface.add(
        dialog,
        Shape::rect(26.0, 90.0, 80.0, 24.0),
        Control::new(ControlKind::Button { text: "OK".into() }),
    )?;
    let cancel = surface.add(
        dialog,
        Shape::rect(114.0, 90.0, 80.0, 24.0),
        Control::new(ControlKind::Button {
            text: "Cancel".into(),
        }),
    )?;
    Ok((
        surface,
        DialogIds {
            dialog,
            label,
            checkbox,
            ok,
            cancel,
        },
    ))
}

/// Regions created by [`dialog_surface`].
#[derive(Clone, Copy, Debug)]
pub struct DialogIds {
    /// The dialog window.
    pub dialog: RegionId,
    /// Its label.
    pub label: RegionId,
    /// Its checkbox.
    pub checkbox: RegionId,
    /// The OK button.
    pub ok: RegionId,
    /// The Cancel button.
    pub cancel: RegionId,
}
