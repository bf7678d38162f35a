//! View queries the menubar needs from its rendering surface
//!
//! Navigation logic never touches egui directly when it needs geometry or
//! focus: it asks a [`ViewRegistry`]. [`FrameRegistry`] is the egui-backed
//! implementation; tests substitute their own.

use std::cell::RefCell;

use egui::{Id, Rect};

/// Rendering-surface capability injected into the menubar
#[cfg_attr(test, mockall::automock)]
pub trait ViewRegistry {
    /// Rectangle of the single rendered item carrying `label`.
    ///
    /// `None` when no item or more than one item matches.
    fn rect_for_label(&self, label: &str) -> Option<Rect>;

    /// Focus the element registered under `selector`.
    ///
    /// Acts only when exactly one element matches; returns whether focus moved.
    fn focus_first_matching(&self, selector: &str) -> bool;

    /// Record where a menubar item was drawn this frame
    fn register_item(&self, label: &str, rect: Rect);

    /// Start collecting a new frame of item rectangles
    fn begin_frame(&self);

    /// Close the current frame so its rectangles answer lookups
    fn end_frame(&self);
}

#[derive(Default)]
struct FrameItems {
    /// Completed previous frame; answers lookups
    settled: Vec<(String, Rect)>,
    /// Items drawn so far in the current frame
    pending: Vec<(String, Rect)>,
    in_frame: bool,
}

/// egui-backed [`ViewRegistry`]
///
/// Item rectangles from the last complete frame stay queryable while the
/// next frame is being drawn, so keyboard handling that runs before the
/// menubar is drawn still sees where every item sits.
#[derive(Default)]
pub struct FrameRegistry {
    items: RefCell<FrameItems>,
    focus_targets: RefCell<Vec<(String, Id)>>,
    pending_focus: RefCell<Option<Id>>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a focusable widget under a selector string
    pub fn register_focus_target(&self, selector: impl Into<String>, id: Id) {
        let selector = selector.into();
        let mut targets = self.focus_targets.borrow_mut();
        if !targets.iter().any(|(s, existing)| *s == selector && *existing == id) {
            targets.push((selector, id));
        }
    }

    /// Move egui focus to the widget picked by the last successful
    /// [`ViewRegistry::focus_first_matching`] call.
    pub fn apply_focus(&self, ctx: &egui::Context) {
        if let Some(id) = self.pending_focus.borrow_mut().take() {
            ctx.memory_mut(|memory| memory.request_focus(id));
        }
    }

    /// Id waiting to be focused, if any
    pub fn pending_focus(&self) -> Option<Id> {
        *self.pending_focus.borrow()
    }
}

impl ViewRegistry for FrameRegistry {
    fn rect_for_label(&self, label: &str) -> Option<Rect> {
        let items = self.items.borrow();
        let mut matches = items.settled.iter().filter(|(l, _)| l == label);
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.1)
    }

    fn focus_first_matching(&self, selector: &str) -> bool {
        let targets = self.focus_targets.borrow();
        let mut matches = targets.iter().filter(|(s, _)| s == selector);
        match (matches.next(), matches.next()) {
            (Some((_, id)), None) => {
                *self.pending_focus.borrow_mut() = Some(*id);
                true
            }
            _ => false,
        }
    }

    fn register_item(&self, label: &str, rect: Rect) {
        let mut items = self.items.borrow_mut();
        if items.in_frame {
            items.pending.push((label.to_string(), rect));
        } else {
            // Drawn outside a frame: take effect immediately
            items.settled.push((label.to_string(), rect));
        }
    }

    fn begin_frame(&self) {
        let mut items = self.items.borrow_mut();
        items.pending.clear();
        items.in_frame = true;
    }

    fn end_frame(&self) {
        let mut items = self.items.borrow_mut();
        if items.in_frame {
            items.settled = std::mem::take(&mut items.pending);
            items.in_frame = false;
        }
    }
}
