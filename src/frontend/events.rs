//! Input events and the document-level key listener registry
//!
//! [`Document`] plays the role of the window-wide event target: components
//! register a [`KeyListener`] while mounted and remove it when unmounted.
//! The host translates egui input into [`KeyEvent`]s and feeds them in.
//! Pointer input reaches components as [`MouseEvent`]s.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use egui::Rect;

/// Keys the menubar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Alt,
    Other,
}

impl KeyCode {
    /// Map an egui key; anything the menubar ignores becomes [`KeyCode::Other`]
    pub fn from_egui(key: egui::Key) -> Self {
        match key {
            egui::Key::Enter => KeyCode::Enter,
            egui::Key::ArrowLeft => KeyCode::ArrowLeft,
            egui::Key::ArrowRight => KeyCode::ArrowRight,
            egui::Key::ArrowUp => KeyCode::ArrowUp,
            egui::Key::ArrowDown => KeyCode::ArrowDown,
            egui::Key::Escape => KeyCode::Escape,
            _ => KeyCode::Other,
        }
    }
}

/// A key press travelling through the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// Mark the event as consumed
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A click or hover on a rendered element
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// On-screen rectangle of the element that received the event
    pub target_rect: Rect,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl MouseEvent {
    pub fn new(target_rect: Rect) -> Self {
        Self {
            target_rect,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Keep the event from reaching the window background
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Receiver of document keydown events
pub trait KeyListener {
    fn on_key_down(&self, event: &mut KeyEvent);
}

/// Handle returned by [`Document::add_keydown_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Window-wide keydown listener registry
#[derive(Default)]
pub struct Document {
    listeners: RefCell<Vec<(ListenerId, Rc<dyn KeyListener>)>>,
    next_id: Cell<u64>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_keydown_listener(&self, listener: Rc<dyn KeyListener>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        tracing::trace!("Added keydown listener {:?}", id);
        id
    }

    /// Returns `false` if the listener was not registered
    pub fn remove_keydown_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::trace!("Removed keydown listener {:?}", id);
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver a key event to every listener in registration order.
    ///
    /// Listeners may add or remove listeners while handling the event;
    /// the change takes effect from the next event.
    pub fn dispatch_key(&self, event: &mut KeyEvent) {
        let snapshot: Vec<Rc<dyn KeyListener>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener.on_key_down(event);
        }
    }
}

/// Detects a lone tap of the Alt key from per-frame modifier state.
///
/// egui reports Alt only as a modifier, so a tap is a press followed by a
/// release with no other key pressed in between.
#[derive(Debug, Default)]
pub struct AltTap {
    held: bool,
    chorded: bool,
}

impl AltTap {
    /// Feed one frame; returns `true` on the frame a lone tap completes
    pub fn update(&mut self, alt_down: bool, other_key_pressed: bool) -> bool {
        match (self.held, alt_down) {
            (false, true) => {
                self.held = true;
                self.chorded = other_key_pressed;
                false
            }
            (true, true) => {
                self.chorded |= other_key_pressed;
                false
            }
            (true, false) => {
                self.held = false;
                !std::mem::take(&mut self.chorded) && !other_key_pressed
            }
            (false, false) => false,
        }
    }
}
