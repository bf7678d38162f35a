//! Mock construction helpers

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use browser_menubar::frontend::{
    Document, KeyCode, KeyEvent, MenuIntent, MenuStore, Menubar, MenubarProps, ViewRegistry,
};
use browser_menubar::types::Template;
use crossbeam_channel::{unbounded, Receiver, Sender};
use egui::{pos2, vec2, Rect};

/// Create an intent channel
pub fn create_intent_channel() -> (Sender<MenuIntent>, Receiver<MenuIntent>) {
    unbounded()
}

/// [`ViewRegistry`] answering from a fixed table and recording focus requests
#[derive(Default)]
pub struct ScriptedRegistry {
    rects: RefCell<HashMap<String, Rect>>,
    focus_targets: Vec<String>,
    focused: RefCell<Vec<String>>,
}

impl ScriptedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay the labels out left to right, 60 points apart
    pub fn with_row(labels: &[&str]) -> Self {
        let registry = Self::new();
        for (i, label) in labels.iter().enumerate() {
            let rect = Rect::from_min_size(pos2(i as f32 * 60.0, 0.0), vec2(50.0, 24.0));
            registry.register_item(label, rect);
        }
        registry
    }

    pub fn with_focus_target(mut self, selector: &str) -> Self {
        self.focus_targets.push(selector.to_string());
        self
    }

    pub fn focused(&self) -> Vec<String> {
        self.focused.borrow().clone()
    }
}

impl ViewRegistry for ScriptedRegistry {
    fn rect_for_label(&self, label: &str) -> Option<Rect> {
        self.rects.borrow().get(label).copied()
    }

    fn focus_first_matching(&self, selector: &str) -> bool {
        let matches = self.focus_targets.iter().filter(|s| *s == selector).count();
        if matches == 1 {
            self.focused.borrow_mut().push(selector.to_string());
            true
        } else {
            false
        }
    }

    fn register_item(&self, label: &str, rect: Rect) {
        self.rects.borrow_mut().insert(label.to_string(), rect);
    }

    fn begin_frame(&self) {}

    fn end_frame(&self) {}
}

/// A menubar wired to a real store, closing the intent loop by hand
pub struct LoopHarness {
    pub store: MenuStore,
    pub menubar: Rc<Menubar>,
    pub document: Document,
    pub registry: Rc<ScriptedRegistry>,
    rx: Receiver<MenuIntent>,
}

impl LoopHarness {
    pub fn new(template: Arc<Template>, autohide: bool, registry: ScriptedRegistry) -> Self {
        let store = MenuStore::new(template, autohide);
        let (tx, rx) = create_intent_channel();
        let registry = Rc::new(registry);
        let menubar = Menubar::new(
            store.props(),
            Rc::new(tx),
            Rc::clone(&registry) as Rc<dyn ViewRegistry>,
        );
        let document = Document::new();
        menubar.mount(&document);

        Self {
            store,
            menubar,
            document,
            registry,
            rx,
        }
    }

    /// Apply pending intents and push the new props into the menubar
    pub fn settle(&mut self) -> usize {
        let applied = self.store.drain(&self.rx);
        self.menubar.set_props_from_host(self.store.props());
        applied
    }

    /// Press a key on the document, then settle
    pub fn press(&mut self, key: KeyCode) -> KeyEvent {
        let mut event = KeyEvent::new(key);
        self.document.dispatch_key(&mut event);
        self.settle();
        event
    }

    pub fn props(&self) -> MenubarProps {
        self.store.props()
    }

    pub fn selected_label(&self) -> Option<String> {
        self.store.state().selected_label.clone()
    }

    /// Send an intent as the host would, then settle
    pub fn host_dispatch(&mut self, intent: MenuIntent) {
        self.store.apply(intent);
        self.menubar.set_props_from_host(self.store.props());
    }
}
