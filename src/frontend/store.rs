//! Window menu state and the reducer that applies [`MenuIntent`]s
//!
//! The menubar only ever emits intents. [`MenuStore`] is the host side of
//! that boundary: it drains the intent channel once per frame, updates
//! [`WindowMenuState`], and hands fresh [`MenubarProps`] back to the
//! component.

use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::types::Template;

use super::context_menu::ContextMenuDetail;
use super::state::{MenuIntent, MenubarProps};

/// Menu-related slice of the window state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowMenuState {
    pub selected_label: Option<String>,
    pub selected_index: usize,
    pub context_menu_detail: Option<ContextMenuDetail>,
    pub last_focused_selector: Option<String>,
    /// Shown on request while autohide is on (e.g. after pressing Alt)
    pub menubar_visible: bool,
}

/// A submenu entry the user activated, waiting for the host to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedItem {
    pub label: String,
    /// Command id from the template, if the entry had one
    pub command: Option<String>,
}

/// Reducer for menubar intents
#[derive(Debug)]
pub struct MenuStore {
    state: WindowMenuState,
    template: Arc<Template>,
    autohide: bool,
    activated: Vec<ActivatedItem>,
}

impl MenuStore {
    pub fn new(template: Arc<Template>, autohide: bool) -> Self {
        Self {
            state: WindowMenuState::default(),
            template,
            autohide,
            activated: Vec::new(),
        }
    }

    pub fn state(&self) -> &WindowMenuState {
        &self.state
    }

    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    /// Swap the template; any open menu is closed
    pub fn set_template(&mut self, template: Arc<Template>) {
        self.template = template;
        self.reset();
    }

    pub fn autohide(&self) -> bool {
        self.autohide
    }

    pub fn set_autohide(&mut self, autohide: bool) {
        self.autohide = autohide;
        if !autohide {
            self.state.menubar_visible = false;
        }
    }

    /// Whether the host should draw (and mount) the menubar
    pub fn is_menubar_visible(&self) -> bool {
        !self.autohide || self.state.menubar_visible || self.state.selected_label.is_some()
    }

    /// Props for the menubar component
    pub fn props(&self) -> MenubarProps {
        MenubarProps {
            template: Arc::clone(&self.template),
            selected_label: self.state.selected_label.clone(),
            selected_index: self.state.selected_index,
            autohide: self.autohide,
            context_menu_detail: self.state.context_menu_detail.clone(),
            last_focused_selector: self.state.last_focused_selector.clone(),
        }
    }

    /// Apply every intent waiting on the channel; returns how many were applied
    pub fn drain(&mut self, receiver: &Receiver<MenuIntent>) -> usize {
        let mut applied = 0;
        for intent in receiver.try_iter() {
            self.apply(intent);
            applied += 1;
        }
        applied
    }

    /// Apply a single intent
    pub fn apply(&mut self, intent: MenuIntent) {
        tracing::trace!("Applying {:?}", intent);

        match intent {
            MenuIntent::SetContextMenuDetail(detail) => {
                self.state.context_menu_detail = detail;
            }
            MenuIntent::SetMenubarSelectedLabel(label) => {
                self.state.selected_label = label;
            }
            MenuIntent::SetSubmenuSelectedIndex(index) => {
                self.state.selected_index = index;
            }
            MenuIntent::ClickMenubarSubmenu(label) => {
                self.activate(label);
                self.state.context_menu_detail = None;
                self.state.selected_label = None;
                self.state.selected_index = 0;
            }
            MenuIntent::ResetMenubarState => self.reset(),
            MenuIntent::SetMenubarVisible(visible) => {
                self.state.menubar_visible = visible;
            }
            MenuIntent::SetLastFocusedSelector(selector) => {
                self.state.last_focused_selector = selector;
            }
        }
    }

    /// Take the items activated since the last call
    pub fn take_activated(&mut self) -> Vec<ActivatedItem> {
        std::mem::take(&mut self.activated)
    }

    fn reset(&mut self) {
        self.state.selected_label = None;
        self.state.context_menu_detail = None;
        self.state.selected_index = 0;
        if self.autohide {
            self.state.menubar_visible = false;
        }
    }

    /// Resolve a clicked label, preferring the selected menu and falling
    /// back to the first match anywhere in the template.
    fn activate(&mut self, label: String) {
        let in_selected = self
            .state
            .selected_label
            .as_deref()
            .and_then(|selected| self.template.find(selected))
            .and_then(|entry| {
                entry
                    .submenu
                    .iter()
                    .filter_map(|item| item.as_action())
                    .find(|action| action.label == label)
            });

        let action = in_selected.or_else(|| self.template.find_action(&label));
        match action {
            Some(action) => {
                tracing::debug!("Activated {:?} (command {:?})", label, action.command);
                self.activated.push(ActivatedItem {
                    label,
                    command: action.command.clone(),
                });
            }
            None => tracing::warn!("Clicked label {:?} is not in the template", label),
        }
    }
}
