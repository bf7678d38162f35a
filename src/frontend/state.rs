//! Props and intent types for the menubar
//!
//! Components receive [`MenubarProps`] by value and emit [`MenuIntent`]s
//! instead of mutating state directly. The host owns the state, applies
//! the intents (see [`MenuStore`](super::store::MenuStore)) and feeds
//! fresh props back on the next frame.

use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::error::MenubarError;
use crate::types::Template;

use super::context_menu::ContextMenuDetail;

/// Inbound props for the [`Menubar`](super::menubar::Menubar)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenubarProps {
    /// Menu content supplied by the host
    pub template: Arc<Template>,
    /// Currently open top-level label
    pub selected_label: Option<String>,
    /// Highlighted index among the visible actions of the selected menu
    pub selected_index: usize,
    /// Arrow keys work without a prior selection
    pub autohide: bool,
    /// Present while a context menu is shown
    pub context_menu_detail: Option<ContextMenuDetail>,
    /// Selector of the element to refocus after a submenu click
    pub last_focused_selector: Option<String>,
}

impl MenubarProps {
    pub fn new(template: Arc<Template>) -> Self {
        Self {
            template,
            ..Default::default()
        }
    }

    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu_detail.is_some()
    }
}

/// Intents the menubar (and its host) can emit
///
/// Intents are fire-and-forget: nothing is returned to the emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuIntent {
    /// Show (`Some`) or clear (`None`) the context menu
    SetContextMenuDetail(Option<ContextMenuDetail>),
    /// Select (`Some`) or clear (`None`) the top-level label
    SetMenubarSelectedLabel(Option<String>),
    /// Highlight an entry of the open submenu
    SetSubmenuSelectedIndex(usize),
    /// A submenu entry was activated
    ClickMenubarSubmenu(String),
    /// Close everything and clear the selection
    ResetMenubarState,

    // Host-side intents; the menubar never emits these
    /// Show or hide the menubar while autohide is on
    SetMenubarVisible(bool),
    /// Remember the element to refocus after a submenu click
    SetLastFocusedSelector(Option<String>),
}

/// One-way boundary to the external action layer
pub trait Dispatch {
    fn dispatch(&self, intent: MenuIntent);
}

impl Dispatch for Sender<MenuIntent> {
    fn dispatch(&self, intent: MenuIntent) {
        if let Err(e) = self.send(intent) {
            let err = MenubarError::Channel(format!("store is gone, dropped {:?}", e.into_inner()));
            tracing::warn!("{}", err);
        }
    }
}
