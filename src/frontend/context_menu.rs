//! Context menu shown under an open menubar item
//!
//! Opening a submenu turns its template entries into [`ContextMenuEntry`]
//! values whose click behaviour is plain data: prevent the default action,
//! optionally hand focus back to the element the user was in, then report
//! the clicked label. The source template is never modified.

use egui::{pos2, Rect};

use crate::types::SubmenuEntry;

use super::events::MouseEvent;
use super::state::{Dispatch, MenuIntent};
use super::view_registry::ViewRegistry;

/// Minimum popup width in points
const POPUP_MIN_WIDTH: f32 = 180.0;

/// Position and content of the open context menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuDetail {
    /// Left edge, aligned with the anchoring item
    pub left: f32,
    /// Top edge, aligned with the bottom of the anchoring item
    pub top: f32,
    pub template: Vec<ContextMenuEntry>,
}

impl ContextMenuDetail {
    /// Visible, clickable items in display order
    pub fn visible_items(&self) -> impl Iterator<Item = &ContextMenuItem> + '_ {
        self.template.iter().filter_map(|entry| match entry {
            ContextMenuEntry::Item(item) if item.is_visible() => Some(item),
            _ => None,
        })
    }
}

/// An entry of the rendered context menu
#[derive(Debug, Clone, PartialEq)]
pub enum ContextMenuEntry {
    Separator,
    Item(ContextMenuItem),
}

/// A clickable context menu entry with its click behaviour attached
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuItem {
    pub label: String,
    pub accelerator: Option<String>,
    pub visible: Option<bool>,
    /// Selector refocused before the click is reported
    pub refocus_selector: Option<String>,
}

impl ContextMenuItem {
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// Activate the entry.
    ///
    /// Focus only moves when the selector matches exactly one element.
    pub fn click(&self, event: &mut MouseEvent, registry: &dyn ViewRegistry, dispatcher: &dyn Dispatch) {
        event.prevent_default();

        if let Some(selector) = self.refocus_selector.as_deref() {
            if !registry.focus_first_matching(selector) {
                tracing::trace!("No unique focus target for {:?}", selector);
            }
        }

        dispatcher.dispatch(MenuIntent::ClickMenubarSubmenu(self.label.clone()));
    }
}

/// Build the context menu entries for a submenu.
///
/// Separators pass through unchanged; every action gets the click
/// behaviour described on [`ContextMenuItem::click`].
pub fn context_menu_template(
    submenu: &[SubmenuEntry],
    last_focused_selector: Option<&str>,
) -> Vec<ContextMenuEntry> {
    submenu
        .iter()
        .map(|entry| match entry {
            SubmenuEntry::Separator => ContextMenuEntry::Separator,
            SubmenuEntry::Action(action) => ContextMenuEntry::Item(ContextMenuItem {
                label: action.label.clone(),
                accelerator: action.accelerator.clone(),
                visible: action.visible,
                refocus_selector: last_focused_selector.map(str::to_string),
            }),
        })
        .collect()
}

/// Open a context menu anchored below `rect`.
///
/// Emits exactly one [`MenuIntent::SetContextMenuDetail`].
pub fn show_context_menu(
    rect: Rect,
    submenu: &[SubmenuEntry],
    last_focused_selector: Option<&str>,
    dispatcher: &dyn Dispatch,
) {
    let detail = ContextMenuDetail {
        left: rect.left(),
        top: rect.bottom(),
        template: context_menu_template(submenu, last_focused_selector),
    };

    tracing::debug!(
        "Opening context menu with {} entries at ({}, {})",
        detail.template.len(),
        detail.left,
        detail.top
    );
    dispatcher.dispatch(MenuIntent::SetContextMenuDetail(Some(detail)));
}

/// Draw the open context menu.
///
/// `selected_index` highlights among the visible items. Returns `true` when
/// the pointer is over the popup, so the host does not treat a click there
/// as a click on the window background.
pub fn show_context_menu_popup(
    ctx: &egui::Context,
    detail: &ContextMenuDetail,
    selected_index: usize,
    registry: &dyn ViewRegistry,
    dispatcher: &dyn Dispatch,
) -> bool {
    let area = egui::Area::new(egui::Id::new("menubar_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos2(detail.left, detail.top))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(POPUP_MIN_WIDTH);

                let mut visible_index = 0;
                for entry in &detail.template {
                    let item = match entry {
                        ContextMenuEntry::Separator => {
                            ui.separator();
                            continue;
                        }
                        ContextMenuEntry::Item(item) if item.is_visible() => item,
                        ContextMenuEntry::Item(_) => continue,
                    };

                    let highlighted = visible_index == selected_index;
                    visible_index += 1;

                    let response = ui
                        .horizontal(|ui| {
                            let response = ui.selectable_label(highlighted, &item.label);
                            if let Some(accelerator) = &item.accelerator {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| ui.weak(accelerator),
                                );
                            }
                            response
                        })
                        .inner;

                    if response.clicked() {
                        let mut event = MouseEvent::new(response.rect);
                        event.stop_propagation();
                        item.click(&mut event, registry, dispatcher);
                    }
                }
            });
        });

    ctx.input(|i| {
        i.pointer
            .interact_pos()
            .is_some_and(|pos| area.response.rect.contains(pos))
    })
}
