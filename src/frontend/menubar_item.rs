//! One top-level menubar label

use egui::{Response, Ui};

use crate::types::SubmenuEntry;

use super::context_menu::show_context_menu;
use super::events::MouseEvent;
use super::menubar::Menubar;
use super::state::MenuIntent;

/// Props for a single [`MenubarItem`], built by [`Menubar::render`]
#[derive(Debug, Clone, PartialEq)]
pub struct MenubarItemProps {
    pub label: String,
    /// Fully materialized copy of the entry's submenu
    pub submenu: Vec<SubmenuEntry>,
    pub last_focused_selector: Option<String>,
    /// `true` when this label is the menubar's selected label
    pub selected: bool,
    /// Top-level visibility flag from the template
    pub visible: bool,
}

/// A rendered top-level item, paired with the menubar that owns it.
///
/// Holds no state of its own; the menubar reference is used to read the
/// live selection and to reach the dispatcher.
pub struct MenubarItem<'a> {
    props: &'a MenubarItemProps,
    menubar: &'a Menubar,
}

impl<'a> MenubarItem<'a> {
    pub fn new(props: &'a MenubarItemProps, menubar: &'a Menubar) -> Self {
        Self { props, menubar }
    }

    pub fn label(&self) -> &str {
        &self.props.label
    }

    /// Toggle this item's submenu.
    ///
    /// Clicking the already selected item closes its context menu and clears
    /// the selection; clicking any other item selects it and opens its
    /// submenu below the clicked element.
    pub fn on_click(&self, event: &mut MouseEvent) {
        event.stop_propagation();

        let dispatcher = self.menubar.dispatcher();
        let currently_selected = self.menubar.selected_label();

        if currently_selected.as_deref() == Some(self.props.label.as_str()) {
            tracing::debug!("Closing menu {:?}", self.props.label);
            dispatcher.dispatch(MenuIntent::SetContextMenuDetail(None));
            dispatcher.dispatch(MenuIntent::SetMenubarSelectedLabel(None));
            return;
        }

        tracing::debug!("Opening menu {:?}", self.props.label);
        dispatcher.dispatch(MenuIntent::SetMenubarSelectedLabel(Some(
            self.props.label.clone(),
        )));
        show_context_menu(
            event.target_rect,
            &self.props.submenu,
            self.props.last_focused_selector.as_deref(),
            dispatcher,
        );
    }

    /// Hovering switches the open menu once some other item is selected
    pub fn on_mouse_over(&self, event: &mut MouseEvent) {
        let switch = self
            .menubar
            .selected_label()
            .is_some_and(|selected| selected != self.props.label);

        if switch {
            self.on_click(event);
        }
    }

    /// Draw the label and route pointer input.
    ///
    /// `was_hovered` is whether the pointer was over this item last frame;
    /// mouse-over fires only when the pointer enters. Returns the egui
    /// response and whether the item consumed a pointer event.
    pub fn show(&self, ui: &mut Ui, was_hovered: bool) -> (Response, bool) {
        let response = ui.selectable_label(self.props.selected, &self.props.label);
        self.menubar
            .registry()
            .register_item(&self.props.label, response.rect);

        let mut event = MouseEvent::new(response.rect);
        if response.clicked() {
            self.on_click(&mut event);
        } else if response.hovered() && !was_hovered {
            self.on_mouse_over(&mut event);
        }

        (response, event.propagation_stopped())
    }
}
