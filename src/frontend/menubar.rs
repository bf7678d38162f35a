//! The menubar component
//!
//! [`Menubar`] renders one [`MenubarItem`] per template entry and owns
//! keyboard navigation while mounted on a [`Document`]. It never changes
//! state itself: every reaction is a [`MenuIntent`] sent through the
//! injected [`Dispatch`], and the new state arrives later via
//! [`Menubar::set_props`].
//!
//! # Keyboard
//!
//! | Key        | Acts when                          | Effect |
//! |------------|------------------------------------|--------|
//! | Enter      | a selected menu exists             | click the highlighted entry, reset the menubar |
//! | Left/Right | autohide, or a label is selected   | move the selection with wrap-around; follow with the context menu if one is open |
//! | Up/Down    | autohide, or a label is selected   | open the selected menu, or move the highlight within it |
//!
//! # Rendering
//!
//! The rendered item snapshot is only rebuilt when `selected_label`
//! changes (see [`Menubar::should_update`]). Other prop changes are stored
//! so handlers see them, but the drawn items keep their previous props
//! until the selection moves or [`Menubar::force_update`] is called.
//! Hosts push props through [`Menubar::set_props_from_host`], which also
//! rebuilds when the focus selector changes.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use egui::{Rect, Ui};

use crate::types::{ActionEntry, SubmenuEntry};

use super::context_menu::show_context_menu;
use super::events::{Document, KeyCode, KeyEvent, KeyListener, ListenerId};
use super::menubar_item::{MenubarItem, MenubarItemProps};
use super::navigation::step_index;
use super::state::{Dispatch, MenuIntent, MenubarProps};
use super::view_registry::ViewRegistry;

/// Visible actions of a submenu, separators removed
pub fn visible_actions(submenu: &[SubmenuEntry]) -> Vec<ActionEntry> {
    submenu
        .iter()
        .filter_map(SubmenuEntry::as_action)
        .filter(|action| action.is_visible())
        .cloned()
        .collect()
}

/// Top-level menubar component
pub struct Menubar {
    props: RefCell<MenubarProps>,
    rendered: RefCell<Vec<MenubarItemProps>>,
    render_count: Cell<u64>,
    listener: Cell<Option<ListenerId>>,
    hovered: RefCell<Option<String>>,
    dispatcher: Rc<dyn Dispatch>,
    registry: Rc<dyn ViewRegistry>,
}

impl Menubar {
    /// Create the menubar and perform the initial render
    pub fn new(
        props: MenubarProps,
        dispatcher: Rc<dyn Dispatch>,
        registry: Rc<dyn ViewRegistry>,
    ) -> Rc<Self> {
        let menubar = Rc::new(Self {
            props: RefCell::new(props),
            rendered: RefCell::new(Vec::new()),
            render_count: Cell::new(0),
            listener: Cell::new(None),
            hovered: RefCell::new(None),
            dispatcher,
            registry,
        });
        menubar.rerender();
        menubar
    }

    // ==================== Lifecycle ====================

    /// Start listening for document keydown events. Mounting twice is a no-op.
    pub fn mount(self: &Rc<Self>, document: &Document) {
        if self.listener.get().is_some() {
            return;
        }

        let listener: Rc<dyn KeyListener> = Rc::clone(self) as Rc<dyn KeyListener>;
        self.listener.set(Some(document.add_keydown_listener(listener)));
        tracing::debug!("Menubar mounted");
    }

    /// Stop listening for document keydown events
    pub fn unmount(&self, document: &Document) {
        if let Some(id) = self.listener.take() {
            document.remove_keydown_listener(id);
            *self.hovered.borrow_mut() = None;
            tracing::debug!("Menubar unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.get().is_some()
    }

    // ==================== Props and rendering ====================

    pub fn props(&self) -> Ref<'_, MenubarProps> {
        self.props.borrow()
    }

    pub fn selected_label(&self) -> Option<String> {
        self.props.borrow().selected_label.clone()
    }

    pub fn dispatcher(&self) -> &dyn Dispatch {
        self.dispatcher.as_ref()
    }

    pub fn registry(&self) -> &dyn ViewRegistry {
        self.registry.as_ref()
    }

    /// Re-render gate: only a change of `selected_label` redraws.
    ///
    /// Context menu, index, template and selector changes alone leave the
    /// rendered items as they were.
    pub fn should_update(&self, next: &MenubarProps) -> bool {
        self.props.borrow().selected_label != next.selected_label
    }

    /// Store new props; returns whether the item snapshot was rebuilt
    pub fn set_props(&self, next: MenubarProps) -> bool {
        let update = self.should_update(&next);
        *self.props.borrow_mut() = next;
        if update {
            self.rerender();
        }
        update
    }

    /// Rebuild the item snapshot regardless of the gate
    pub fn force_update(&self) {
        self.rerender();
    }

    /// Store new props for a host that also tracks the focus selector.
    ///
    /// Items pass their rendered selector to the context menus they open,
    /// so a changed `last_focused_selector` rebuilds the snapshot even
    /// when the gate would skip it.
    pub fn set_props_from_host(&self, next: MenubarProps) -> bool {
        let selector_changed =
            self.props.borrow().last_focused_selector != next.last_focused_selector;
        if self.set_props(next) {
            return true;
        }
        if selector_changed {
            self.force_update();
        }
        selector_changed
    }

    /// Number of times the item snapshot has been built
    pub fn render_count(&self) -> u64 {
        self.render_count.get()
    }

    /// Props bundle for every template entry, from the current props
    pub fn render(&self) -> Vec<MenubarItemProps> {
        let props = self.props.borrow();
        props
            .template
            .iter()
            .map(|entry| MenubarItemProps {
                label: entry.label.clone(),
                submenu: entry.submenu.clone(),
                last_focused_selector: props.last_focused_selector.clone(),
                selected: props.selected_label.as_deref() == Some(entry.label.as_str()),
                visible: entry.is_visible(),
            })
            .collect()
    }

    /// Item props as of the last render
    pub fn rendered_items(&self) -> Vec<MenubarItemProps> {
        self.rendered.borrow().clone()
    }

    fn rerender(&self) {
        let items = self.render();
        *self.rendered.borrow_mut() = items;
        self.render_count.set(self.render_count.get() + 1);
    }

    /// Draw the rendered items in a row.
    ///
    /// Returns `true` when one of the items consumed a pointer event.
    pub fn show(&self, ui: &mut Ui) -> bool {
        let items = self.rendered_items();
        let was_hovered = self.hovered.borrow().clone();
        let mut hovered_now = None;
        let mut consumed = false;

        self.registry.begin_frame();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;

            for props in items.iter().filter(|props| props.visible) {
                let item = MenubarItem::new(props, self);
                let entered_before = was_hovered.as_deref() == Some(item.label());
                let (response, stopped) = item.show(ui, entered_before);

                if response.hovered() {
                    hovered_now = Some(props.label.clone());
                }
                consumed |= stopped;
            }
        });
        self.registry.end_frame();

        *self.hovered.borrow_mut() = hovered_now;
        consumed
    }

    // ==================== Derived views ====================

    /// Submenu of the first entry labelled `label`
    pub fn template_for_label(&self, label: &str) -> Option<Vec<SubmenuEntry>> {
        self.props
            .borrow()
            .template
            .find(label)
            .map(|entry| entry.submenu.clone())
    }

    /// Submenu of the selected label
    pub fn selected_template(&self) -> Option<Vec<SubmenuEntry>> {
        let label = self.selected_label()?;
        self.template_for_label(&label)
    }

    /// Visible, non-separator entries of the selected submenu
    pub fn selected_visible_items(&self) -> Vec<ActionEntry> {
        self.selected_template()
            .map(|submenu| visible_actions(&submenu))
            .unwrap_or_default()
    }

    /// Count of [`Menubar::selected_visible_items`]
    pub fn selected_index_max(&self) -> usize {
        self.selected_visible_items().len()
    }

    /// Rectangle of the single rendered item labelled `label`
    pub fn rect_for_label(&self, label: &str) -> Option<Rect> {
        self.registry.rect_for_label(label)
    }

    // ==================== Keyboard ====================

    fn on_enter(&self, event: &mut KeyEvent) {
        event.prevent_default();

        let Some(submenu) = self.selected_template() else {
            return;
        };

        let index = self.props.borrow().selected_index;
        match visible_actions(&submenu).get(index) {
            Some(item) => {
                self.dispatcher
                    .dispatch(MenuIntent::ClickMenubarSubmenu(item.label.clone()));
            }
            None => tracing::debug!("No visible entry at index {}", index),
        }
        self.dispatcher.dispatch(MenuIntent::ResetMenubarState);
    }

    fn on_horizontal(&self, event: &mut KeyEvent, forward: bool) {
        let props = self.props.borrow().clone();
        if !(props.autohide || props.selected_label.is_some()) {
            return;
        }
        event.prevent_default();

        if props.template.is_empty() {
            return;
        }

        let current = props
            .selected_label
            .as_deref()
            .and_then(|label| props.template.position(label));
        let next_index = match current {
            Some(index) => step_index(index, forward, props.template.len()).unwrap_or(0),
            None => 0,
        };
        let Some(next) = props.template.get(next_index) else {
            return;
        };

        tracing::debug!("Menubar selection -> {:?}", next.label);
        self.dispatcher
            .dispatch(MenuIntent::SetMenubarSelectedLabel(Some(next.label.clone())));

        if !props.is_context_menu_open() || next.submenu.is_empty() {
            return;
        }
        let Some(rect) = self.rect_for_label(&next.label) else {
            return;
        };

        self.dispatcher.dispatch(MenuIntent::SetSubmenuSelectedIndex(0));
        show_context_menu(
            rect,
            &next.submenu,
            props.last_focused_selector.as_deref(),
            self.dispatcher.as_ref(),
        );
    }

    fn on_vertical(&self, event: &mut KeyEvent, forward: bool) {
        let props = self.props.borrow().clone();
        if !(props.autohide || props.selected_label.is_some()) {
            return;
        }
        event.prevent_default();

        let Some(label) = props.selected_label.as_deref() else {
            return;
        };
        let Some(entry) = props.template.find(label) else {
            return;
        };

        if !props.is_context_menu_open() {
            if let Some(rect) = self.rect_for_label(label) {
                self.dispatcher.dispatch(MenuIntent::SetSubmenuSelectedIndex(0));
                show_context_menu(
                    rect,
                    &entry.submenu,
                    props.last_focused_selector.as_deref(),
                    self.dispatcher.as_ref(),
                );
            }
            return;
        }

        let max = visible_actions(&entry.submenu).len();
        if let Some(next) = step_index(props.selected_index, forward, max) {
            self.dispatcher.dispatch(MenuIntent::SetSubmenuSelectedIndex(next));
        }
    }
}

impl KeyListener for Menubar {
    fn on_key_down(&self, event: &mut KeyEvent) {
        match event.key {
            KeyCode::Enter => self.on_enter(event),
            KeyCode::ArrowLeft => self.on_horizontal(event, false),
            KeyCode::ArrowRight => self.on_horizontal(event, true),
            KeyCode::ArrowUp => self.on_vertical(event, false),
            KeyCode::ArrowDown => self.on_vertical(event, true),
            _ => {}
        }
    }
}
