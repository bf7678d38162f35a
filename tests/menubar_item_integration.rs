//! Pointer behaviour of top-level menubar items

mod common;

use browser_menubar::frontend::{
    ContextMenuEntry, MenuIntent, MenubarItem, MouseEvent, ViewRegistry,
};
use common::builders::browser_template;
use common::mock_helpers::{LoopHarness, ScriptedRegistry};

fn harness() -> LoopHarness {
    LoopHarness::new(
        browser_template(),
        false,
        ScriptedRegistry::with_row(&["File", "Edit", "View"]).with_focus_target("#urlInput"),
    )
}

fn click(h: &mut LoopHarness, label: &str) -> MouseEvent {
    let items = h.menubar.rendered_items();
    let props = items
        .iter()
        .find(|props| props.label == label)
        .expect("label is rendered");
    let rect = h.registry.rect_for_label(label).expect("label has a rect");

    let mut event = MouseEvent::new(rect);
    MenubarItem::new(props, &h.menubar).on_click(&mut event);
    h.settle();
    event
}

fn hover(h: &mut LoopHarness, label: &str) {
    let items = h.menubar.rendered_items();
    let props = items.iter().find(|props| props.label == label).unwrap();
    let rect = h.registry.rect_for_label(label).unwrap();

    MenubarItem::new(props, &h.menubar).on_mouse_over(&mut MouseEvent::new(rect));
    h.settle();
}

#[test]
fn test_click_opens_menu_below_item() {
    let mut h = harness();

    let event = click(&mut h, "View");

    assert!(event.propagation_stopped());
    let props = h.props();
    assert_eq!(props.selected_label.as_deref(), Some("View"));
    let detail = props.context_menu_detail.unwrap();
    assert_eq!((detail.left, detail.top), (120.0, 24.0));
    assert_eq!(detail.template.len(), 1);
}

#[test]
fn test_clicking_selected_item_closes_it() {
    let mut h = harness();
    click(&mut h, "File");

    click(&mut h, "File");

    let props = h.props();
    assert_eq!(props.selected_label, None);
    assert!(!props.is_context_menu_open());
}

#[test]
fn test_hover_does_nothing_until_a_menu_is_open() {
    let mut h = harness();

    hover(&mut h, "Edit");
    assert_eq!(h.selected_label(), None);

    click(&mut h, "File");
    hover(&mut h, "Edit");
    assert_eq!(h.selected_label().as_deref(), Some("Edit"));
    assert!(h.props().is_context_menu_open());

    // Hovering the open item again keeps it open
    hover(&mut h, "Edit");
    assert_eq!(h.selected_label().as_deref(), Some("Edit"));
    assert!(h.props().is_context_menu_open());
}

#[test]
fn test_context_menu_click_refocuses_and_activates() {
    let mut h = harness();
    h.host_dispatch(MenuIntent::SetLastFocusedSelector(Some("#urlInput".to_string())));
    click(&mut h, "Edit");

    let detail = h.props().context_menu_detail.unwrap();
    let ContextMenuEntry::Item(paste) = &detail.template[4] else {
        panic!("expected Paste to be an item");
    };
    assert_eq!(paste.label, "Paste");
    assert_eq!(paste.refocus_selector.as_deref(), Some("#urlInput"));

    let mut event = MouseEvent::new(egui::Rect::NOTHING);
    paste.click(&mut event, h.registry.as_ref(), h.menubar.dispatcher());
    h.settle();

    assert!(event.default_prevented());
    assert_eq!(h.registry.focused(), vec!["#urlInput".to_string()]);
    let activated = h.store.take_activated();
    assert_eq!(activated[0].label, "Paste");
    assert_eq!(h.selected_label(), None);
}

#[test]
fn test_focus_change_reaches_rendered_items() {
    let mut h = harness();
    let before = h.menubar.render_count();

    h.host_dispatch(MenuIntent::SetLastFocusedSelector(Some("#urlInput".to_string())));

    assert_eq!(h.selected_label(), None);
    assert_eq!(h.menubar.render_count(), before + 1);
    let items = h.menubar.rendered_items();
    assert!(items
        .iter()
        .all(|item| item.last_focused_selector.as_deref() == Some("#urlInput")));
}

#[test]
fn test_separators_survive_in_context_menu() {
    let mut h = harness();
    click(&mut h, "File");

    let detail = h.props().context_menu_detail.unwrap();
    assert_eq!(detail.template.len(), 4);
    assert_eq!(detail.template[2], ContextMenuEntry::Separator);
}
