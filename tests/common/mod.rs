//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod mock_helpers;

use browser_menubar::frontend::MenuIntent;
use crossbeam_channel::Receiver;

/// Collect every intent currently waiting on the channel
pub fn drain_intents(rx: &Receiver<MenuIntent>) -> Vec<MenuIntent> {
    rx.try_iter().collect()
}

/// Selected label carried by a `SetMenubarSelectedLabel` intent
pub fn selected_label_of(intent: &MenuIntent) -> Option<&str> {
    match intent {
        MenuIntent::SetMenubarSelectedLabel(label) => label.as_deref(),
        _ => None,
    }
}
