//! Menu template data model
//!
//! The host describes the menubar as a [`Template`]: an ordered list of
//! top-level [`MenuEntry`] values, each carrying a submenu of
//! [`SubmenuEntry`] items. Templates are validated once, when they cross
//! into the crate; after that every lookup is infallible.
//!
//! # Serialized form
//!
//! JSON templates are a plain array:
//!
//! ```json
//! [
//!   { "label": "File", "submenu": [
//!       { "type": "action", "label": "New Tab", "command": "new_tab" },
//!       { "type": "separator" },
//!       { "type": "action", "label": "Quit", "visible": false }
//!   ] }
//! ]
//! ```
//!
//! TOML templates wrap the same entries in a `[[menu]]` array of tables.
//!
//! # Lookup semantics
//!
//! Labels are expected to be unique within one template. When they are
//! not, every lookup resolves to the first match; validation only warns.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{MenubarError, Result, ResultExt};

/// One clickable entry of a submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    /// Text shown in the context menu; also the key for click intents
    pub label: String,

    /// Host command id run when the entry is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Display-only accelerator hint (e.g. "Ctrl+T")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,

    /// Explicit visibility; absent means visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl ActionEntry {
    /// Create a visible action with no command attached
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: None,
            accelerator: None,
            visible: None,
        }
    }

    /// Attach a host command id
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Attach an accelerator hint
    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    /// Set the explicit visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Entries lacking an explicit flag are visible
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// An entry inside a top-level submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmenuEntry {
    /// Visual divider; never selectable
    Separator,
    /// Clickable item
    Action(ActionEntry),
}

impl SubmenuEntry {
    /// Shorthand for an action entry with just a label
    pub fn action(label: impl Into<String>) -> Self {
        SubmenuEntry::Action(ActionEntry::new(label))
    }

    /// Returns the action if this is not a separator
    pub fn as_action(&self) -> Option<&ActionEntry> {
        match self {
            SubmenuEntry::Action(action) => Some(action),
            SubmenuEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, SubmenuEntry::Separator)
    }
}

impl From<ActionEntry> for SubmenuEntry {
    fn from(action: ActionEntry) -> Self {
        SubmenuEntry::Action(action)
    }
}

/// A top-level menubar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,

    #[serde(default)]
    pub submenu: Vec<SubmenuEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, submenu: Vec<SubmenuEntry>) -> Self {
        Self {
            label: label.into(),
            submenu,
            visible: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// Ordered list of top-level menu entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    entries: Vec<MenuEntry>,
}

#[derive(Deserialize)]
struct TomlTemplate {
    #[serde(default)]
    menu: Vec<MenuEntry>,
}

impl Template {
    /// Create a template without validating it
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// First entry with a matching label
    pub fn find(&self, label: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Index of the first entry with a matching label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }

    /// First action with a matching label across every submenu
    pub fn find_action(&self, label: &str) -> Option<&ActionEntry> {
        self.entries
            .iter()
            .flat_map(|entry| entry.submenu.iter())
            .filter_map(SubmenuEntry::as_action)
            .find(|action| action.label == label)
    }

    /// Check structural rules.
    ///
    /// Empty labels are rejected. Duplicate labels are reported with a
    /// warning and kept; lookups resolve them to the first match.
    pub fn validate(&self) -> Result<()> {
        let mut top_level = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(MenubarError::Template(format!(
                    "top-level entry {} has an empty label",
                    index
                )));
            }

            if !top_level.insert(entry.label.as_str()) {
                tracing::warn!(
                    "Duplicate top-level label {:?}; lookups resolve to the first entry",
                    entry.label
                );
            }

            let mut actions = HashSet::new();
            for (item_index, item) in entry.submenu.iter().enumerate() {
                let Some(action) = item.as_action() else {
                    continue;
                };

                if action.label.trim().is_empty() {
                    return Err(MenubarError::Template(format!(
                        "item {} of menu {:?} has an empty label",
                        item_index, entry.label
                    )));
                }

                if !actions.insert(action.label.as_str()) {
                    tracing::warn!(
                        "Duplicate item label {:?} in menu {:?}",
                        action.label,
                        entry.label
                    );
                }
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON template
    pub fn from_json_str(content: &str) -> Result<Self> {
        let template: Template = serde_json::from_str(content)?;
        template.validate()?;
        Ok(template)
    }

    /// Parse and validate a TOML template (`[[menu]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: TomlTemplate = toml::from_str(content)?;
        let template = Template::new(parsed.menu);
        template.validate()?;
        Ok(template)
    }

    /// Load a template file, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(MenubarError::from)
            .with_context(|| format!("Failed to read template {:?}", path))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let template = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
        .with_context(|| format!("Invalid template {:?}", path))?;

        tracing::info!("Loaded menu template with {} menus from {:?}", template.len(), path);
        Ok(template)
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        Template::new(vec![
            MenuEntry::new(
                "File",
                vec![
                    SubmenuEntry::action("New Tab"),
                    SubmenuEntry::Separator,
                    ActionEntry::new("Quit").with_command("quit").into(),
                ],
            ),
            MenuEntry::new("Edit", vec![SubmenuEntry::action("Copy")]),
        ])
    }

    #[test]
    fn test_find_first_match() {
        let template = Template::new(vec![
            MenuEntry::new("File", vec![SubmenuEntry::action("A")]),
            MenuEntry::new("File", vec![SubmenuEntry::action("B")]),
        ]);

        let entry = template.find("File").unwrap();
        assert_eq!(entry.submenu, vec![SubmenuEntry::action("A")]);
        assert_eq!(template.position("File"), Some(0));
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_find_action_across_menus() {
        let template = sample();
        let action = template.find_action("Quit").unwrap();
        assert_eq!(action.command.as_deref(), Some("quit"));
        assert!(template.find_action("Paste").is_none());
    }

    #[test]
    fn test_visibility_defaults() {
        assert!(ActionEntry::new("x").is_visible());
        assert!(!ActionEntry::new("x").with_visible(false).is_visible());
        assert!(MenuEntry::new("File", Vec::new()).is_visible());
    }

    #[test]
    fn test_validate_rejects_empty_labels() {
        let template = Template::new(vec![MenuEntry::new("  ", Vec::new())]);
        assert!(matches!(template.validate(), Err(MenubarError::Template(_))));

        let template = Template::new(vec![MenuEntry::new(
            "File",
            vec![SubmenuEntry::Separator, SubmenuEntry::action("")],
        )]);
        let err = template.validate().unwrap_err();
        assert!(err.to_string().contains("item 1"));
    }

    #[test]
    fn test_json_format() {
        let json = r#"[
            {"label": "File", "submenu": [
                {"type": "action", "label": "New Tab", "command": "new_tab", "accelerator": "Ctrl+T"},
                {"type": "separator"},
                {"type": "action", "label": "Hidden", "visible": false}
            ]},
            {"label": "Help"}
        ]"#;

        let template = Template::from_json_str(json).unwrap();
        assert_eq!(template.len(), 2);

        let file = template.get(0).unwrap();
        assert!(file.submenu[1].is_separator());
        let hidden = file.submenu[2].as_action().unwrap();
        assert_eq!(hidden.visible, Some(false));
        assert!(template.get(1).unwrap().submenu.is_empty());
    }

    #[test]
    fn test_json_serialization_omits_unset_fields() {
        let json = serde_json::to_string(&SubmenuEntry::action("Copy")).unwrap();
        assert_eq!(json, r#"{"type":"action","label":"Copy"}"#);
        let json = serde_json::to_string(&SubmenuEntry::Separator).unwrap();
        assert_eq!(json, r#"{"type":"separator"}"#);
    }

    #[test]
    fn test_toml_format() {
        let content = r#"
            [[menu]]
            label = "File"

            [[menu.submenu]]
            type = "action"
            label = "New Window"
            command = "new_window"

            [[menu.submenu]]
            type = "separator"

            [[menu]]
            label = "View"
        "#;

        let template = Template::from_toml_str(content).unwrap();
        assert_eq!(template.len(), 2);
        assert_eq!(template.get(0).unwrap().submenu.len(), 2);
        assert_eq!(template.get(1).unwrap().label, "View");
    }

    #[test]
    fn test_unknown_entry_type_is_rejected() {
        let json = r#"[{"label": "File", "submenu": [{"type": "checkbox", "label": "x"}]}]"#;
        assert!(matches!(
            Template::from_json_str(json),
            Err(MenubarError::Serialization(_))
        ));
    }
}
