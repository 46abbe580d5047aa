//! Selection settings: key bindings and DOM marker names.
//!
//! Settings are plain serde data. Hosts typically embed them as JSON; any
//! field left out falls back to the defaults in [`crate::constants`].

use crate::constants::{
    DEFAULT_ITEM_SELECTOR, DEFAULT_MODIFIER_KEYS, DEFAULT_OVERLAY_CLASS, DEFAULT_SELECT_ALL_KEY,
    DEFAULT_SELECTED_CLASS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// CSS selector matching selectable items
    pub item_selector: String,
    /// Class marking an item as selected
    pub selected_class: String,
    /// Class given to the drag rectangle
    pub overlay_class: String,
    /// `KeyboardEvent.key` values that gate gestures
    pub modifier_keys: Vec<String>,
    /// Select-all key, matched case-insensitively while a modifier is held
    pub select_all_key: String,
    /// Clear the selection whenever a new gesture starts
    pub reset_on_gesture_start: bool,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
            overlay_class: DEFAULT_OVERLAY_CLASS.to_string(),
            modifier_keys: DEFAULT_MODIFIER_KEYS.iter().map(|k| k.to_string()).collect(),
            select_all_key: DEFAULT_SELECT_ALL_KEY.to_string(),
            reset_on_gesture_start: false,
        }
    }
}

impl SelectionSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.item_selector.trim().is_empty() {
            return Err(invalid("item_selector", "must not be empty"));
        }
        check_class_name("selected_class", &self.selected_class)?;
        check_class_name("overlay_class", &self.overlay_class)?;

        if self.modifier_keys.is_empty() {
            return Err(invalid("modifier_keys", "at least one modifier key is required"));
        }
        if self.modifier_keys.iter().any(|k| k.is_empty()) {
            return Err(invalid("modifier_keys", "key names must not be empty"));
        }
        if self.select_all_key.chars().count() != 1 {
            return Err(invalid(
                "select_all_key",
                format!("expected a single character, got {:?}", self.select_all_key),
            ));
        }
        Ok(())
    }

    /// Returns true if `key` is one of the gating modifiers
    pub fn is_modifier(&self, key: &str) -> bool {
        self.modifier_keys.iter().any(|k| k == key)
    }

    /// Returns true if `key` is the select-all key, ignoring case
    pub fn is_select_all(&self, key: &str) -> bool {
        key.to_lowercase() == self.select_all_key.to_lowercase()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_class_name(field: &'static str, class: &str) -> Result<(), SettingsError> {
    if class.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if class.chars().any(char::is_whitespace) {
        return Err(invalid(field, "class names cannot contain whitespace"));
    }
    Ok(())
}
