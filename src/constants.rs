//! Default selectors, class names and key bindings.
//!
//! Centralizes the strings the selection controller and the DOM host agree
//! on so that settings defaults and tests read from one place.

// ============================================================================
// DOM Markers
// ============================================================================

/// CSS selector matching selectable items
pub const DEFAULT_ITEM_SELECTOR: &str = ".item";

/// Class toggled on items that are part of the selection
pub const DEFAULT_SELECTED_CLASS: &str = "selected";

/// Class given to the drag rectangle element
pub const DEFAULT_OVERLAY_CLASS: &str = "selection-area";

/// Attribute the DOM host stamps on items to give them a stable identity
pub const ITEM_ID_ATTRIBUTE: &str = "data-marquee-id";

// ============================================================================
// Key Bindings
// ============================================================================

/// `KeyboardEvent.key` values that gate selection gestures
pub const DEFAULT_MODIFIER_KEYS: [&str; 2] = ["Control", "Meta"];

/// Key that selects every item while a modifier is held
pub const DEFAULT_SELECT_ALL_KEY: &str = "a";
