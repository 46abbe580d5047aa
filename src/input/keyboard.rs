//! Keyboard handling - modifier tracking and the select-all shortcut.

use crate::controller::SelectionController;
use crate::host::SelectionHost;
use crate::types::KeyOutcome;

impl<H: SelectionHost> SelectionController<H> {
    /// Record a modifier press. Keys that are not modifiers are ignored.
    pub fn on_modifier_down(&mut self, key: &str) {
        if self.settings.is_modifier(key) && !self.state.modifier_held() {
            self.state.set_modifier_held(true);
            tracing::debug!(key, "Modifier down");
        }
    }

    /// Record a modifier release. Keys that are not modifiers are ignored.
    pub fn on_modifier_up(&mut self, key: &str) {
        if self.settings.is_modifier(key) && self.state.modifier_held() {
            self.state.set_modifier_held(false);
            tracing::debug!(key, "Modifier up");
        }
    }

    /// Select and mark every selectable item.
    pub fn on_select_all_shortcut(&mut self) {
        let items = self.host.selectable_items();
        let mut added = 0usize;
        for item in &items {
            if self.select(item.id) {
                added += 1;
            }
        }
        tracing::debug!(total = items.len(), added, "Select all");
    }

    /// Key-down dispatcher.
    ///
    /// Tracks the modifier, and fires select-all when the select-all key is
    /// pressed with a modifier held. The shortcut consumes the event so the
    /// platform's own select-all does not run.
    pub fn handle_key_down(&mut self, key: &str) -> KeyOutcome {
        tracing::trace!(key, "Key down");
        self.on_modifier_down(key);

        if self.state.modifier_held() && self.settings.is_select_all(key) {
            self.on_select_all_shortcut();
            return KeyOutcome::PreventDefault;
        }
        KeyOutcome::Default
    }

    /// Key-up dispatcher.
    pub fn handle_key_up(&mut self, key: &str) {
        tracing::trace!(key, "Key up");
        self.on_modifier_up(key);
    }
}
