//! Gesture start - creates the drag rectangle when the modifier is held.

use crate::controller::SelectionController;
use crate::geometry::{Point, Rect};
use crate::host::SelectionHost;

impl<H: SelectionHost> SelectionController<H> {
    pub fn on_gesture_start(&mut self, position: Point) {
        if !self.state.modifier_held() {
            return;
        }

        // A start without an end in between (lost mouseup, second finger)
        // must not leave the previous rectangle behind.
        if let Some(stale) = self.state.finish() {
            tracing::debug!("Replacing unfinished gesture");
            self.host.remove_overlay(stale.overlay);
        }

        if self.settings.reset_on_gesture_start {
            self.clear_selection();
        }

        match self.host.create_overlay(Rect::at(position)) {
            Ok(overlay) => {
                let replaced = self.state.begin(position, overlay);
                debug_assert!(replaced.is_none(), "stale gesture finished above");
                tracing::debug!(x = position.x, y = position.y, "Selection gesture started");
            }
            Err(e) => {
                tracing::warn!("Failed to create selection overlay: {}", e);
            }
        }
    }
}
