//! Gesture end - removes the drag rectangle. The selection is kept.

use crate::controller::SelectionController;
use crate::host::SelectionHost;

impl<H: SelectionHost> SelectionController<H> {
    pub fn on_gesture_end(&mut self) {
        let Some(gesture) = self.state.finish() else {
            return;
        };

        self.host.remove_overlay(gesture.overlay);
        tracing::debug!(selected = self.selected.len(), "Selection gesture ended");
    }
}
