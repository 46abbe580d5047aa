//! Unified gesture events.
//!
//! ```text
//! mousedown / touchstart  -> GestureEvent::Start
//! mousemove / touchmove   -> GestureEvent::Move
//! mouseup   / touchend    -> GestureEvent::End
//! ```

use crate::controller::SelectionController;
use crate::geometry::Point;
use crate::host::SelectionHost;

/// Where a gesture event came from. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed or finger down at a position
    Start(Point),
    /// Pointer or finger moved to a position
    Move(Point),
    /// Pointer released or finger lifted
    End,
}

impl GestureEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Start(p) | Self::Move(p) => Some(*p),
            Self::End => None,
        }
    }
}

impl<H: SelectionHost> SelectionController<H> {
    /// Route a gesture event to its handler.
    pub fn handle_gesture(&mut self, source: InputSource, event: GestureEvent) {
        match event {
            GestureEvent::Start(position) => {
                tracing::trace!(?source, x = position.x, y = position.y, "Gesture start");
                self.on_gesture_start(position);
            }
            GestureEvent::Move(position) => self.on_gesture_move(position),
            GestureEvent::End => {
                tracing::trace!(?source, "Gesture end");
                self.on_gesture_end();
            }
        }
    }
}
