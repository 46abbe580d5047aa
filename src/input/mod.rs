//! Keyboard and gesture input handling for the selection controller.
//!
//! Mouse and touch input are folded into one [`GestureEvent`] stream before
//! they reach the controller, so the rectangle and sync logic exists once.
//!
//! ## Modules
//!
//! - `gesture` - Unified gesture events and dispatch
//! - `keyboard` - Modifier tracking and the select-all shortcut
//! - `gesture_start` - Gesture start (overlay creation)
//! - `gesture_move` - Gesture move (overlay resize, selection sync)
//! - `gesture_end` - Gesture end (overlay removal)

mod gesture;
mod gesture_end;
mod gesture_move;
mod gesture_start;
mod keyboard;

pub use gesture::{GestureEvent, InputSource};
