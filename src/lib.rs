//! Modifier-gated drag-rectangle multi-selection.
//!
//! Hold a modifier (Control or Meta by default) and drag over the page: a
//! rectangle follows the pointer and every item it overlaps is selected.
//! Items that leave the rectangle are deselected again. Modifier + `a`
//! selects everything.
//!
//! The behavior lives in [`SelectionController`], which talks to the page
//! through the [`SelectionHost`] trait. With the `web` feature the crate
//! also ships a DOM host and a listener binding for wasm32.

pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod item_ids;
pub mod logging;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod types;

#[cfg(feature = "web")]
pub mod web;

pub use controller::SelectionController;
pub use error::{SelectionError, SelectionResult};
pub use geometry::{Point, Rect};
pub use host::SelectionHost;
pub use input::{GestureEvent, InputSource};
pub use selection::{SelectedSet, SelectionSnapshot, SelectionState};
pub use settings::{SelectionSettings, SettingsError};
pub use types::{ItemId, KeyOutcome, SelectableItem};
