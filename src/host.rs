//! The seam between the selection controller and its environment.
//!
//! A host knows where the selectable items are, how to flag them as
//! selected, and how to draw the drag rectangle. The DOM implementation
//! lives in `crate::web`; tests drive the controller with an in-memory host.

use crate::error::SelectionResult;
use crate::geometry::Rect;
use crate::types::{ItemId, SelectableItem};

pub trait SelectionHost {
    /// Handle to the drag rectangle element
    type Overlay;

    /// Every selectable item with its current bounding box.
    ///
    /// Ids must be unique within one call; the controller treats items that
    /// share an id as one.
    fn selectable_items(&mut self) -> Vec<SelectableItem>;

    /// Add or remove the "selected" marker on an item.
    fn set_selected(&mut self, id: ItemId, selected: bool);

    /// Create the drag rectangle and place it at `at`.
    fn create_overlay(&mut self, at: Rect) -> SelectionResult<Self::Overlay>;

    /// Move and resize the drag rectangle.
    fn place_overlay(&mut self, overlay: &Self::Overlay, rect: Rect);

    /// The rectangle's bounding box as laid out by the host.
    fn overlay_bounds(&self, overlay: &Self::Overlay) -> Rect;

    /// Detach the drag rectangle. The handle is consumed.
    fn remove_overlay(&mut self, overlay: Self::Overlay);
}
