//! Selection state owned by a single controller instance.
//!
//! `SelectionState` folds the "gesture active" flag, the gesture origin and
//! the overlay handle into one `Option`, so an overlay can only exist while
//! a gesture is active and vice versa.

use crate::geometry::Point;
use crate::types::ItemId;
use serde::Serialize;
use std::collections::HashSet;

/// Ids of the currently selected items.
#[derive(Debug, Clone, Default)]
pub struct SelectedSet {
    ids: HashSet<ItemId>,
}

impl SelectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not already present.
    pub fn insert(&mut self, id: ItemId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if the id was present.
    pub fn remove(&mut self, id: ItemId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    /// Ids in ascending order, for stable output.
    pub fn sorted(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Remove every id, returning what was selected.
    pub fn take(&mut self) -> Vec<ItemId> {
        self.ids.drain().collect()
    }
}

/// A drag gesture in progress.
#[derive(Debug)]
pub struct ActiveGesture<O> {
    /// Pointer position when the gesture started
    pub origin: Point,
    /// Host handle of the drag rectangle element
    pub overlay: O,
}

/// Transient per-controller state.
#[derive(Debug)]
pub struct SelectionState<O> {
    modifier_held: bool,
    gesture: Option<ActiveGesture<O>>,
}

impl<O> Default for SelectionState<O> {
    fn default() -> Self {
        Self {
            modifier_held: false,
            gesture: None,
        }
    }
}

impl<O> SelectionState<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a drag gesture is in progress
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }

    pub fn set_modifier_held(&mut self, held: bool) {
        self.modifier_held = held;
    }

    pub fn origin(&self) -> Option<Point> {
        self.gesture.as_ref().map(|g| g.origin)
    }

    pub fn overlay(&self) -> Option<&O> {
        self.gesture.as_ref().map(|g| &g.overlay)
    }

    pub fn gesture(&self) -> Option<&ActiveGesture<O>> {
        self.gesture.as_ref()
    }

    /// Start a gesture, handing back any gesture it replaces.
    pub fn begin(&mut self, origin: Point, overlay: O) -> Option<ActiveGesture<O>> {
        self.gesture.replace(ActiveGesture { origin, overlay })
    }

    /// End the current gesture, if any.
    pub fn finish(&mut self) -> Option<ActiveGesture<O>> {
        self.gesture.take()
    }
}

/// Serializable view of a controller, for logs and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSnapshot {
    pub active: bool,
    pub modifier_held: bool,
    pub origin: Option<Point>,
    pub selected: Vec<ItemId>,
}
