//! Identifiers and item descriptions shared by the controller and hosts.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a selectable item, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A selectable item as reported by the host at query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectableItem {
    pub id: ItemId,
    pub bounds: Rect,
}

impl SelectableItem {
    pub fn new(id: impl Into<ItemId>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// What the host should do with the key event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum KeyOutcome {
    /// Let the platform run its default action
    Default,
    /// The event was consumed; suppress the platform default
    PreventDefault,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}
