//! Item id allocation for hosts that stamp ids onto page elements.
//!
//! Elements can arrive already carrying an id: stamped by an earlier host
//! on the same page, or copied along by `cloneNode`. Each pass therefore
//! reserves every id already present before handing out fresh ones, and an
//! id seen twice in one pass is only kept by its first holder.

use crate::types::ItemId;
use std::collections::HashSet;

/// Outcome of id assignment for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStamp {
    /// Keep the id the element already carries
    Existing(ItemId),
    /// Stamp this newly allocated id onto the element
    Fresh(ItemId),
    /// No id left to allocate; the element is not selectable
    Exhausted,
}

impl ItemStamp {
    pub fn id(self) -> Option<ItemId> {
        match self {
            Self::Existing(id) | Self::Fresh(id) => Some(id),
            Self::Exhausted => None,
        }
    }
}

/// Hands out ids above every id seen so far.
#[derive(Debug, Clone)]
pub struct ItemIdAllocator {
    /// Next free id, `None` once the id space is used up
    next: Option<u64>,
}

impl Default for ItemIdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl ItemIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign ids to elements in document order, given the parsed id each
    /// element currently carries.
    pub fn assign(&mut self, existing: &[Option<u64>]) -> Vec<ItemStamp> {
        if let Some(max) = existing.iter().flatten().copied().max() {
            let above = max.checked_add(1);
            self.next = match (self.next, above) {
                (Some(next), Some(above)) => Some(next.max(above)),
                _ => None,
            };
        }

        let mut seen = HashSet::with_capacity(existing.len());
        existing
            .iter()
            .map(|current| match current {
                Some(id) if seen.insert(*id) => ItemStamp::Existing(ItemId(*id)),
                _ => self.allocate(&mut seen),
            })
            .collect()
    }

    fn allocate(&mut self, seen: &mut HashSet<u64>) -> ItemStamp {
        let Some(id) = self.next else {
            return ItemStamp::Exhausted;
        };
        self.next = id.checked_add(1);
        seen.insert(id);
        ItemStamp::Fresh(ItemId(id))
    }
}
