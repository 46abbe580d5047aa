//! Spatial Index Module
//!
//! R-tree over item bounding boxes. The controller rebuilds it from the
//! host's item list on every sync and queries it with the overlay bounds,
//! so only candidates near the overlay go through the strict overlap test.

use crate::geometry::Rect;
use crate::types::{ItemId, SelectableItem};
use rstar::{AABB, RTree, RTreeObject};

/// A spatial entry representing an item's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub bounds: Rect,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.left, self.bounds.top],
            [self.bounds.right, self.bounds.bottom],
        )
    }
}

/// Spatial index for selectable items using an R-tree.
pub struct ItemIndex {
    tree: RTree<SpatialEntry>,
}

impl ItemIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from the host's current items.
    pub fn from_items(items: &[SelectableItem]) -> Self {
        let entries: Vec<SpatialEntry> = items
            .iter()
            .map(|item| SpatialEntry {
                item_id: item.id,
                bounds: item.bounds,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Items strictly overlapping `rect`.
    ///
    /// The R-tree envelope query is inclusive, so edge-touching candidates
    /// are filtered out here.
    pub fn query_intersecting(&self, rect: &Rect) -> Vec<ItemId> {
        let envelope = AABB::from_corners([rect.left, rect.top], [rect.right, rect.bottom]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.intersects(rect))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for ItemIndex {
    fn default() -> Self {
        Self::new()
    }
}
