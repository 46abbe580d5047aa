//! Gesture move - resizes the drag rectangle and syncs the selection.
//!
//! Move events arrive at pointer rate while a gesture is active and exit
//! early when none is. Items can be laid out differently between two moves,
//! so the item list and its R-tree are rebuilt from the host on every move.
//! The host marker is only written for items whose membership flips.

use crate::controller::SelectionController;
use crate::geometry::{Point, Rect};
use crate::host::SelectionHost;
use crate::spatial_index::ItemIndex;
use crate::types::ItemId;
use std::collections::HashSet;

impl<H: SelectionHost> SelectionController<H> {
    pub fn on_gesture_move(&mut self, position: Point) {
        let Some(gesture) = self.state.gesture() else {
            return;
        };

        let rect = Rect::spanning(gesture.origin, position);
        self.host.place_overlay(&gesture.overlay, rect);
        let bounds = self.host.overlay_bounds(&gesture.overlay);

        self.sync_selection(&bounds);
    }

    /// Re-derive selection membership from overlap with `bounds`.
    ///
    /// Applies to every item on the page, not only the ones this gesture
    /// touched: anything selected earlier that lies outside `bounds` is
    /// deselected.
    fn sync_selection(&mut self, bounds: &Rect) {
        let items = self.host.selectable_items();
        let index = ItemIndex::from_items(&items);
        let hits: HashSet<ItemId> = index.query_intersecting(bounds).into_iter().collect();

        let mut added = 0usize;
        let mut removed = 0usize;
        for item in &items {
            if hits.contains(&item.id) {
                if self.select(item.id) {
                    added += 1;
                }
            } else if self.deselect(item.id) {
                removed += 1;
            }
        }

        tracing::trace!(
            items = items.len(),
            hits = hits.len(),
            added,
            removed,
            "Selection synced"
        );
    }
}
