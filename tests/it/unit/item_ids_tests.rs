//! Unit tests for item id allocation feeding the controller.

use crate::helpers::{assert_markers_match, ControllerBuilder};
use marquee_select::item_ids::{ItemIdAllocator, ItemStamp};
use marquee_select::{ItemId, Point};

#[test]
fn test_copied_id_is_restamped_and_selected_separately() {
    // Two elements carrying the same stamped id, e.g. after cloneNode.
    let mut ids = ItemIdAllocator::new();
    let stamps = ids.assign(&[Some(1), Some(1)]);
    let first = stamps[0].id().unwrap();
    let second = stamps[1].id().unwrap();
    assert_eq!(stamps[0], ItemStamp::Existing(ItemId(1)));
    assert_ne!(first, second);

    let mut controller = ControllerBuilder::new()
        .with_item(first.0, (0.0, 0.0, 20.0, 20.0))
        .with_item(second.0, (100.0, 100.0, 120.0, 120.0))
        .build();
    controller.on_modifier_down("Control");
    controller.on_gesture_start(Point::new(0.0, 0.0));
    controller.on_gesture_move(Point::new(30.0, 30.0));

    assert!(controller.is_selected(first));
    assert!(!controller.is_selected(second));
    assert_eq!(controller.selected().len(), 1);
    assert_eq!(controller.host().marker_writes, 1);
    assert_markers_match(&controller);
}

#[test]
fn test_new_allocator_respects_ids_from_earlier_instance() {
    // First instance stamps two items and goes away.
    let mut earlier = ItemIdAllocator::new();
    let stamped: Vec<u64> = earlier
        .assign(&[None, None])
        .into_iter()
        .filter_map(|stamp| stamp.id())
        .map(|id| id.0)
        .collect();
    assert_eq!(stamped, vec![1, 2]);

    // A re-attached instance meets a new unstamped item ahead of them.
    let mut later = ItemIdAllocator::new();
    let stamps = later.assign(&[None, Some(1), Some(2)]);
    assert_eq!(
        stamps,
        vec![
            ItemStamp::Fresh(ItemId(3)),
            ItemStamp::Existing(ItemId(1)),
            ItemStamp::Existing(ItemId(2)),
        ]
    );
}

#[test]
fn test_unparseable_ids_count_as_unstamped() {
    let mut ids = ItemIdAllocator::new();
    let parsed: Vec<Option<u64>> = ["7", "x", "-1"]
        .iter()
        .map(|raw| raw.parse::<u64>().ok())
        .collect();
    assert_eq!(
        ids.assign(&parsed),
        vec![
            ItemStamp::Existing(ItemId(7)),
            ItemStamp::Fresh(ItemId(8)),
            ItemStamp::Fresh(ItemId(9)),
        ]
    );
}
