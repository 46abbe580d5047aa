//! Browser tests for the DOM host and the listener binding.
//!
//! Each test builds its own container with fixed-position items, attaches
//! a binding scoped to that container's items, and drives it with
//! synthetic events dispatched the way the browser would deliver them.

#![cfg(target_arch = "wasm32")]

use marquee_select::SelectionSettings;
use marquee_select::web::{MarqueeSelection, SelectionBinding};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Fixture
// ============================================================================

/// A container holding `.item` elements, removed again on drop.
struct Fixture {
    document: Document,
    container: HtmlElement,
    items: Vec<HtmlElement>,
    name: String,
}

impl Fixture {
    /// Items are given as (left, top, width, height) in viewport pixels.
    fn new(name: &str, items: &[(i32, i32, i32, i32)]) -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        container.set_id(name);
        container.set_inner_html(
            "<style>.item, .selection-area { position: fixed; margin: 0; border: 0; }</style>",
        );
        document.body().unwrap().append_child(&container).unwrap();

        let mut fixture = Self {
            document,
            container,
            items: Vec::new(),
            name: name.to_string(),
        };
        for &(left, top, width, height) in items {
            let item = fixture.add_item(left, top, width, height);
            fixture.items.push(item);
        }
        fixture
    }

    fn add_item(&self, left: i32, top: i32, width: i32, height: i32) -> HtmlElement {
        let item = self
            .document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        item.class_list().add_1("item").unwrap();
        place(&item, left, top, width, height);
        self.container.append_child(&item).unwrap();
        item
    }

    fn settings(&self) -> SelectionSettings {
        SelectionSettings {
            item_selector: format!("#{} .item", self.name),
            ..SelectionSettings::default()
        }
    }

    fn settings_json(&self) -> String {
        self.settings().to_json().unwrap()
    }

    fn attach(&self) -> SelectionBinding {
        SelectionBinding::attach(&self.document, &self.container, self.settings()).unwrap()
    }

    fn overlay_count(&self) -> u32 {
        self.document
            .query_selector_all(".selection-area")
            .unwrap()
            .length()
    }

    /// Press a key on the document; returns whether the default was prevented.
    fn key(&self, kind: &str, key: &str) -> bool {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init).unwrap();
        self.document.dispatch_event(&event).unwrap();
        event.default_prevented()
    }

    fn mouse_on(&self, target: &EventTarget, kind: &str, x: i32, y: i32) {
        let init = MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        init.set_bubbles(true);
        let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    /// Full drag: press on the container, move on the document, release.
    fn drag(&self, from: (i32, i32), to: (i32, i32)) {
        self.mouse_on(&self.container, "mousedown", from.0, from.1);
        self.mouse_on(&self.document, "mousemove", to.0, to.1);
        self.mouse_on(&self.document, "mouseup", to.0, to.1);
    }

    fn selected(&self) -> Vec<bool> {
        self.items.iter().map(|item| is_selected(item)).collect()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.container.remove();
    }
}

fn place(item: &HtmlElement, left: i32, top: i32, width: i32, height: i32) {
    let style = item.style();
    style.set_property("left", &format!("{left}px")).unwrap();
    style.set_property("top", &format!("{top}px")).unwrap();
    style.set_property("width", &format!("{width}px")).unwrap();
    style.set_property("height", &format!("{height}px")).unwrap();
}

fn is_selected(element: &Element) -> bool {
    element.class_list().contains("selected")
}

// ============================================================================
// Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_ctrl_a_selects_all_and_prevents_default() {
    let fixture = Fixture::new(
        "select-all",
        &[(10, 10, 20, 20), (50, 10, 20, 20), (90, 10, 20, 20)],
    );
    let _binding = fixture.attach();

    assert!(!fixture.key("keydown", "Control"));
    assert!(fixture.key("keydown", "a"));
    assert_eq!(fixture.selected(), vec![true, true, true]);

    assert!(!fixture.key("keyup", "Control"));
    assert!(!fixture.key("keydown", "a"));
}

#[wasm_bindgen_test]
fn test_drag_selects_overlapping_items() {
    let fixture = Fixture::new("drag", &[(10, 10, 20, 20), (200, 200, 20, 20)]);
    let _binding = fixture.attach();
    fixture.key("keydown", "Control");

    fixture.mouse_on(&fixture.container, "mousedown", 5, 5);
    assert_eq!(fixture.overlay_count(), 1);

    fixture.mouse_on(&fixture.document, "mousemove", 40, 40);
    assert_eq!(fixture.selected(), vec![true, false]);

    fixture.mouse_on(&fixture.document, "mouseup", 40, 40);
    assert_eq!(fixture.overlay_count(), 0);
    assert_eq!(fixture.selected(), vec![true, false]);

    fixture.key("keyup", "Control");
}

#[wasm_bindgen_test]
fn test_drag_without_modifier_creates_no_overlay() {
    let fixture = Fixture::new("no-modifier", &[(10, 10, 20, 20)]);
    let _binding = fixture.attach();

    fixture.mouse_on(&fixture.container, "mousedown", 5, 5);
    assert_eq!(fixture.overlay_count(), 0);
    fixture.mouse_on(&fixture.document, "mousemove", 40, 40);
    fixture.mouse_on(&fixture.document, "mouseup", 40, 40);
    assert_eq!(fixture.selected(), vec![false]);
}

#[wasm_bindgen_test]
fn test_detach_stops_all_listeners() {
    let fixture = Fixture::new("detach", &[(10, 10, 20, 20), (200, 200, 20, 20)]);
    let mut selection =
        MarqueeSelection::new(fixture.container.clone(), Some(fixture.settings_json())).unwrap();

    fixture.key("keydown", "Control");
    fixture.drag((5, 5), (40, 40));
    fixture.key("keyup", "Control");
    assert_eq!(fixture.selected(), vec![true, false]);
    assert_eq!(selection.selected_count(), 1);

    selection.detach();

    assert!(!fixture.key("keydown", "Control"));
    assert!(!fixture.key("keydown", "a"));
    fixture.mouse_on(&fixture.container, "mousedown", 190, 190);
    assert_eq!(fixture.overlay_count(), 0);
    fixture.mouse_on(&fixture.document, "mousemove", 240, 240);
    fixture.mouse_on(&fixture.document, "mouseup", 240, 240);
    fixture.key("keyup", "Control");

    assert_eq!(fixture.selected(), vec![true, false]);
    assert_eq!(selection.selected_count(), 0);
}

#[wasm_bindgen_test]
fn test_detach_mid_gesture_removes_overlay() {
    let fixture = Fixture::new("detach-mid", &[(10, 10, 20, 20)]);
    let binding = fixture.attach();
    fixture.key("keydown", "Control");
    fixture.mouse_on(&fixture.container, "mousedown", 5, 5);
    assert_eq!(fixture.overlay_count(), 1);

    binding.detach();

    assert_eq!(fixture.overlay_count(), 0);
    fixture.key("keyup", "Control");
}

#[wasm_bindgen_test]
fn test_cloned_item_is_tracked_separately() {
    let fixture = Fixture::new("clone", &[(10, 10, 20, 20)]);
    let _binding = fixture.attach();
    fixture.key("keydown", "Control");

    // Stamp the source with a drag that touches nothing.
    fixture.drag((300, 300), (301, 301));
    let source = &fixture.items[0];
    assert!(source.has_attribute("data-marquee-id"));

    let copy = source
        .clone_node_with_deep(true)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    place(&copy, 200, 200, 20, 20);
    fixture.container.append_child(&copy).unwrap();

    fixture.drag((0, 0), (40, 40));
    assert!(is_selected(source));
    assert!(!is_selected(&copy));

    fixture.drag((190, 190), (240, 240));
    assert!(!is_selected(source));
    assert!(is_selected(&copy));
    assert_ne!(
        source.get_attribute("data-marquee-id"),
        copy.get_attribute("data-marquee-id")
    );

    fixture.key("keyup", "Control");
}

#[wasm_bindgen_test]
fn test_re_attach_keeps_ids_unique() {
    let fixture = Fixture::new("re-attach", &[(10, 10, 20, 20)]);
    let binding = fixture.attach();
    fixture.key("keydown", "Control");
    fixture.drag((300, 300), (301, 301));
    fixture.key("keyup", "Control");
    binding.detach();

    // A new unstamped item ahead of the stamped one in document order.
    let first = fixture.add_item(200, 200, 20, 20);
    fixture
        .container
        .insert_before(&first, Some(&fixture.items[0]))
        .unwrap();

    let _binding = fixture.attach();
    fixture.key("keydown", "Control");
    fixture.drag((0, 0), (40, 40));

    assert!(is_selected(&fixture.items[0]));
    assert!(!is_selected(&first));
    fixture.key("keyup", "Control");
}
