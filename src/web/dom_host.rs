//! DOM implementation of the selection host.

use super::js_error;
use crate::constants::ITEM_ID_ATTRIBUTE;
use crate::error::{SelectionError, SelectionResult};
use crate::geometry::Rect;
use crate::host::SelectionHost;
use crate::item_ids::{ItemIdAllocator, ItemStamp};
use crate::settings::SelectionSettings;
use crate::types::{ItemId, SelectableItem};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, HtmlElement};

pub struct DomHost {
    document: Document,
    item_selector: String,
    selected_class: String,
    overlay_class: String,
    ids: ItemIdAllocator,
    /// Elements seen by the last item query, by id
    elements: HashMap<ItemId, Element>,
}

impl DomHost {
    pub fn new(document: Document, settings: &SelectionSettings) -> Self {
        Self {
            document,
            item_selector: settings.item_selector.clone(),
            selected_class: settings.selected_class.clone(),
            overlay_class: settings.overlay_class.clone(),
            ids: ItemIdAllocator::new(),
            elements: HashMap::new(),
        }
    }

    /// Stamp `id` onto `element`.
    fn stamp(element: &Element, id: ItemId) {
        if let Err(e) = element.set_attribute(ITEM_ID_ATTRIBUTE, &id.to_string()) {
            tracing::warn!("Failed to tag item {}: {}", id, js_error(e));
        }
    }
}

fn to_rect(rect: DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

fn set_px(element: &HtmlElement, property: &str, value: f64) {
    if let Err(e) = element.style().set_property(property, &format!("{value}px")) {
        tracing::warn!("Failed to set overlay {}: {}", property, js_error(e));
    }
}

impl SelectionHost for DomHost {
    type Overlay = HtmlElement;

    fn selectable_items(&mut self) -> Vec<SelectableItem> {
        let nodes = match self.document.query_selector_all(&self.item_selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!("Item query `{}` failed: {}", self.item_selector, js_error(e));
                return Vec::new();
            }
        };

        let elements: Vec<Element> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        let existing: Vec<Option<u64>> = elements
            .iter()
            .map(|element| {
                element
                    .get_attribute(ITEM_ID_ATTRIBUTE)
                    .and_then(|value| value.parse::<u64>().ok())
            })
            .collect();
        let stamps = self.ids.assign(&existing);

        self.elements.clear();
        let mut items = Vec::with_capacity(elements.len());
        for (element, stamp) in elements.into_iter().zip(stamps) {
            let id = match stamp {
                ItemStamp::Existing(id) => id,
                ItemStamp::Fresh(id) => {
                    Self::stamp(&element, id);
                    id
                }
                ItemStamp::Exhausted => {
                    tracing::warn!("Item ids exhausted, skipping element");
                    continue;
                }
            };
            items.push(SelectableItem {
                id,
                bounds: to_rect(element.get_bounding_client_rect()),
            });
            self.elements.insert(id, element);
        }
        items
    }

    fn set_selected(&mut self, id: ItemId, selected: bool) {
        let Some(element) = self.elements.get(&id) else {
            return;
        };
        let class_list = element.class_list();
        let result = if selected {
            class_list.add_1(&self.selected_class)
        } else {
            class_list.remove_1(&self.selected_class)
        };
        if let Err(e) = result {
            tracing::warn!("Failed to update marker on item {}: {}", id, js_error(e));
        }
    }

    fn create_overlay(&mut self, at: Rect) -> SelectionResult<HtmlElement> {
        let overlay = self
            .document
            .create_element("div")
            .map_err(js_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SelectionError::Dom("created element is not an HtmlElement".into()))?;
        overlay
            .class_list()
            .add_1(&self.overlay_class)
            .map_err(js_error)?;

        let body = self.document.body().ok_or(SelectionError::MissingBody)?;
        body.append_child(&overlay).map_err(js_error)?;

        set_px(&overlay, "left", at.left);
        set_px(&overlay, "top", at.top);
        Ok(overlay)
    }

    fn place_overlay(&mut self, overlay: &HtmlElement, rect: Rect) {
        set_px(overlay, "left", rect.left);
        set_px(overlay, "top", rect.top);
        set_px(overlay, "width", rect.width());
        set_px(overlay, "height", rect.height());
    }

    fn overlay_bounds(&self, overlay: &HtmlElement) -> Rect {
        to_rect(overlay.get_bounding_client_rect())
    }

    fn remove_overlay(&mut self, overlay: HtmlElement) {
        overlay.remove();
    }
}
