//! Browser binding.
//!
//! - `dom_host` - [`DomHost`], the [`SelectionHost`](crate::SelectionHost) over a `web_sys::Document`
//! - `binding` - [`SelectionBinding`], which owns the event listeners
//!
//! [`MarqueeSelection`] wraps the binding for JavaScript callers:
//!
//! ```js
//! import init, { MarqueeSelection, initLogging } from "marquee_select";
//! await init();
//! initLogging();
//! const selection = new MarqueeSelection(container, null);
//! // later, when the component goes away
//! selection.detach();
//! ```

mod binding;
mod dom_host;

pub use binding::SelectionBinding;
pub use dom_host::DomHost;

use crate::error::SelectionError;
use crate::settings::SelectionSettings;
use wasm_bindgen::prelude::*;

impl From<SelectionError> for JsValue {
    fn from(error: SelectionError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Stringify a thrown JS value for error reporting.
pub(crate) fn js_error(value: JsValue) -> SelectionError {
    SelectionError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    crate::logging::init();
}

/// Drag selection attached to one container element.
#[wasm_bindgen]
pub struct MarqueeSelection {
    binding: Option<SelectionBinding>,
}

#[wasm_bindgen]
impl MarqueeSelection {
    /// Attach to `container`. `settings` is optional settings JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: web_sys::HtmlElement,
        settings: Option<String>,
    ) -> Result<MarqueeSelection, JsValue> {
        let settings = match settings {
            Some(json) => SelectionSettings::from_json(&json).map_err(SelectionError::from)?,
            None => SelectionSettings::default(),
        };
        let document = container
            .owner_document()
            .ok_or(SelectionError::MissingDocument)?;
        let binding = SelectionBinding::attach(&document, &container, settings)?;
        Ok(Self {
            binding: Some(binding),
        })
    }

    /// Remove every listener this instance registered.
    pub fn detach(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.detach();
        }
    }

    /// Deselect everything.
    pub fn clear(&self) {
        if let Some(binding) = &self.binding {
            binding.with_controller(|controller| controller.clear_selection());
        }
    }

    #[wasm_bindgen(js_name = selectedCount)]
    pub fn selected_count(&self) -> usize {
        self.binding
            .as_ref()
            .and_then(|binding| binding.with_controller(|controller| controller.selected().len()))
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter, js_name = isSelecting)]
    pub fn is_selecting(&self) -> bool {
        self.binding
            .as_ref()
            .and_then(|binding| binding.with_controller(|controller| controller.is_active()))
            .unwrap_or(false)
    }
}
