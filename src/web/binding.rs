//! Event listener binding.
//!
//! `SelectionBinding` registers the listeners the controller needs and
//! keeps every handle. Dropping the binding drops the handles, which
//! detaches exactly the closures that were registered.
//!
//! | Event        | Target    | Controller call              |
//! |--------------|-----------|------------------------------|
//! | `keydown`    | document  | `handle_key_down`            |
//! | `keyup`      | document  | `handle_key_up`              |
//! | `mousedown`  | container | `GestureEvent::Start`        |
//! | `mousemove`  | document  | `GestureEvent::Move`         |
//! | `mouseup`    | document  | `GestureEvent::End`          |
//! | `touchstart` | container | `GestureEvent::Start`        |
//! | `touchmove`  | container | `GestureEvent::Move`         |
//! | `touchend`   | container | `GestureEvent::End`          |

use super::DomHost;
use crate::controller::SelectionController;
use crate::error::SelectionResult;
use crate::geometry::Point;
use crate::input::{GestureEvent, InputSource};
use crate::settings::SelectionSettings;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, MouseEvent, TouchEvent};

type SharedController = Rc<RefCell<SelectionController<DomHost>>>;

pub struct SelectionBinding {
    controller: SharedController,
    listeners: Vec<EventListener>,
}

impl SelectionBinding {
    /// Validate `settings`, then wire a new controller to `document` and
    /// `container`.
    pub fn attach(
        document: &Document,
        container: &Element,
        settings: SelectionSettings,
    ) -> SelectionResult<Self> {
        settings.validate()?;

        let host = DomHost::new(document.clone(), &settings);
        let controller = Rc::new(RefCell::new(SelectionController::new(host, settings)));
        let listeners = install_listeners(&controller, document, container);

        tracing::debug!(listeners = listeners.len(), "Selection binding attached");
        Ok(Self {
            controller,
            listeners,
        })
    }

    /// Run `f` against the controller. Returns `None` if the controller is
    /// busy dispatching an event.
    pub fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut SelectionController<DomHost>) -> R,
    ) -> Option<R> {
        let mut controller = self.controller.try_borrow_mut().ok()?;
        Some(f(&mut controller))
    }

    /// Detach all listeners and drop any in-flight gesture.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for SelectionBinding {
    fn drop(&mut self) {
        let count = self.listeners.len();
        self.listeners.clear();
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.teardown();
        }
        tracing::debug!(listeners = count, "Selection binding detached");
    }
}

/// Run `f` on the controller unless it is already borrowed by an outer
/// dispatch.
fn dispatch<R>(
    controller: &SharedController,
    f: impl FnOnce(&mut SelectionController<DomHost>) -> R,
) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut controller) => Some(f(&mut controller)),
        Err(_) => {
            tracing::warn!("Re-entrant selection event dropped");
            None
        }
    }
}

fn mouse_position(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

fn first_touch_position(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().item(0)?;
    Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

fn install_listeners(
    controller: &SharedController,
    document: &Document,
    container: &Element,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    // Keyboard
    let ctrl = Rc::clone(controller);
    let listener = EventListener::new_with_options(
        document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            if dispatch(&ctrl, |c| c.handle_key_down(&key)).is_some_and(|o| o.prevents_default()) {
                event.prevent_default();
            }
        },
    );
    listeners.push(listener);

    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(document, "keyup", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        dispatch(&ctrl, |c| c.handle_key_up(&key));
    });
    listeners.push(listener);

    // Mouse
    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(container, "mousedown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let start = GestureEvent::Start(mouse_position(event));
        dispatch(&ctrl, |c| c.handle_gesture(InputSource::Mouse, start));
    });
    listeners.push(listener);

    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(document, "mousemove", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let mv = GestureEvent::Move(mouse_position(event));
        dispatch(&ctrl, |c| c.handle_gesture(InputSource::Mouse, mv));
    });
    listeners.push(listener);

    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(document, "mouseup", move |_event: &Event| {
        dispatch(&ctrl, |c| c.handle_gesture(InputSource::Mouse, GestureEvent::End));
    });
    listeners.push(listener);

    // Touch
    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(container, "touchstart", move |event: &Event| {
        let Some(position) = event.dyn_ref::<TouchEvent>().and_then(first_touch_position) else {
            return;
        };
        dispatch(&ctrl, |c| {
            c.handle_gesture(InputSource::Touch, GestureEvent::Start(position))
        });
    });
    listeners.push(listener);

    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(container, "touchmove", move |event: &Event| {
        let Some(position) = event.dyn_ref::<TouchEvent>().and_then(first_touch_position) else {
            return;
        };
        dispatch(&ctrl, |c| {
            c.handle_gesture(InputSource::Touch, GestureEvent::Move(position))
        });
    });
    listeners.push(listener);

    let ctrl = Rc::clone(controller);
    let listener = EventListener::new(container, "touchend", move |_event: &Event| {
        dispatch(&ctrl, |c| c.handle_gesture(InputSource::Touch, GestureEvent::End));
    });
    listeners.push(listener);

    listeners
}
