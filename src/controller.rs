//! The selection controller.
//!
//! `SelectionController` owns the selection state and the selected set for
//! one container and drives a [`SelectionHost`]. Its event handlers live in
//! the `input` module, split by event kind:
//!
//! - `input::keyboard` - modifier tracking and the select-all shortcut
//! - `input::gesture_start` - begins a drag rectangle
//! - `input::gesture_move` - resizes the rectangle and syncs the selection
//! - `input::gesture_end` - removes the rectangle
//!
//! Handlers never fail outward. Events that arrive in the wrong state are
//! ignored, and host failures are logged.

use crate::host::SelectionHost;
use crate::selection::{SelectedSet, SelectionSnapshot, SelectionState};
use crate::settings::SelectionSettings;
use crate::types::ItemId;

pub struct SelectionController<H: SelectionHost> {
    pub(crate) host: H,
    pub(crate) settings: SelectionSettings,
    pub(crate) state: SelectionState<H::Overlay>,
    pub(crate) selected: SelectedSet,
}

impl<H: SelectionHost> SelectionController<H> {
    pub fn new(host: H, settings: SelectionSettings) -> Self {
        Self {
            host,
            settings,
            state: SelectionState::new(),
            selected: SelectedSet::new(),
        }
    }

    pub fn with_default_settings(host: H) -> Self {
        Self::new(host, SelectionSettings::default())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &SelectionSettings {
        &self.settings
    }

    pub fn state(&self) -> &SelectionState<H::Overlay> {
        &self.state
    }

    pub fn selected(&self) -> &SelectedSet {
        &self.selected
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(id)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn modifier_held(&self) -> bool {
        self.state.modifier_held()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            active: self.state.is_active(),
            modifier_held: self.state.modifier_held(),
            origin: self.state.origin(),
            selected: self.selected.sorted(),
        }
    }

    /// Add `id` to the selection and mark it. No-op if already selected.
    pub(crate) fn select(&mut self, id: ItemId) -> bool {
        if self.selected.insert(id) {
            self.host.set_selected(id, true);
            true
        } else {
            false
        }
    }

    /// Remove `id` from the selection and unmark it. No-op if not selected.
    pub(crate) fn deselect(&mut self, id: ItemId) -> bool {
        if self.selected.remove(id) {
            self.host.set_selected(id, false);
            true
        } else {
            false
        }
    }

    /// Unmark every selected item and empty the selection.
    pub fn clear_selection(&mut self) {
        let cleared = self.selected.take();
        for id in &cleared {
            self.host.set_selected(*id, false);
        }
        if !cleared.is_empty() {
            tracing::debug!(count = cleared.len(), "Selection cleared");
        }
    }

    /// End any gesture in progress and release its overlay.
    ///
    /// Selection markers stay on the items; they belong to the page.
    pub fn teardown(&mut self) {
        if let Some(gesture) = self.state.finish() {
            self.host.remove_overlay(gesture.overlay);
            tracing::debug!("Active gesture dropped on teardown");
        }
        self.state.set_modifier_held(false);
    }

    /// Tear down and hand the host back.
    pub fn into_host(mut self) -> H {
        self.teardown();
        self.host
    }
}
