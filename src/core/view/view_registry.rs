//=========================================================================
// View Registry
//=========================================================================
//
// Maps each resting `ViewState` to the view instance that serves it.
//
// Views are registered once and live for the whole session, so a screen
// keeps its own state (cursor position, animations) between activations.
// The coordinator selects the active one by tag for update, render and
// event handling; there is no per-call switch.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{View, ViewState};

//=== ViewRegistry ========================================================

/// Owns the view instances, keyed by the state they present.
pub struct ViewRegistry {
    views: HashMap<ViewState, Box<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Registers a view for `state`.
    ///
    /// Tags without a screen (`Exiting`, `Continue`, `Resume`) are rejected
    /// with a warning. Re-registering a tag replaces the previous view.
    pub fn register<V>(&mut self, state: ViewState, view: V)
    where
        V: View + 'static,
    {
        if !state.has_view() {
            warn!(target: "coordinator", "{:?} cannot own a view, registration ignored", state);
            return;
        }

        if self.views.insert(state, Box::new(view)).is_some() {
            warn!(target: "coordinator", "View for {:?} was already registered and has been replaced", state);
        }
    }

    /// Returns the view registered for `state`, if any.
    pub fn get_mut(&mut self, state: ViewState) -> Option<&mut (dyn View + 'static)> {
        self.views.get_mut(&state).map(|view| view.as_mut())
    }

    pub fn contains(&self, state: ViewState) -> bool {
        self.views.contains_key(&state)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
