//! Cross-tab refresh notifications.
//!
//! Detail tabs and list tabs are siblings in the layout, so a saved form
//! cannot reach "its" list directly. Instead mutations bump a per-resource
//! counter here and lists subscribe via `ListController::bind_refresh`.

use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct RefreshBus {
    counters: RwSignal<HashMap<&'static str, u64>>,
}

impl RefreshBus {
    pub fn new() -> Self {
        Self {
            counters: RwSignal::new(HashMap::new()),
        }
    }

    /// Signal a mutation on a resource. All subscribed lists re-fetch.
    pub fn notify(&self, resource: &'static str) {
        self.counters.update(|c| {
            *c.entry(resource).or_insert(0) += 1;
        });
    }

    /// Reactive counter for one resource; starts at 0.
    pub fn watch(&self, resource: &'static str) -> Signal<u64> {
        let counters = self.counters;
        Signal::derive(move || counters.get().get(resource).copied().unwrap_or(0))
    }
}
