//! Session-scoped cache for dropdown option lists.
//!
//! Filter controls and forms need the same short lists (warehouses,
//! routes, salesmen, ...) on many pages. Each list is fetched once per
//! session via `ensure_loaded`; `invalidate` drops a list so the next
//! `ensure_loaded` refetches it after a mutation.

use crate::shared::api::{self, ApiError};
use leptos::prelude::*;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LookupOption {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Warehouses,
    Routes,
    Salesmen,
    Customers,
    Vehicles,
    Regions,
    Products,
}

impl LookupKind {
    fn endpoint(&self) -> &'static str {
        match self {
            LookupKind::Warehouses => "/api/warehouse/options",
            LookupKind::Routes => "/api/route/options",
            LookupKind::Salesmen => "/api/salesman/options",
            LookupKind::Customers => "/api/customer/options",
            LookupKind::Vehicles => "/api/vehicle/options",
            LookupKind::Regions => "/api/region/options",
            LookupKind::Products => "/api/product/options",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LookupCache {
    entries: RwSignal<HashMap<LookupKind, Vec<LookupOption>>>,
    pending: RwSignal<HashSet<LookupKind>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(HashMap::new()),
            pending: RwSignal::new(HashSet::new()),
        }
    }

    /// Idempotent: a loaded or in-flight list is never fetched twice.
    pub fn ensure_loaded(&self, kind: LookupKind) {
        let loaded = self.entries.with_untracked(|e| e.contains_key(&kind));
        let in_flight = self.pending.with_untracked(|p| p.contains(&kind));
        if loaded || in_flight {
            return;
        }
        self.pending.update(|p| {
            p.insert(kind);
        });

        let cache = *self;
        spawn_local(async move {
            let result: Result<Vec<LookupOption>, ApiError> =
                api::fetch_one(kind.endpoint()).await;
            cache.pending.update(|p| {
                p.remove(&kind);
            });
            match result {
                Ok(options) => cache.entries.update(|e| {
                    e.insert(kind, options);
                }),
                // Dropdowns degrade to empty lists; the page itself already
                // reports its own fetch failures.
                Err(e) => log::warn!("lookup {:?} failed: {e}", kind),
            }
        });
    }

    /// Drop a cached list after a mutation so it reloads on next use.
    pub fn invalidate(&self, kind: LookupKind) {
        self.entries.update(|e| {
            e.remove(&kind);
        });
    }

    /// Reactive read of a list; empty until loaded.
    pub fn options(&self, kind: LookupKind) -> Signal<Vec<LookupOption>> {
        let entries = self.entries;
        Signal::derive(move || entries.get().get(&kind).cloned().unwrap_or_default())
    }

    /// Resolve an option name by uuid, `"-"` when unknown.
    pub fn name_of(&self, kind: LookupKind, uuid: &str) -> String {
        self.entries.with_untracked(|e| {
            e.get(&kind)
                .and_then(|opts| opts.iter().find(|o| o.uuid == uuid))
                .map(|o| o.name.clone())
                .unwrap_or_else(|| "-".to_string())
        })
    }

    /// Resolve an option uuid by display name. Edit forms need this when
    /// the backend row carries only a `*_name` field.
    pub fn uuid_for_name(&self, kind: LookupKind, name: &str) -> Option<String> {
        self.entries
            .with_untracked(|e| uuid_for_name(e.get(&kind).map(Vec::as_slice).unwrap_or(&[]), name))
    }
}

fn uuid_for_name(options: &[LookupOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|o| o.name == name)
        .map(|o| o.uuid.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(uuid: &str, name: &str) -> LookupOption {
        LookupOption {
            uuid: uuid.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn name_resolves_to_its_uuid() {
        let options = vec![option("w1", "Main depot"), option("w2", "North depot")];
        assert_eq!(uuid_for_name(&options, "North depot"), Some("w2".to_string()));
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let options = vec![option("w1", "Main depot")];
        assert_eq!(uuid_for_name(&options, "Closed depot"), None);
        assert_eq!(uuid_for_name(&[], "Main depot"), None);
    }
}
