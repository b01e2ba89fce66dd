//! Form state and persistence for the warehouse detail tab.

use crate::domain::a001_warehouse::model;
use crate::shared::loading::LoadingService;
use crate::shared::lookups::{LookupCache, LookupKind};
use crate::shared::notifications::NotificationService;
use crate::shared::refresh::RefreshBus;
use contracts::domain::a001_warehouse::WarehouseDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Blocking validation messages for the form as entered.
pub fn validate(name: &str, code: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if code.trim().is_empty() {
        errors.push("Code is required".to_string());
    }
    errors
}

#[derive(Clone, Copy)]
pub struct WarehouseFormVm {
    uuid: StoredValue<Option<String>>,
    pub name: RwSignal<String>,
    pub code: RwSignal<String>,
    pub region_id: RwSignal<String>,
    pub address: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
    notifications: NotificationService,
    loading: LoadingService,
    lookups: LookupCache,
    refresh_bus: RefreshBus,
}

impl WarehouseFormVm {
    /// `uuid = None` is the create form; `Some` loads the record for edit.
    pub fn new(uuid: Option<String>) -> Self {
        let vm = Self {
            uuid: StoredValue::new(uuid.clone()),
            name: RwSignal::new(String::new()),
            code: RwSignal::new(String::new()),
            region_id: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            notifications: use_context::<NotificationService>()
                .expect("NotificationService not in context"),
            loading: use_context::<LoadingService>().expect("LoadingService not in context"),
            lookups: use_context::<LookupCache>().expect("LookupCache not in context"),
            refresh_bus: use_context::<RefreshBus>().expect("RefreshBus not in context"),
        };
        vm.lookups.ensure_loaded(LookupKind::Regions);
        if let Some(uuid) = uuid {
            vm.load(uuid);
        }
        vm
    }

    pub fn is_new(&self) -> bool {
        self.uuid.with_value(|u| u.is_none())
    }

    fn load(self, uuid: String) {
        self.loading.begin();
        spawn_local(async move {
            let result = model::fetch(&uuid).await;
            self.loading.end();
            match result {
                Ok(warehouse) => {
                    self.name.set(warehouse.name);
                    self.code.set(warehouse.code.unwrap_or_default());
                    self.address.set(warehouse.address.unwrap_or_default());
                    self.phone.set(warehouse.phone.unwrap_or_default());
                    // The list row carries the region name only; the form
                    // resolves the id from the loaded options.
                    if let Some(region_name) = warehouse.region_name {
                        if let Some(uuid) =
                            self.lookups.uuid_for_name(LookupKind::Regions, &region_name)
                        {
                            self.region_id.set(uuid);
                        }
                    }
                }
                Err(e) => {
                    log::error!("warehouse load failed: {e}");
                    self.notifications
                        .error(format!("Failed to load warehouse: {e}"));
                }
            }
        });
    }

    fn to_dto(&self) -> WarehouseDto {
        let region_id = self.region_id.get_untracked();
        WarehouseDto {
            uuid: self.uuid.with_value(|u| u.clone()),
            name: self.name.get_untracked().trim().to_string(),
            code: self.code.get_untracked().trim().to_string(),
            region_id: (!region_id.is_empty()).then_some(region_id),
            address: self.address.get_untracked(),
            phone: self.phone.get_untracked(),
        }
    }

    /// Validate, persist and run `on_saved` (the tab close) on success.
    pub fn save(&self, on_saved: Callback<()>) {
        let errors = validate(&self.name.get_untracked(), &self.code.get_untracked());
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(Vec::new());

        let vm = *self;
        let dto = self.to_dto();
        vm.saving.set(true);
        spawn_local(async move {
            let result = model::save(&dto).await;
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    vm.notifications
                        .success(format!("Warehouse \"{}\" saved", saved.name));
                    // Dropdowns listing warehouses are stale now.
                    vm.lookups.invalidate(LookupKind::Warehouses);
                    vm.refresh_bus.notify("a001_warehouse");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("warehouse save failed: {e}");
                    vm.notifications
                        .error(format!("Failed to save warehouse: {e}"));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_code_are_required() {
        let errors = validate("", "");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Name"));
        assert!(errors[1].contains("Code"));
    }

    #[test]
    fn whitespace_only_input_does_not_pass() {
        assert_eq!(validate("  ", "WH1").len(), 1);
        assert!(validate("Main depot", "WH1").is_empty());
    }
}
