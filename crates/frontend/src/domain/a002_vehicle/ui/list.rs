use super::super::model;
use crate::shared::components::column_settings::ColumnSettings;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::format_number_with_decimals;
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource,
};
use contracts::domain::a002_vehicle::Vehicle;
use contracts::domain::common::display_or_dash;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<Vehicle>> {
    vec![
        ColumnDef::new("plate_number", "Plate", |v: &Vehicle| v.plate_number.clone()),
        ColumnDef::new("brand", "Brand", |v: &Vehicle| {
            display_or_dash(v.brand.as_deref())
        }),
        ColumnDef::new("model", "Model", |v: &Vehicle| {
            display_or_dash(v.model.as_deref())
        }),
        ColumnDef::new("capacity_kg", "Capacity (kg)", |v: &Vehicle| match v.capacity_kg {
            Some(c) => format_number_with_decimals(c, 0),
            None => "-".to_string(),
        })
        .hidden_by_default(),
        ColumnDef::new("warehouse", "Warehouse", |v: &Vehicle| {
            display_or_dash(v.warehouse_name.as_deref())
        }),
        ColumnDef::new("status", "Status", |v: &Vehicle| v.status.label().to_string()),
    ]
}

#[component]
pub fn VehicleList() -> impl IntoView {
    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Vehicle>
                }),
                filter_by: None,
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<Vehicle>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|v: &Vehicle| v.uuid.clone()),
            storage_key: Some("vehicle-list-columns"),
        },
        &columns,
    );

    let header_actions = vec![HeaderAction {
        label: "Refresh",
        icon: "refresh",
        primary: false,
        on_click: Arc::new(move || controller.refresh()),
    }];
    let column_options: Vec<(&'static str, &'static str)> =
        columns.iter().map(|c| (c.key, c.label)).collect();

    view! {
        <div class="page">
            <PageHeader title="Vehicles" actions=header_actions>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search plate, brand or model..."
                />
                <ColumnSettings
                    columns=column_options
                    visible=controller.visible_columns
                    on_toggle=Callback::new(move |key| controller.toggle_column(key))
                />
            </PageHeader>
            <DataTable controller=controller columns=columns />
        </div>
    }
}
