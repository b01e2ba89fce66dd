use super::super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::column_settings::ColumnSettings;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::export::open_download;
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource, MenuAction,
    RowAction,
};
use crate::shared::lookups::{LookupCache, LookupKind};
use crate::shared::notifications::NotificationService;
use crate::shared::refresh::RefreshBus;
use contracts::domain::a001_warehouse::Warehouse;
use contracts::domain::common::{display_or_dash, EntityStatus};
use contracts::shared::FilterPayload;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

fn columns() -> Vec<ColumnDef<Warehouse>> {
    vec![
        ColumnDef::new("code", "Code", |w: &Warehouse| {
            display_or_dash(w.code.as_deref())
        })
        .width("90px"),
        ColumnDef::new("name", "Name", |w: &Warehouse| w.name.clone()),
        ColumnDef::new("region", "Region", |w: &Warehouse| {
            display_or_dash(w.region_name.as_deref())
        }),
        ColumnDef::new("address", "Address", |w: &Warehouse| {
            display_or_dash(w.address.as_deref())
        })
        .hidden_by_default(),
        ColumnDef::new("phone", "Phone", |w: &Warehouse| {
            display_or_dash(w.phone.as_deref())
        })
        .hidden_by_default(),
        ColumnDef::new("status", "Status", |w: &Warehouse| w.status.label().to_string()),
    ]
}

#[component]
pub fn WarehouseList() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not in context");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not in context");
    let refresh_bus = use_context::<RefreshBus>().expect("RefreshBus not in context");

    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Warehouse>
                }),
                filter_by: Some(Arc::new(|filters, size| {
                    Box::pin(model::filter_by(filters, size)) as FetchFuture<Warehouse>
                })),
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<Warehouse>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|w: &Warehouse| w.uuid.clone()),
            storage_key: Some("warehouse-list-columns"),
        },
        &columns,
    );
    controller.bind_refresh(refresh_bus.watch("a001_warehouse"));

    let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
    lookups.ensure_loaded(LookupKind::Regions);

    let (region_id, set_region_id) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (active_count, set_active_count) = signal(0usize);
    let panel_expanded = RwSignal::new(false);

    let apply = move |_| {
        let payload = FilterPayload::new()
            .set("region_id", region_id.get_untracked())
            .set("status", status.get_untracked());
        set_active_count.set(payload.active_count());
        controller.apply_filters(payload);
    };
    let reset = move |_| {
        set_region_id.set(String::new());
        set_status.set(String::new());
        set_active_count.set(0);
        controller.clear_query();
    };

    let region_options = lookups.options(LookupKind::Regions);

    // Bulk status over the checked rows of the displayed page.
    let bulk_set_status = move |status: EntityStatus| {
        let uuids = controller.selected_keys();
        if uuids.is_empty() {
            notifications.warning("No warehouses selected".to_string());
            return;
        }
        spawn_local(async move {
            match model::set_status_bulk(&uuids, status).await {
                Ok(()) => {
                    notifications.success(format!(
                        "{} warehouse(s) set to {}",
                        uuids.len(),
                        status.label()
                    ));
                    controller.refresh();
                }
                Err(e) => {
                    log::error!("bulk status update failed: {e}");
                    notifications.error(format!("Failed to update status: {e}"));
                }
            }
        });
    };

    let export_as = move |format: &'static str| {
        spawn_local(async move {
            match model::export(format).await {
                Ok(ticket) => {
                    if let Err(e) = open_download(&ticket.download_url) {
                        log::error!("warehouse export download failed: {e}");
                        notifications.error("Failed to start download".to_string());
                    } else {
                        notifications.success(format!(
                            "Warehouse export ({}) started",
                            format.to_uppercase()
                        ));
                    }
                }
                Err(e) => {
                    log::error!("warehouse export failed: {e}");
                    notifications.error(format!("Failed to export warehouses: {e}"));
                }
            }
        });
    };

    let menu = vec![
        MenuAction {
            label: "Set selected active",
            on_select: Arc::new(move || bulk_set_status(EntityStatus::Active)),
        },
        MenuAction {
            label: "Set selected passive",
            on_select: Arc::new(move || bulk_set_status(EntityStatus::Passive)),
        },
        MenuAction {
            label: "Export CSV",
            on_select: Arc::new(move || export_as("csv")),
        },
        MenuAction {
            label: "Export XLSX",
            on_select: Arc::new(move || export_as("xlsx")),
        },
    ];

    let open_details = move |warehouse: Warehouse| {
        let key = format!("a001_warehouse_detail_{}", warehouse.uuid);
        tabs.open_tab(&key, &warehouse.name);
    };
    let delete_warehouse = move |warehouse: Warehouse| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete warehouse \"{}\"?", warehouse.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete(&warehouse.uuid).await {
                Ok(()) => {
                    notifications.success(format!("Warehouse \"{}\" deleted", warehouse.name));
                    controller.refresh();
                }
                Err(e) => {
                    log::error!("warehouse delete failed: {e}");
                    notifications.error(format!("Failed to delete warehouse: {e}"));
                }
            }
        });
    };

    let row_actions = vec![
        RowAction {
            icon: "edit",
            title: "Edit",
            on_click: Arc::new(open_details),
        },
        RowAction {
            icon: "delete",
            title: "Delete",
            on_click: Arc::new(delete_warehouse),
        },
    ];

    let header_actions = vec![
        HeaderAction {
            label: "New warehouse",
            icon: "plus",
            primary: true,
            on_click: Arc::new(move || tabs.open_tab("a001_warehouse_new", "New warehouse")),
        },
        HeaderAction {
            label: "Refresh",
            icon: "refresh",
            primary: false,
            on_click: Arc::new(move || controller.refresh()),
        },
    ];
    let column_options: Vec<(&'static str, &'static str)> =
        columns.iter().map(|c| (c.key, c.label)).collect();

    view! {
        <div class="page">
            <PageHeader title="Warehouses" actions=header_actions three_dot=menu>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search name or code..."
                />
                <ColumnSettings
                    columns=column_options
                    visible=controller.visible_columns
                    on_toggle=Callback::new(move |key| controller.toggle_column(key))
                />
            </PageHeader>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=active_count
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=controller.current_page
                        total_pages=controller.total_pages
                        total_records=controller.total_records
                        page_size=controller.page_size
                        on_page_change=Callback::new(move |page| controller.load_page(page))
                        on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-form">
                        <div class="form-group">
                            <label>"Region"</label>
                            <select
                                prop:value=move || region_id.get()
                                on:change=move |ev| set_region_id.set(event_target_value(&ev))
                            >
                                <option value="">"All"</option>
                                {move || region_options.get().into_iter().map(|o| view! {
                                    <option value=o.uuid.clone()>{o.name.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Status"</label>
                            <select
                                prop:value=move || status.get()
                                on:change=move |ev| set_status.set(event_target_value(&ev))
                            >
                                <option value="">"All"</option>
                                <option value="active">"Active"</option>
                                <option value="passive">"Passive"</option>
                            </select>
                        </div>
                        <div class="filter-form__actions">
                            <button class="button button--primary" on:click=apply>"Apply"</button>
                            <button class="button button--secondary" on:click=reset>"Reset"</button>
                        </div>
                    </div>
                }.into_any()
            />

            <DataTable
                controller=controller
                columns=columns
                row_actions=row_actions
                row_selection=true
                pagination=false
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
