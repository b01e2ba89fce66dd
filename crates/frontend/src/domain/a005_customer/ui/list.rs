use super::super::model;
use crate::shared::components::column_settings::ColumnSettings;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource, RowAction,
};
use crate::shared::lookups::{LookupCache, LookupKind};
use crate::shared::notifications::NotificationService;
use contracts::domain::a005_customer::Customer;
use contracts::domain::common::display_or_dash;
use contracts::shared::FilterPayload;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

fn columns() -> Vec<ColumnDef<Customer>> {
    vec![
        ColumnDef::new("name", "Name", |c: &Customer| c.name.clone()),
        ColumnDef::new("tax_number", "Tax no", |c: &Customer| {
            display_or_dash(c.tax_number.as_deref())
        })
        .hidden_by_default(),
        ColumnDef::new("region", "Region", |c: &Customer| {
            display_or_dash(c.region_name.as_deref())
        }),
        ColumnDef::new("address", "Address", |c: &Customer| {
            display_or_dash(c.address.as_deref())
        })
        .hidden_by_default(),
        ColumnDef::new("phone", "Phone", |c: &Customer| {
            display_or_dash(c.phone.as_deref())
        }),
        ColumnDef::new("tier", "Tier", |c: &Customer| {
            display_or_dash(c.tier_name.as_deref())
        }),
        ColumnDef::new("status", "Status", |c: &Customer| c.status.label().to_string()),
    ]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not in context");

    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Customer>
                }),
                filter_by: Some(Arc::new(|filters, size| {
                    Box::pin(model::filter_by(filters, size)) as FetchFuture<Customer>
                })),
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<Customer>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|c: &Customer| c.uuid.clone()),
            storage_key: Some("customer-list-columns"),
        },
        &columns,
    );

    let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
    lookups.ensure_loaded(LookupKind::Regions);

    let (region_id, set_region_id) = signal(String::new());
    let (tier_name, set_tier_name) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (active_count, set_active_count) = signal(0usize);
    let panel_expanded = RwSignal::new(false);

    let apply = move |_| {
        let payload = FilterPayload::new()
            .set("region_id", region_id.get_untracked())
            .set("tier", tier_name.get_untracked())
            .set("status", status.get_untracked());
        set_active_count.set(payload.active_count());
        controller.apply_filters(payload);
    };
    let reset = move |_| {
        set_region_id.set(String::new());
        set_tier_name.set(String::new());
        set_status.set(String::new());
        set_active_count.set(0);
        controller.clear_query();
    };

    let region_options = lookups.options(LookupKind::Regions);

    let delete_customer = move |customer: Customer| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete customer \"{}\"?", customer.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete(&customer.uuid).await {
                Ok(()) => {
                    notifications.success(format!("Customer \"{}\" deleted", customer.name));
                    controller.refresh();
                }
                Err(e) => {
                    log::error!("customer delete failed: {e}");
                    notifications.error(format!("Failed to delete customer: {e}"));
                }
            }
        });
    };

    let row_actions = vec![RowAction {
        icon: "delete",
        title: "Delete",
        on_click: Arc::new(delete_customer),
    }];

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
            <PageHeader title="Customers" actions=header_actions>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search name, tax no or phone..."
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
                            <label>"Tier"</label>
                            <input
                                type="text"
                                prop:value=move || tier_name.get()
                                on:input=move |ev| set_tier_name.set(event_target_value(&ev))
                                placeholder="Tier name"
                            />
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
                pagination=false
            />
        </div>
    }
}
