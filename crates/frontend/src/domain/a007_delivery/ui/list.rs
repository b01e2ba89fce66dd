use super::super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::{format_date_opt, format_money};
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource, RowAction,
};
use contracts::domain::a007_delivery::Delivery;
use contracts::domain::common::display_or_dash;
use contracts::shared::FilterPayload;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<Delivery>> {
    vec![
        ColumnDef::new("delivery_no", "Delivery no", |d: &Delivery| {
            d.delivery_no.clone()
        })
        .width("120px"),
        ColumnDef::new("delivery_date", "Date", |d: &Delivery| {
            format_date_opt(d.delivery_date.as_deref())
        }),
        ColumnDef::new("order_no", "Order no", |d: &Delivery| {
            display_or_dash(d.order_no.as_deref())
        }),
        ColumnDef::new("customer", "Customer", |d: &Delivery| {
            display_or_dash(d.customer_name.as_deref())
        }),
        ColumnDef::new("vehicle", "Vehicle", |d: &Delivery| {
            display_or_dash(d.vehicle_plate.as_deref())
        }),
        ColumnDef::new("driver", "Driver", |d: &Delivery| {
            display_or_dash(d.driver_name.as_deref())
        })
        .hidden_by_default(),
        ColumnDef::new("status", "Status", |d: &Delivery| d.status.label().to_string()),
        ColumnDef::new("total", "Total", |d: &Delivery| match d.total {
            Some(t) => format_money(t),
            None => "-".to_string(),
        })
        .width("110px"),
    ]
}

#[component]
pub fn DeliveryList() -> impl IntoView {
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not in context");

    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Delivery>
                }),
                filter_by: Some(Arc::new(|filters, size| {
                    Box::pin(model::filter_by(filters, size)) as FetchFuture<Delivery>
                })),
                search: None,
            },
            page_size: 10,
            row_key: Arc::new(|d: &Delivery| d.uuid.clone()),
            storage_key: Some("delivery-list-columns"),
        },
        &columns,
    );

    let (status, set_status) = signal(String::new());
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (active_count, set_active_count) = signal(0usize);
    let panel_expanded = RwSignal::new(false);

    let apply = move |_| {
        let payload = FilterPayload::new()
            .set("status", status.get_untracked())
            .set("date_from", date_from.get_untracked())
            .set("date_to", date_to.get_untracked());
        set_active_count.set(payload.active_count());
        controller.apply_filters(payload);
    };
    let reset = move |_| {
        set_status.set(String::new());
        set_date_from.set(String::new());
        set_date_to.set(String::new());
        set_active_count.set(0);
        controller.clear_query();
    };

    let open_details = move |delivery: Delivery| {
        let key = format!("a007_delivery_detail_{}", delivery.uuid);
        tabs.open_tab(&key, &delivery.delivery_no);
    };

    let row_actions = vec![RowAction {
        icon: "eye",
        title: "View",
        on_click: Arc::new(open_details),
    }];

    let header_actions = vec![HeaderAction {
        label: "Refresh",
        icon: "refresh",
        primary: false,
        on_click: Arc::new(move || controller.refresh()),
    }];

    view! {
        <div class="page">
            <PageHeader title="Deliveries" actions=header_actions />

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
                            <label>"Status"</label>
                            <select
                                prop:value=move || status.get()
                                on:change=move |ev| set_status.set(event_target_value(&ev))
                            >
                                <option value="">"All"</option>
                                <option value="planned">"Planned"</option>
                                <option value="on_route">"On route"</option>
                                <option value="completed">"Completed"</option>
                                <option value="failed">"Failed"</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"From"</label>
                            <input
                                type="date"
                                prop:value=move || date_from.get()
                                on:input=move |ev| set_date_from.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"To"</label>
                            <input
                                type="date"
                                prop:value=move || date_to.get()
                                on:input=move |ev| set_date_to.set(event_target_value(&ev))
                            />
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
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
