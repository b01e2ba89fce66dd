use super::super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::column_settings::ColumnSettings;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::export::open_download;
use crate::shared::format::{format_date_opt, format_money};
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource, MenuAction,
    RowAction,
};
use crate::shared::lookups::{LookupCache, LookupKind};
use crate::shared::notifications::NotificationService;
use crate::shared::refresh::RefreshBus;
use contracts::domain::a006_order::Order;
use contracts::domain::common::display_or_dash;
use contracts::shared::FilterPayload;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

fn columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::new("order_no", "Order no", |o: &Order| o.order_no.clone())
            .width("110px"),
        ColumnDef::new("order_date", "Date", |o: &Order| {
            format_date_opt(o.order_date.as_deref())
        }),
        ColumnDef::new("customer", "Customer", |o: &Order| o.customer.display_name()),
        ColumnDef::new("salesman", "Salesman", |o: &Order| {
            display_or_dash(o.salesman_name.as_deref())
        }),
        ColumnDef::new("warehouse", "Warehouse", |o: &Order| {
            display_or_dash(o.warehouse_name.as_deref())
        })
        .hidden_by_default(),
        ColumnDef::new("status", "Status", |o: &Order| o.status.label().to_string()),
        ColumnDef::new("total", "Total", |o: &Order| match o.total {
            Some(t) => format_money(t),
            None => "-".to_string(),
        })
        .width("110px"),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not in context");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not in context");
    let refresh_bus = use_context::<RefreshBus>().expect("RefreshBus not in context");

    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Order>
                }),
                filter_by: Some(Arc::new(|filters, size| {
                    Box::pin(model::filter_by(filters, size)) as FetchFuture<Order>
                })),
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<Order>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|o: &Order| o.uuid.clone()),
            storage_key: Some("order-list-columns"),
        },
        &columns,
    );
    controller.bind_refresh(refresh_bus.watch("a006_order"));

    let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
    lookups.ensure_loaded(LookupKind::Customers);
    lookups.ensure_loaded(LookupKind::Salesmen);

    let (customer_id, set_customer_id) = signal(String::new());
    let (salesman_id, set_salesman_id) = signal(String::new());
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (active_count, set_active_count) = signal(0usize);
    let panel_expanded = RwSignal::new(false);

    let apply = move |_| {
        let payload = FilterPayload::new()
            .set("customer_id", customer_id.get_untracked())
            .set("salesman_id", salesman_id.get_untracked())
            .set("date_from", date_from.get_untracked())
            .set("date_to", date_to.get_untracked());
        set_active_count.set(payload.active_count());
        controller.apply_filters(payload);
    };
    let reset = move |_| {
        set_customer_id.set(String::new());
        set_salesman_id.set(String::new());
        set_date_from.set(String::new());
        set_date_to.set(String::new());
        set_active_count.set(0);
        controller.clear_query();
    };

    let customer_options = lookups.options(LookupKind::Customers);
    let salesman_options = lookups.options(LookupKind::Salesmen);

    let export_as = move |format: &'static str| {
        spawn_local(async move {
            match model::export(format).await {
                Ok(ticket) => {
                    if let Err(e) = open_download(&ticket.download_url) {
                        log::error!("order export download failed: {e}");
                        notifications.error("Failed to start download".to_string());
                    } else {
                        notifications.success(format!(
                            "Order export ({}) started",
                            format.to_uppercase()
                        ));
                    }
                }
                Err(e) => {
                    log::error!("order export failed: {e}");
                    notifications.error(format!("Failed to export orders: {e}"));
                }
            }
        });
    };

    let menu = vec![
        MenuAction {
            label: "Export CSV",
            on_select: Arc::new(move || export_as("csv")),
        },
        MenuAction {
            label: "Export XLSX",
            on_select: Arc::new(move || export_as("xlsx")),
        },
    ];

    let open_details = move |order: Order| {
        let key = format!("a006_order_detail_{}", order.uuid);
        tabs.open_tab(&key, &order.order_no);
    };

    let row_actions = vec![RowAction {
        icon: "edit",
        title: "Open",
        on_click: Arc::new(open_details),
    }];

    let header_actions = vec![
        HeaderAction {
            label: "New order",
            icon: "plus",
            primary: true,
            on_click: Arc::new(move || tabs.open_tab("a006_order_new", "New order")),
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
            <PageHeader title="Orders" actions=header_actions three_dot=menu>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search order no..."
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
                            <label>"Customer"</label>
                            <select
                                prop:value=move || customer_id.get()
                                on:change=move |ev| set_customer_id.set(event_target_value(&ev))
                            >
                                <option value="">"All"</option>
                                {move || customer_options.get().into_iter().map(|o| view! {
                                    <option value=o.uuid.clone()>{o.name.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Salesman"</label>
                            <select
                                prop:value=move || salesman_id.get()
                                on:change=move |ev| set_salesman_id.set(event_target_value(&ev))
                            >
                                <option value="">"All"</option>
                                {move || salesman_options.get().into_iter().map(|o| view! {
                                    <option value=o.uuid.clone()>{o.name.clone()}</option>
                                }).collect_view()}
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
