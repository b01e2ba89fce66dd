use super::super::model;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::format_count;
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource,
};
use crate::shared::lookups::{LookupCache, LookupKind};
use contracts::domain::a003_route::SalesRoute;
use contracts::domain::common::display_or_dash;
use contracts::shared::FilterPayload;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<SalesRoute>> {
    vec![
        ColumnDef::new("code", "Code", |r: &SalesRoute| {
            display_or_dash(r.code.as_deref())
        })
        .width("90px"),
        ColumnDef::new("name", "Name", |r: &SalesRoute| r.name.clone()),
        ColumnDef::new("region", "Region", |r: &SalesRoute| {
            display_or_dash(r.region_name.as_deref())
        }),
        ColumnDef::new("salesman", "Salesman", |r: &SalesRoute| {
            display_or_dash(r.salesman_name.as_deref())
        }),
        ColumnDef::new("visit_day", "Visit day", |r: &SalesRoute| {
            display_or_dash(r.visit_day.as_deref())
        }),
        ColumnDef::new("customers", "Customers", |r: &SalesRoute| {
            format_count(r.customer_count)
        }),
        ColumnDef::new("status", "Status", |r: &SalesRoute| {
            r.status.label().to_string()
        }),
    ]
}

#[component]
pub fn RouteList() -> impl IntoView {
    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<SalesRoute>
                }),
                filter_by: Some(Arc::new(|filters, size| {
                    Box::pin(model::filter_by(filters, size)) as FetchFuture<SalesRoute>
                })),
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<SalesRoute>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|r: &SalesRoute| r.uuid.clone()),
            storage_key: Some("route-list-columns"),
        },
        &columns,
    );

    let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
    lookups.ensure_loaded(LookupKind::Salesmen);
    lookups.ensure_loaded(LookupKind::Regions);

    // Filter form state; submitted as one payload, blanks dropped.
    let (salesman_id, set_salesman_id) = signal(String::new());
    let (region_id, set_region_id) = signal(String::new());
    let (active_count, set_active_count) = signal(0usize);
    let panel_expanded = RwSignal::new(false);

    let apply = move |_| {
        let payload = FilterPayload::new()
            .set("salesman_id", salesman_id.get_untracked())
            .set("region_id", region_id.get_untracked());
        set_active_count.set(payload.active_count());
        controller.apply_filters(payload);
    };
    let reset = move |_| {
        set_salesman_id.set(String::new());
        set_region_id.set(String::new());
        set_active_count.set(0);
        controller.clear_query();
    };

    let salesman_options = lookups.options(LookupKind::Salesmen);
    let region_options = lookups.options(LookupKind::Regions);

    let header_actions = vec![HeaderAction {
        label: "Refresh",
        icon: "refresh",
        primary: false,
        on_click: Arc::new(move || controller.refresh()),
    }];

    view! {
        <div class="page">
            <PageHeader title="Routes" actions=header_actions>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search route name or code..."
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
                        <div class="filter-form__actions">
                            <button class="button button--primary" on:click=apply>"Apply"</button>
                            <button class="button button--secondary" on:click=reset>"Reset"</button>
                        </div>
                    </div>
                }.into_any()
            />

            <DataTable controller=controller columns=columns pagination=false />
        </div>
    }
}
