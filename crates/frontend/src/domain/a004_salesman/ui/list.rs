use super::super::model;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::format_count;
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource,
};
use contracts::domain::a004_salesman::Salesman;
use contracts::domain::common::display_or_dash;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<Salesman>> {
    vec![
        ColumnDef::new("name", "Name", |s: &Salesman| s.name.clone()),
        ColumnDef::new("phone", "Phone", |s: &Salesman| {
            display_or_dash(s.phone.as_deref())
        }),
        ColumnDef::new("email", "Email", |s: &Salesman| {
            display_or_dash(s.email.as_deref())
        }),
        ColumnDef::new("warehouse", "Warehouse", |s: &Salesman| {
            display_or_dash(s.warehouse_name.as_deref())
        }),
        ColumnDef::new("routes", "Routes", |s: &Salesman| format_count(s.route_count))
            .width("80px"),
        ColumnDef::new("status", "Status", |s: &Salesman| s.status.label().to_string()),
    ]
}

#[component]
pub fn SalesmanList() -> impl IntoView {
    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Salesman>
                }),
                filter_by: None,
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<Salesman>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|s: &Salesman| s.uuid.clone()),
            storage_key: None,
        },
        &columns,
    );

    let header_actions = vec![HeaderAction {
        label: "Refresh",
        icon: "refresh",
        primary: false,
        on_click: Arc::new(move || controller.refresh()),
    }];

    view! {
        <div class="page">
            <PageHeader title="Salesmen" actions=header_actions>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search name, phone or email..."
                />
            </PageHeader>
            <DataTable controller=controller columns=columns />
        </div>
    }
}
