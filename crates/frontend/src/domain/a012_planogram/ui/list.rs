use super::super::model;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::format::{format_count, format_date_opt};
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource,
};
use contracts::domain::a012_planogram::Planogram;
use contracts::domain::common::display_or_dash;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<Planogram>> {
    vec![
        ColumnDef::new("name", "Name", |p: &Planogram| p.name.clone()),
        ColumnDef::new("customer_group", "Customer group", |p: &Planogram| {
            display_or_dash(p.customer_group.as_deref())
        }),
        ColumnDef::new("shelves", "Shelves", |p: &Planogram| {
            format_count(p.shelf_count)
        })
        .width("90px"),
        ColumnDef::new("valid_from", "Valid from", |p: &Planogram| {
            format_date_opt(p.valid_from.as_deref())
        }),
        ColumnDef::new("valid_to", "Valid to", |p: &Planogram| {
            format_date_opt(p.valid_to.as_deref())
        }),
        ColumnDef::new("status", "Status", |p: &Planogram| p.status.label().to_string()),
    ]
}

#[component]
pub fn PlanogramList() -> impl IntoView {
    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Planogram>
                }),
                filter_by: None,
                search: Some(Arc::new(|query, size| {
                    Box::pin(model::search(query, size)) as FetchFuture<Planogram>
                })),
            },
            page_size: 10,
            row_key: Arc::new(|p: &Planogram| p.uuid.clone()),
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
            <PageHeader title="Planograms" actions=header_actions>
                <SearchInput
                    on_change=Callback::new(move |query| controller.apply_search(query))
                    placeholder="Search planogram name..."
                />
            </PageHeader>
            <DataTable controller=controller columns=columns />
        </div>
    }
}
