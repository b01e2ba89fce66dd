use super::super::model;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format::{format_count, format_number_with_decimals};
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource,
};
use contracts::domain::a010_tier::Tier;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<Tier>> {
    vec![
        ColumnDef::new("name", "Name", |t: &Tier| t.name.clone()),
        ColumnDef::new("discount", "Discount %", |t: &Tier| match t.discount_rate {
            Some(rate) => format_number_with_decimals(rate * 100.0, 1),
            None => "-".to_string(),
        })
        .width("110px"),
        ColumnDef::new("customers", "Customers", |t: &Tier| {
            format_count(t.customer_count)
        })
        .width("100px"),
        ColumnDef::new("status", "Status", |t: &Tier| t.status.label().to_string()),
    ]
}

/// Tiers rarely number more than a handful, so the page stays small.
#[component]
pub fn TierList() -> impl IntoView {
    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| Box::pin(model::list(page, size)) as FetchFuture<Tier>),
                filter_by: None,
                search: None,
            },
            page_size: 5,
            row_key: Arc::new(|t: &Tier| t.uuid.clone()),
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
            <PageHeader title="Tiers" actions=header_actions />
            <DataTable controller=controller columns=columns />
        </div>
    }
}
