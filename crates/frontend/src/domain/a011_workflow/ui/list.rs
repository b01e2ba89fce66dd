use super::super::model;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format::format_count;
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource,
};
use contracts::domain::a011_workflow::Workflow;
use contracts::domain::common::display_or_dash;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDef<Workflow>> {
    vec![
        ColumnDef::new("name", "Name", |w: &Workflow| w.name.clone()),
        ColumnDef::new("entity_type", "Applies to", |w: &Workflow| {
            display_or_dash(w.entity_type.as_deref())
        }),
        ColumnDef::new("steps", "Steps", |w: &Workflow| format_count(w.step_count))
            .width("80px"),
        ColumnDef::new("assigned_to", "Assigned to", |w: &Workflow| {
            display_or_dash(w.assigned_to.as_deref())
        }),
        ColumnDef::new("status", "Status", |w: &Workflow| w.status.label().to_string()),
    ]
}

#[component]
pub fn WorkflowList() -> impl IntoView {
    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Workflow>
                }),
                filter_by: None,
                search: None,
            },
            page_size: 10,
            row_key: Arc::new(|w: &Workflow| w.uuid.clone()),
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
            <PageHeader title="Workflows" actions=header_actions />
            <DataTable controller=controller columns=columns />
        </div>
    }
}
