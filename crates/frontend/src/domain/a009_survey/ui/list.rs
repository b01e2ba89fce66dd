use super::super::model;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::open_download;
use crate::shared::format::{format_count, format_date_opt};
use crate::shared::list_controller::{
    ColumnDef, FetchFuture, HeaderAction, ListConfig, ListController, ListSource, MenuAction,
};
use crate::shared::notifications::NotificationService;
use contracts::domain::a009_survey::Survey;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

fn columns() -> Vec<ColumnDef<Survey>> {
    vec![
        ColumnDef::new("title", "Title", |s: &Survey| s.title.clone()),
        ColumnDef::new("start_date", "Starts", |s: &Survey| {
            format_date_opt(s.start_date.as_deref())
        }),
        ColumnDef::new("end_date", "Ends", |s: &Survey| {
            format_date_opt(s.end_date.as_deref())
        }),
        ColumnDef::new("questions", "Questions", |s: &Survey| {
            format_count(s.question_count)
        })
        .width("100px"),
        ColumnDef::new("responses", "Responses", |s: &Survey| {
            format_count(s.response_count)
        })
        .width("100px"),
        ColumnDef::new("status", "Status", |s: &Survey| s.status.label().to_string()),
    ]
}

#[component]
pub fn SurveyList() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not in context");

    let columns = columns();
    let controller = ListController::new(
        ListConfig {
            source: ListSource {
                list: Arc::new(|page, size| {
                    Box::pin(model::list(page, size)) as FetchFuture<Survey>
                }),
                filter_by: None,
                search: None,
            },
            page_size: 10,
            row_key: Arc::new(|s: &Survey| s.uuid.clone()),
            storage_key: None,
        },
        &columns,
    );

    let export = move || {
        spawn_local(async move {
            match model::export_csv().await {
                Ok(ticket) => {
                    if let Err(e) = open_download(&ticket.download_url) {
                        log::error!("survey export download failed: {e}");
                        notifications.error("Failed to start download".to_string());
                    } else {
                        notifications.success("Survey export started".to_string());
                    }
                }
                Err(e) => {
                    log::error!("survey export failed: {e}");
                    notifications.error(format!("Failed to export surveys: {e}"));
                }
            }
        });
    };

    let header_actions = vec![HeaderAction {
        label: "Refresh",
        icon: "refresh",
        primary: false,
        on_click: Arc::new(move || controller.refresh()),
    }];
    let menu = vec![MenuAction {
        label: "Export CSV",
        on_select: Arc::new(export),
    }];

    view! {
        <div class="page">
            <PageHeader title="Surveys" actions=header_actions three_dot=menu />
            <DataTable controller=controller columns=columns />
        </div>
    }
}
