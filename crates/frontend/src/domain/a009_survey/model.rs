use crate::shared::api::{self, ApiError};
use contracts::domain::a009_survey::Survey;
use contracts::shared::{ExportTicket, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Survey>, ApiError> {
    api::fetch_list(
        &format!("/api/survey?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn export_csv() -> Result<ExportTicket, ApiError> {
    api::request_export("/api/survey/export?format=csv").await
}
