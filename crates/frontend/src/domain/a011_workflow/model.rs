use crate::shared::api::{self, ApiError};
use contracts::domain::a011_workflow::Workflow;
use contracts::shared::ListPage;

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Workflow>, ApiError> {
    api::fetch_list(
        &format!("/api/workflow?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}
