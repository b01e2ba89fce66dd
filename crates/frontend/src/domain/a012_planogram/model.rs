use crate::shared::api::{self, ApiError};
use contracts::domain::a012_planogram::Planogram;
use contracts::shared::ListPage;

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Planogram>, ApiError> {
    api::fetch_list(
        &format!("/api/planogram?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<Planogram>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/planogram?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}
