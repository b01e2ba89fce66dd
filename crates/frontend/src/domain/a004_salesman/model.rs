use crate::shared::api::{self, ApiError};
use contracts::domain::a004_salesman::Salesman;
use contracts::shared::ListPage;

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Salesman>, ApiError> {
    api::fetch_list(
        &format!("/api/salesman?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<Salesman>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/salesman?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}
