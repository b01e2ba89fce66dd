use crate::shared::api::{self, ApiError};
use contracts::domain::a003_route::SalesRoute;
use contracts::shared::{FilterPayload, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<SalesRoute>, ApiError> {
    api::fetch_list(
        &format!("/api/route?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<SalesRoute>, ApiError> {
    api::fetch_list(
        &format!("/api/route?page=1&per_page={page_size}&{}", filters.to_query()),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<SalesRoute>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/route?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}
