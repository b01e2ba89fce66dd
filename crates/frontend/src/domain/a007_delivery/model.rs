use crate::shared::api::{self, ApiError};
use contracts::domain::a007_delivery::Delivery;
use contracts::shared::{FilterPayload, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Delivery>, ApiError> {
    api::fetch_list(
        &format!("/api/delivery?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<Delivery>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/delivery?page=1&per_page={page_size}&{}",
            filters.to_query()
        ),
        page_size,
    )
    .await
}

pub async fn fetch(uuid: &str) -> Result<Delivery, ApiError> {
    api::fetch_one(&format!("/api/delivery/{uuid}")).await
}
