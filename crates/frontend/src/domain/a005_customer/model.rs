use crate::shared::api::{self, ApiError};
use contracts::domain::a005_customer::Customer;
use contracts::shared::{FilterPayload, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Customer>, ApiError> {
    api::fetch_list(
        &format!("/api/customer?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<Customer>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/customer?page=1&per_page={page_size}&{}",
            filters.to_query()
        ),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<Customer>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/customer?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}

pub async fn delete(uuid: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/customer/{uuid}")).await
}
