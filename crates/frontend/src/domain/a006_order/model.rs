use crate::shared::api::{self, ApiError};
use contracts::domain::a006_order::{Order, OrderDto};
use contracts::shared::{ExportTicket, FilterPayload, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Order>, ApiError> {
    api::fetch_list(
        &format!("/api/order?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<Order>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/order?page=1&per_page={page_size}&{}",
            filters.to_query()
        ),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<Order>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/order?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}

pub async fn fetch(uuid: &str) -> Result<Order, ApiError> {
    api::fetch_one(&format!("/api/order/{uuid}")).await
}

pub async fn save(dto: &OrderDto) -> Result<Order, ApiError> {
    match &dto.uuid {
        Some(uuid) => api::put_json(&format!("/api/order/{uuid}"), dto).await,
        None => api::post_json("/api/order", dto).await,
    }
}

pub async fn export(format: &str) -> Result<ExportTicket, ApiError> {
    api::request_export(&format!("/api/order/export?format={format}")).await
}
