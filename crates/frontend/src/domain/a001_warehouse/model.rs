use crate::shared::api::{self, ApiError};
use contracts::domain::a001_warehouse::{Warehouse, WarehouseDto};
use contracts::domain::common::EntityStatus;
use contracts::shared::{ExportTicket, FilterPayload, ListPage};
use serde::Serialize;

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Warehouse>, ApiError> {
    api::fetch_list(
        &format!("/api/warehouse?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<Warehouse>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/warehouse?page=1&per_page={page_size}&{}",
            filters.to_query()
        ),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<Warehouse>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/warehouse?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}

pub async fn fetch(uuid: &str) -> Result<Warehouse, ApiError> {
    api::fetch_one(&format!("/api/warehouse/{uuid}")).await
}

/// Create or update depending on whether the dto carries a uuid.
pub async fn save(dto: &WarehouseDto) -> Result<Warehouse, ApiError> {
    match &dto.uuid {
        Some(uuid) => api::put_json(&format!("/api/warehouse/{uuid}"), dto).await,
        None => api::post_json("/api/warehouse", dto).await,
    }
}

pub async fn delete(uuid: &str) -> Result<(), ApiError> {
    api::delete(&format!("/api/warehouse/{uuid}")).await
}

#[derive(Serialize)]
struct BulkStatusDto<'a> {
    uuids: &'a [String],
    status: EntityStatus,
}

/// Set the status of several warehouses at once.
pub async fn set_status_bulk(uuids: &[String], status: EntityStatus) -> Result<(), ApiError> {
    let _: serde_json::Value =
        api::post_json("/api/warehouse/bulk-status", &BulkStatusDto { uuids, status }).await?;
    Ok(())
}

/// `format` is `csv` or `xlsx`.
pub async fn export(format: &str) -> Result<ExportTicket, ApiError> {
    api::request_export(&format!("/api/warehouse/export?format={format}")).await
}
