use crate::shared::api::{self, ApiError};
use contracts::domain::a008_invoice::Invoice;
use contracts::shared::{ExportTicket, FilterPayload, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Invoice>, ApiError> {
    api::fetch_list(
        &format!("/api/invoice?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<Invoice>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/invoice?page=1&per_page={page_size}&{}",
            filters.to_query()
        ),
        page_size,
    )
    .await
}

pub async fn search(query: String, page_size: usize) -> Result<ListPage<Invoice>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/invoice?page=1&per_page={page_size}&q={}",
            urlencoding::encode(&query)
        ),
        page_size,
    )
    .await
}

pub async fn fetch(uuid: &str) -> Result<Invoice, ApiError> {
    api::fetch_one(&format!("/api/invoice/{uuid}")).await
}

pub async fn export(format: &str) -> Result<ExportTicket, ApiError> {
    api::request_export(&format!("/api/invoice/export?format={format}")).await
}

/// Printable PDF of one invoice.
pub async fn export_pdf(uuid: &str) -> Result<ExportTicket, ApiError> {
    api::request_export(&format!("/api/invoice/{uuid}/export?format=pdf")).await
}
