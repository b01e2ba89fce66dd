use crate::shared::api::{self, ApiError};
use contracts::domain::a013_service_visit::ServiceVisit;
use contracts::shared::{FilterPayload, ListPage};

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<ServiceVisit>, ApiError> {
    api::fetch_list(
        &format!("/api/service-visit?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}

pub async fn filter_by(
    filters: FilterPayload,
    page_size: usize,
) -> Result<ListPage<ServiceVisit>, ApiError> {
    api::fetch_list(
        &format!(
            "/api/service-visit?page=1&per_page={page_size}&{}",
            filters.to_query()
        ),
        page_size,
    )
    .await
}
