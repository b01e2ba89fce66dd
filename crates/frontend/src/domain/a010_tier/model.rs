use crate::shared::api::{self, ApiError};
use contracts::domain::a010_tier::Tier;
use contracts::shared::ListPage;

pub async fn list(page: usize, page_size: usize) -> Result<ListPage<Tier>, ApiError> {
    api::fetch_list(
        &format!("/api/tier?page={page}&per_page={page_size}"),
        page_size,
    )
    .await
}
