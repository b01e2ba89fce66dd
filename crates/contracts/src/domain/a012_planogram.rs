use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Merchandising planogram as returned by `/api/planogram`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planogram {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub customer_group: Option<String>,
    #[serde(default)]
    pub shelf_count: Option<u32>,
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_to: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
}
