use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Sales route as returned by `/api/route`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesRoute {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub salesman_name: Option<String>,
    #[serde(default)]
    pub visit_day: Option<String>,
    #[serde(default)]
    pub customer_count: Option<u32>,
    #[serde(default)]
    pub status: EntityStatus,
}
