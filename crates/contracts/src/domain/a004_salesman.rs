use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Field salesman as returned by `/api/salesman`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Salesman {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub route_count: Option<u32>,
    #[serde(default)]
    pub status: EntityStatus,
}
