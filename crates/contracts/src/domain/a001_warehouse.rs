use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Warehouse as returned by `/api/warehouse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
}

/// Create/update payload. The backend assigns `uuid` on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseDto {
    pub uuid: Option<String>,
    pub name: String,
    pub code: String,
    pub region_id: Option<String>,
    pub address: String,
    pub phone: String,
}
