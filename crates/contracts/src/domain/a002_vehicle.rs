use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Fleet vehicle as returned by `/api/vehicle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub uuid: String,
    pub plate_number: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub capacity_kg: Option<f64>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
}
