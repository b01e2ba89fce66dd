use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Loyalty tier as returned by `/api/tier`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub customer_count: Option<u32>,
    #[serde(default)]
    pub status: EntityStatus,
}
