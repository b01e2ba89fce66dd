use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Field survey as returned by `/api/survey`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default)]
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub question_count: Option<u32>,
    #[serde(default)]
    pub response_count: Option<u32>,
    #[serde(default)]
    pub status: EntityStatus,
}
