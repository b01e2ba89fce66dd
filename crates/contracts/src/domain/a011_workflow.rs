use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Approval workflow assignment as returned by `/api/workflow`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub step_count: Option<u32>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
}
