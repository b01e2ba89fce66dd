//! Pieces shared by every entity DTO.

use serde::{Deserialize, Serialize};

/// Active/passive flag used by nearly every reference entity. The backend
/// sends it as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Passive,
}

impl EntityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Passive => "Passive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            EntityStatus::Active => EntityStatus::Passive,
            EntityStatus::Passive => EntityStatus::Active,
        }
    }
}

impl Default for EntityStatus {
    fn default() -> Self {
        EntityStatus::Active
    }
}

/// Lightweight `{ uuid, name }` reference to another entity, as embedded
/// in list rows (e.g. `customer` inside an order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedRef {
    /// Display name with the pervasive `"-"` placeholder for missing data.
    pub fn display_name(&self) -> String {
        display_or_dash(self.name.as_deref())
    }
}

/// The repo-wide convention: absent nested fields render as `"-"`, never
/// as an error.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_placeholder_for_missing_values() {
        assert_eq!(display_or_dash(None), "-");
        assert_eq!(display_or_dash(Some("")), "-");
        assert_eq!(display_or_dash(Some("  ")), "-");
        assert_eq!(display_or_dash(Some("Depot 1")), "Depot 1");
    }

    #[test]
    fn status_round_trips_lowercase() {
        let s: EntityStatus = serde_json::from_str("\"passive\"").unwrap();
        assert_eq!(s, EntityStatus::Passive);
        assert_eq!(s.toggled(), EntityStatus::Active);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"passive\"");
    }
}
