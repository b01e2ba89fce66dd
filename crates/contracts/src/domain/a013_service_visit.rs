use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Open,
    InProgress,
    Closed,
}

impl VisitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VisitStatus::Open => "Open",
            VisitStatus::InProgress => "In progress",
            VisitStatus::Closed => "Closed",
        }
    }
}

impl Default for VisitStatus {
    fn default() -> Self {
        VisitStatus::Open
    }
}

/// Field-service visit as returned by `/api/service-visit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceVisit {
    #[serde(default)]
    pub uuid: String,
    pub visit_no: String,
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub status: VisitStatus,
}
