use crate::domain::a006_order::OrderLine;
use crate::shared::totals::DocLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Planned,
    OnRoute,
    Completed,
    Failed,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Planned => "Planned",
            DeliveryStatus::OnRoute => "On route",
            DeliveryStatus::Completed => "Completed",
            DeliveryStatus::Failed => "Failed",
        }
    }
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        DeliveryStatus::Planned
    }
}

/// Delivery document as returned by `/api/delivery`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(default)]
    pub uuid: String,
    pub delivery_no: String,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub vehicle_plate: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Delivery {
    pub fn doc_lines(&self) -> Vec<DocLine> {
        self.lines.iter().map(OrderLine::as_doc_line).collect()
    }
}
