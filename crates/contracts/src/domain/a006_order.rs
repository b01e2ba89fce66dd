//! Agent order document. The only entity the frontend edits line by line,
//! so it carries the conversion into [`DocLine`] for the totals module.

use crate::domain::common::NamedRef;
use crate::shared::totals::DocLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Approved,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Approved => "Approved",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default)]
    pub product_uuid: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    /// Backend-supplied VAT amount; absent for freshly entered rows.
    #[serde(default)]
    pub vat: Option<f64>,
}

impl OrderLine {
    pub fn as_doc_line(&self) -> DocLine {
        DocLine {
            quantity: self.quantity,
            unit_price: self.unit_price,
            vat: self.vat,
        }
    }
}

/// Order as returned by `/api/order` (list rows omit `lines`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub uuid: String,
    pub order_no: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub customer: NamedRef,
    #[serde(default)]
    pub salesman_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    /// Headline amount as the backend computed it.
    #[serde(default)]
    pub total: Option<f64>,
}

impl Order {
    pub fn doc_lines(&self) -> Vec<DocLine> {
        self.lines.iter().map(OrderLine::as_doc_line).collect()
    }
}

/// Create/update payload for the order form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDto {
    pub uuid: Option<String>,
    pub customer_uuid: String,
    pub warehouse_uuid: String,
    pub salesman_uuid: String,
    pub order_date: String,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::totals::{compute_totals, FinalTotalRule, TaxRule};

    #[test]
    fn order_lines_feed_the_totals_module() {
        let order = Order {
            lines: vec![
                OrderLine {
                    quantity: 2.0,
                    unit_price: 10.0,
                    ..Default::default()
                },
                OrderLine {
                    quantity: 1.0,
                    unit_price: 5.0,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let totals = compute_totals(
            &order.doc_lines(),
            TaxRule::STANDARD,
            FinalTotalRule::GrossPlusVat,
        );
        assert!((totals.gross - 25.0).abs() < 0.005);
    }

    #[test]
    fn status_decodes_snake_case() {
        let s: OrderStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(s, OrderStatus::Approved);
    }
}
