use crate::domain::a006_order::OrderLine;
use crate::domain::common::NamedRef;
use crate::shared::totals::DocLine;
use serde::{Deserialize, Serialize};

/// Invoice as returned by `/api/invoice`. Detail responses carry the
/// backend-computed money fields; the page still re-sums the lines for
/// the on-screen totals row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub uuid: String,
    pub invoice_no: String,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub customer: NamedRef,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub gross_total: Option<f64>,
    #[serde(default)]
    pub vat_total: Option<f64>,
    #[serde(default)]
    pub net_total: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Invoice {
    pub fn doc_lines(&self) -> Vec<DocLine> {
        self.lines.iter().map(OrderLine::as_doc_line).collect()
    }
}
