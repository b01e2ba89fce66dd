//! Document total arithmetic shared by order, invoice and delivery pages.
//!
//! Historically every page recomputed these sums with its own copy of the
//! formula and its own hardcoded 18% factor. The tax rate is now an
//! explicit [`TaxRule`] passed in by the page, and "net" uniformly means
//! `gross - vat`. Pages whose backend already supplies a final amount keep
//! it through [`FinalTotalRule::Passthrough`].

use serde::{Deserialize, Serialize};

/// Tax-inclusive VAT rate. `rate` is the fraction, e.g. `0.18` for 18%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRule {
    rate: f64,
}

impl TaxRule {
    /// Standard rate used when the backend does not supply line VAT.
    pub const STANDARD: TaxRule = TaxRule { rate: 0.18 };

    pub fn new(rate: f64) -> Self {
        Self { rate: rate.max(0.0) }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// VAT portion of a tax-inclusive gross amount:
    /// `gross - gross / (1 + rate)`.
    pub fn inclusive_vat(&self, gross: f64) -> f64 {
        gross - gross / (1.0 + self.rate)
    }
}

/// One line item as the pages see it. `vat` is the backend-supplied VAT
/// amount when present; otherwise it is derived from the tax rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocLine {
    pub quantity: f64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(default)]
    pub vat: Option<f64>,
}

impl DocLine {
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity,
            unit_price,
            vat: None,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    pub fn line_vat(&self, tax: TaxRule) -> f64 {
        match self.vat {
            Some(v) => v,
            None => tax.inclusive_vat(self.line_total()),
        }
    }
}

/// How a page arrives at its headline figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinalTotalRule {
    /// `gross + vat` (order entry pages).
    GrossPlusVat,
    /// Trust the amount the backend sent (invoice/delivery detail pages).
    Passthrough(f64),
}

/// Aggregates over the currently loaded lines. Display formatting to two
/// decimals happens at render time; these are raw sums.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentTotals {
    pub gross: f64,
    pub vat: f64,
    pub net: f64,
    pub final_total: f64,
}

pub fn compute_totals(lines: &[DocLine], tax: TaxRule, rule: FinalTotalRule) -> DocumentTotals {
    let gross: f64 = lines.iter().map(DocLine::line_total).sum();
    let vat: f64 = lines.iter().map(|l| l.line_vat(tax)).sum();
    let net = gross - vat;
    let final_total = match rule {
        FinalTotalRule::GrossPlusVat => gross + vat,
        FinalTotalRule::Passthrough(v) => v,
    };
    DocumentTotals {
        gross,
        vat,
        net,
        final_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn derives_vat_from_inclusive_rate() {
        let lines = vec![DocLine::new(2.0, 10.0), DocLine::new(1.0, 5.0)];
        let totals = compute_totals(&lines, TaxRule::STANDARD, FinalTotalRule::GrossPlusVat);
        assert!(approx(totals.gross, 25.0));
        assert!(approx(totals.vat, 25.0 - 25.0 / 1.18)); // ~3.81
        assert!(approx(totals.net, 25.0 / 1.18)); // ~21.19
        assert!(approx(totals.final_total, totals.gross + totals.vat));
    }

    #[test]
    fn supplied_vat_wins_over_derived() {
        let lines = vec![
            DocLine {
                quantity: 3.0,
                unit_price: 4.0,
                vat: Some(1.5),
            },
            DocLine::new(1.0, 11.8),
        ];
        let totals = compute_totals(&lines, TaxRule::STANDARD, FinalTotalRule::GrossPlusVat);
        assert!(approx(totals.gross, 12.0 + 11.8));
        // First line keeps its backend VAT, second derives 11.8 - 11.8/1.18 = 1.8
        assert!(approx(totals.vat, 1.5 + 1.8));
    }

    #[test]
    fn passthrough_keeps_backend_final_amount() {
        let lines = vec![DocLine::new(1.0, 100.0)];
        let totals = compute_totals(&lines, TaxRule::STANDARD, FinalTotalRule::Passthrough(100.0));
        assert!(approx(totals.final_total, 100.0));
        assert!(approx(totals.gross, 100.0));
    }

    #[test]
    fn empty_document_is_all_zeroes() {
        let totals = compute_totals(&[], TaxRule::STANDARD, FinalTotalRule::GrossPlusVat);
        assert_eq!(totals, DocumentTotals::default());
    }

    #[test]
    fn zero_rate_means_no_vat() {
        let lines = vec![DocLine::new(2.0, 50.0)];
        let totals = compute_totals(&lines, TaxRule::new(0.0), FinalTotalRule::GrossPlusVat);
        assert!(approx(totals.vat, 0.0));
        assert!(approx(totals.net, 100.0));
    }
}
