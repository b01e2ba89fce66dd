pub mod dates;
pub mod envelope;
pub mod filters;
pub mod totals;

pub use envelope::{Envelope, ExportTicket, ListPage, Pagination};
pub use filters::FilterPayload;
pub use totals::{compute_totals, DocLine, DocumentTotals, FinalTotalRule, TaxRule};
