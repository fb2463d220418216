//! Exporters - presentations of a computed breakdown.
//!
//! Exporters never compute figures of their own. They take the record and
//! the `PaymentBreakdown` the calculator produced for it.

mod document;
mod exporter;
mod line_items;
mod share;
mod summary;

pub use document::{document_filename, render_document, ExportDocument};
pub use exporter::{
    export_snapshot, DocumentExporter, PaymentExporter, ShareExporter, ShareMessage,
    SummaryExporter,
};
pub use line_items::{line_items, visible_line_items, LineItem, LineKind, RentDeductions};
pub use share::{share_link, share_subject, share_text, ShareChannel};
pub use summary::render_summary;
