//! Printable payment document.
//!
//! The document is a self-contained HTML page laid out for A4. Turning it
//! into a PDF is left to whatever renderer the host has; `filename` is the
//! name the PDF should be saved under.

use askama::Template;
use chrono::{Local, NaiveDate};

use super::line_items::{visible_line_items, RentDeductions};
use super::summary::or_not_specified;
use crate::constants::{FILENAME_MONTH_FALLBACK, FILENAME_PREFIX, FILENAME_PROPERTY_FALLBACK};
use crate::errors::{Error, Result};
use crate::payments::{PaymentBreakdown, PaymentRecord};
use crate::utils::{format_currency, format_month_long_or};

/// A rendered document ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Target PDF filename, e.g. `pagamento_Apartamento_Centro_2024-03.pdf`.
    pub filename: String,
    pub html: String,
}

impl ExportDocument {
    /// Filename without the `.pdf` extension.
    pub fn file_stem(&self) -> &str {
        self.filename
            .strip_suffix(".pdf")
            .unwrap_or(self.filename.as_str())
    }
}

struct DocumentLine {
    label: &'static str,
    amount: String,
    withheld: bool,
    note: Option<String>,
}

struct DeductionRows {
    rent_value: String,
    expenses: Option<String>,
    management_fee: Option<String>,
    net_rent: String,
    net_positive: bool,
}

#[derive(Template)]
#[template(path = "payment_document.html")]
struct PaymentDocumentTemplate<'a> {
    month_label: String,
    property_name: &'a str,
    tenant_name: &'a str,
    lines: Vec<DocumentLine>,
    total: String,
    deductions: Option<DeductionRows>,
}

/// Builds the export filename from the property name and month.
///
/// Whitespace runs become `_`, and so does any character that cannot appear
/// in a file name (`/`, `\`, `:` and the like), so the name never points
/// into another directory. Blank values fall back to `imovel` and `atual`.
pub fn document_filename(record: &PaymentRecord) -> String {
    let property = filename_component(&record.property_name);
    let property = if property.is_empty() {
        FILENAME_PROPERTY_FALLBACK.to_string()
    } else {
        property
    };

    let month = filename_component(&record.month);
    let month = if month.is_empty() {
        FILENAME_MONTH_FALLBACK.to_string()
    } else {
        month
    };

    format!("{}_{}_{}.pdf", FILENAME_PREFIX, property, month)
}

fn filename_component(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if is_reserved_in_filename(c) { '_' } else { c })
        .collect()
}

fn is_reserved_in_filename(c: char) -> bool {
    c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// Renders the printable document for `record`.
///
/// A blank month is shown as the current month.
pub fn render_document(
    record: &PaymentRecord,
    breakdown: &PaymentBreakdown,
) -> Result<ExportDocument> {
    render_document_on(record, breakdown, Local::now().date_naive())
}

fn render_document_on(
    record: &PaymentRecord,
    breakdown: &PaymentBreakdown,
    today: NaiveDate,
) -> Result<ExportDocument> {
    let lines = visible_line_items(record, breakdown)
        .into_iter()
        .map(|item| DocumentLine {
            label: item.label,
            amount: format_currency(item.amount),
            withheld: item.is_withheld(),
            note: item.note,
        })
        .collect();

    let deductions =
        RentDeductions::from_breakdown(record, breakdown).map(|section| DeductionRows {
            rent_value: format_currency(section.rent_value),
            expenses: section.expenses.map(format_currency),
            management_fee: section.management_fee.map(format_currency),
            net_rent: format_currency(section.net_rent),
            net_positive: section.is_net_positive(),
        });

    let template = PaymentDocumentTemplate {
        month_label: format_month_long_or(&record.month, today),
        property_name: or_not_specified(&record.property_name),
        tenant_name: or_not_specified(&record.tenant_name),
        lines,
        total: format_currency(breakdown.total),
        deductions,
    };

    let html = template
        .render()
        .map_err(|e| Error::Unexpected(format!("Failed to render payment document: {}", e)))?;

    Ok(ExportDocument {
        filename: document_filename(record),
        html,
    })
}
