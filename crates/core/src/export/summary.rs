//! Plain-text payment summary, the running view shown while editing.

use std::fmt::Write as _;

use super::line_items::{
    visible_line_items, RentDeductions, LABEL_EXPENSES, LABEL_MANAGEMENT_FEE, LABEL_NET_RENT,
    LABEL_RENT_VALUE,
};
use crate::constants::NOT_SPECIFIED;
use crate::payments::{PaymentBreakdown, PaymentRecord};
use crate::utils::{format_currency, format_month_long};

/// Falls back to the "not specified" placeholder for blank text.
pub(crate) fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

/// Renders the summary for `record` from an already computed `breakdown`.
pub fn render_summary(record: &PaymentRecord, breakdown: &PaymentBreakdown) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Imóvel: {}", or_not_specified(&record.property_name));
    let _ = writeln!(out, "Locatário: {}", or_not_specified(&record.tenant_name));
    let _ = writeln!(out, "Mês: {}", format_month_long(&record.month));
    out.push('\n');

    for item in visible_line_items(record, breakdown) {
        let sign = if item.is_withheld() { "- " } else { "" };
        let _ = writeln!(
            out,
            "{}: {}{}",
            item.label,
            sign,
            format_currency(item.amount)
        );
        if let Some(note) = &item.note {
            let _ = writeln!(out, "  {}", note);
        }
    }
    out.push('\n');

    let _ = writeln!(out, "TOTAL: {}", format_currency(breakdown.total));

    if let Some(section) = RentDeductions::from_breakdown(record, breakdown) {
        out.push('\n');
        let _ = writeln!(out, "Deduções do Aluguel");
        let _ = writeln!(
            out,
            "{}: {}",
            LABEL_RENT_VALUE,
            format_currency(section.rent_value)
        );
        if let Some(expenses) = section.expenses {
            let _ = writeln!(out, "{}: - {}", LABEL_EXPENSES, format_currency(expenses));
        }
        if let Some(fee) = section.management_fee {
            let _ = writeln!(out, "{}: - {}", LABEL_MANAGEMENT_FEE, format_currency(fee));
        }
        let _ = writeln!(
            out,
            "{}: {}",
            LABEL_NET_RENT,
            format_currency(section.net_rent)
        );
    }

    out
}
