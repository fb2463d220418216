//! Line items shared by every presentation of a breakdown.

use rust_decimal::Decimal;

use crate::payments::{PaymentBreakdown, PaymentRecord};

pub const LABEL_RENT: &str = "Aluguel";
pub const LABEL_CONDO: &str = "Condomínio";
pub const LABEL_WATER: &str = "Água";
pub const LABEL_ELECTRICITY: &str = "Luz";
pub const LABEL_PROPERTY_TAX: &str = "IPTU";
pub const LABEL_PROPERTY_TAX_CONVERTED: &str = "IPTU (mensal)";
pub const LABEL_MANAGEMENT_FEE: &str = "Taxa de Administração";
pub const LABEL_OTHER_EXPENSES: &str = "Outras Despesas";
pub const LABEL_EXPENSES: &str = "Despesas";
pub const LABEL_RENT_VALUE: &str = "Valor do Aluguel";
pub const LABEL_NET_RENT: &str = "Valor Líquido";

/// What a line contributes to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Charge,
    /// Withheld from the total, shown negated.
    Withheld,
}

/// One row of a breakdown as shown to the tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: Decimal,
    pub kind: LineKind,
    /// Free-text detail, only set for other expenses.
    pub note: Option<String>,
}

impl LineItem {
    fn charge(label: &'static str, amount: Decimal) -> Self {
        Self {
            label,
            amount,
            kind: LineKind::Charge,
            note: None,
        }
    }

    pub fn is_withheld(&self) -> bool {
        self.kind == LineKind::Withheld
    }
}

/// All line items in display order, zero amounts included.
///
/// The property tax line carries `breakdown.monthly_property_tax`, labelled
/// "(mensal)" when it was converted from an annual amount.
pub fn line_items(record: &PaymentRecord, breakdown: &PaymentBreakdown) -> Vec<LineItem> {
    let tax_label = if record.is_property_tax_monthly {
        LABEL_PROPERTY_TAX
    } else {
        LABEL_PROPERTY_TAX_CONVERTED
    };

    let description = record.other_expenses_description.trim();

    vec![
        LineItem::charge(LABEL_RENT, record.rent_value),
        LineItem::charge(LABEL_CONDO, record.condo_fee),
        LineItem::charge(LABEL_WATER, record.water_fee),
        LineItem::charge(LABEL_ELECTRICITY, record.electricity_bill),
        LineItem::charge(tax_label, breakdown.monthly_property_tax),
        LineItem {
            label: LABEL_MANAGEMENT_FEE,
            amount: record.management_fee,
            kind: LineKind::Withheld,
            note: None,
        },
        LineItem {
            label: LABEL_OTHER_EXPENSES,
            amount: record.other_expenses,
            kind: LineKind::Charge,
            note: (!description.is_empty()).then(|| description.to_string()),
        },
    ]
}

/// Line items with a positive amount, as the summary and document show them.
pub fn visible_line_items(record: &PaymentRecord, breakdown: &PaymentBreakdown) -> Vec<LineItem> {
    line_items(record, breakdown)
        .into_iter()
        .filter(|item| item.amount > Decimal::ZERO)
        .collect()
}

/// The landlord-side view: gross rent, what is taken out of it, and the net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentDeductions {
    pub rent_value: Decimal,
    /// Present when the deductions subtotal is positive.
    pub expenses: Option<Decimal>,
    /// Present when a management fee is charged.
    pub management_fee: Option<Decimal>,
    pub net_rent: Decimal,
}

impl RentDeductions {
    /// `None` when the section would have nothing to show.
    pub fn from_breakdown(record: &PaymentRecord, breakdown: &PaymentBreakdown) -> Option<Self> {
        if !breakdown.shows_rent_deductions(record) {
            return None;
        }
        Some(Self {
            rent_value: record.rent_value,
            expenses: (breakdown.deductions_subtotal > Decimal::ZERO)
                .then_some(breakdown.deductions_subtotal),
            management_fee: (record.management_fee > Decimal::ZERO)
                .then_some(record.management_fee),
            net_rent: breakdown.net_rent,
        })
    }

    pub fn is_net_positive(&self) -> bool {
        self.net_rent > Decimal::ZERO
    }
}
