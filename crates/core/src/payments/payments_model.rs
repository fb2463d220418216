//! Payment domain models.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The form contents for one monthly payment.
///
/// Field names serialize in camelCase; this is also the persisted layout of
/// `HistoryEntry::payment_data`, so renaming a field breaks stored history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRecord {
    pub property_name: String,
    pub tenant_name: String,
    /// Reference month as `YYYY-MM`, may be empty.
    pub month: String,
    pub rent_value: Decimal,
    pub condo_fee: Decimal,
    pub water_fee: Decimal,
    pub electricity_bill: Decimal,
    pub property_tax: Decimal,
    pub is_property_tax_monthly: bool,
    pub management_fee: Decimal,
    pub other_expenses: Decimal,
    pub other_expenses_description: String,
}

impl Default for PaymentRecord {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            tenant_name: String::new(),
            month: String::new(),
            rent_value: Decimal::ZERO,
            condo_fee: Decimal::ZERO,
            water_fee: Decimal::ZERO,
            electricity_bill: Decimal::ZERO,
            property_tax: Decimal::ZERO,
            is_property_tax_monthly: true,
            management_fee: Decimal::ZERO,
            other_expenses: Decimal::ZERO,
            other_expenses_description: String::new(),
        }
    }
}

impl PaymentRecord {
    /// An empty record for the current UTC month, the form's initial state.
    pub fn for_current_month() -> Self {
        let today = Utc::now().date_naive();
        Self {
            month: format!("{:04}-{:02}", today.year(), today.month()),
            ..Self::default()
        }
    }

    /// True when at least one of the two party names is filled in.
    pub fn has_party_name(&self) -> bool {
        !self.property_name.trim().is_empty() || !self.tenant_name.trim().is_empty()
    }
}

/// Derived monetary figures for one `PaymentRecord`.
///
/// Every figure carries exactly two decimal places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    /// Property tax for this month; an annual amount divided by 12.
    pub monthly_property_tax: Decimal,
    /// Condo, water, electricity, monthly property tax and other expenses.
    pub deductions_subtotal: Decimal,
    /// What the landlord keeps after deductions and the management fee.
    /// Never negative.
    pub net_rent: Decimal,
    /// What the tenant is billed. May be negative.
    pub total: Decimal,
}

impl PaymentBreakdown {
    /// Whether the rent-deduction section is worth showing for `record`.
    pub fn shows_rent_deductions(&self, record: &PaymentRecord) -> bool {
        record.rent_value > Decimal::ZERO
            && (self.deductions_subtotal > Decimal::ZERO
                || record.management_fee > Decimal::ZERO)
    }
}
