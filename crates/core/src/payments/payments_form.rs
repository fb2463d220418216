//! Form/state holder for the payment being edited.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::payments_calculator::{compute_breakdown, parse_amount, sanitize_amount};
use super::payments_model::{PaymentBreakdown, PaymentRecord};
use crate::errors::{Error, ValidationError};

/// Editable fields of a `PaymentRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    PropertyName,
    TenantName,
    Month,
    RentValue,
    CondoFee,
    WaterFee,
    ElectricityBill,
    PropertyTax,
    ManagementFee,
    OtherExpenses,
    OtherExpensesDescription,
}

impl PaymentField {
    pub const ALL: [PaymentField; 11] = [
        PaymentField::PropertyName,
        PaymentField::TenantName,
        PaymentField::Month,
        PaymentField::RentValue,
        PaymentField::CondoFee,
        PaymentField::WaterFee,
        PaymentField::ElectricityBill,
        PaymentField::PropertyTax,
        PaymentField::ManagementFee,
        PaymentField::OtherExpenses,
        PaymentField::OtherExpensesDescription,
    ];

    /// The camelCase name used in the persisted layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentField::PropertyName => "propertyName",
            PaymentField::TenantName => "tenantName",
            PaymentField::Month => "month",
            PaymentField::RentValue => "rentValue",
            PaymentField::CondoFee => "condoFee",
            PaymentField::WaterFee => "waterFee",
            PaymentField::ElectricityBill => "electricityBill",
            PaymentField::PropertyTax => "propertyTax",
            PaymentField::ManagementFee => "managementFee",
            PaymentField::OtherExpenses => "otherExpenses",
            PaymentField::OtherExpensesDescription => "otherExpensesDescription",
        }
    }

    /// True for the fields holding a monetary amount.
    pub fn is_amount(&self) -> bool {
        matches!(
            self,
            PaymentField::RentValue
                | PaymentField::CondoFee
                | PaymentField::WaterFee
                | PaymentField::ElectricityBill
                | PaymentField::PropertyTax
                | PaymentField::ManagementFee
                | PaymentField::OtherExpenses
        )
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentField {
    type Err = Error;

    /// Accepts the camelCase names and their kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '-' && *c != '_').collect();
        PaymentField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown payment field '{}'",
                    s
                )))
            })
    }
}

/// Holds the record being edited and feeds it to the calculator.
///
/// Amount input never fails: blank or unparsable text becomes 0 and negative
/// amounts are clamped to 0 here, before the calculator sees them.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    record: PaymentRecord,
}

impl PaymentForm {
    pub fn new(record: PaymentRecord) -> Self {
        Self { record }
    }

    /// A blank form for the current month.
    pub fn for_current_month() -> Self {
        Self::new(PaymentRecord::for_current_month())
    }

    pub fn record(&self) -> &PaymentRecord {
        &self.record
    }

    /// A copy of the current record. Exports and saves work on a snapshot so
    /// later edits cannot change what was exported.
    pub fn snapshot(&self) -> PaymentRecord {
        self.record.clone()
    }

    /// Replaces the in-progress record, e.g. with a stored history snapshot.
    pub fn load(&mut self, record: PaymentRecord) {
        self.record = record;
    }

    /// Applies one raw edit.
    pub fn set_field(&mut self, field: PaymentField, raw: &str) {
        if let Some(slot) = self.amount_mut(field) {
            *slot = clamp_non_negative(parse_amount(raw));
            return;
        }

        let value = raw.to_string();
        match field {
            PaymentField::PropertyName => self.record.property_name = value,
            PaymentField::TenantName => self.record.tenant_name = value,
            PaymentField::Month => self.record.month = value,
            PaymentField::OtherExpensesDescription => {
                self.record.other_expenses_description = value
            }
            _ => {}
        }
    }

    /// Sets an amount that was already parsed, clamping negatives to 0 and
    /// capping it like typed input. Ignored for text fields.
    pub fn set_amount(&mut self, field: PaymentField, amount: Decimal) {
        if let Some(slot) = self.amount_mut(field) {
            *slot = clamp_non_negative(sanitize_amount(amount));
        }
    }

    pub fn set_property_tax_monthly(&mut self, is_monthly: bool) {
        self.record.is_property_tax_monthly = is_monthly;
    }

    pub fn breakdown(&self) -> PaymentBreakdown {
        compute_breakdown(&self.record)
    }

    fn amount_mut(&mut self, field: PaymentField) -> Option<&mut Decimal> {
        let slot = match field {
            PaymentField::RentValue => &mut self.record.rent_value,
            PaymentField::CondoFee => &mut self.record.condo_fee,
            PaymentField::WaterFee => &mut self.record.water_fee,
            PaymentField::ElectricityBill => &mut self.record.electricity_bill,
            PaymentField::PropertyTax => &mut self.record.property_tax,
            PaymentField::ManagementFee => &mut self.record.management_fee,
            PaymentField::OtherExpenses => &mut self.record.other_expenses,
            PaymentField::PropertyName
            | PaymentField::TenantName
            | PaymentField::Month
            | PaymentField::OtherExpensesDescription => return None,
        };
        Some(slot)
    }
}

fn clamp_non_negative(amount: Decimal) -> Decimal {
    if amount.is_sign_negative() {
        Decimal::ZERO
    } else {
        amount
    }
}
