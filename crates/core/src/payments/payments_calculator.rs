//! The payment total / deduction calculator.
//!
//! `compute_breakdown` is the only place where payment arithmetic happens.
//! The summary view, the exported document and the share texts all consume
//! its output.
//!
//! Rounding is applied at each aggregation step, in this order:
//! 1. annual property tax / 12
//! 2. deductions subtotal
//! 3. grand total and net rent
//!
//! Rounding once at the end can differ by a cent from this sequence.

use std::str::FromStr;

use log::debug;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::payments_model::{PaymentBreakdown, PaymentRecord};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_AMOUNT, MONTHS_PER_YEAR};

/// Rounds to the cent, midpoint away from zero, and pads to two decimals.
/// A result that rounds to zero is always positive zero.
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Pads to at least two decimals without rounding away extra precision.
fn with_cents(value: Decimal) -> Decimal {
    if value.scale() >= DISPLAY_DECIMAL_PRECISION {
        return value;
    }
    let mut padded = value;
    padded.rescale(DISPLAY_DECIMAL_PRECISION);
    padded
}

/// Calculator-side sanitization of one amount.
///
/// `Decimal` cannot hold NaN or infinities. What is left to fold here is a
/// signed zero and magnitudes beyond [`MAX_AMOUNT`], which are capped so the
/// breakdown sums cannot overflow. Raw user input is converted with
/// [`parse_amount`] or [`amount_from_f64`] before it reaches a record.
pub fn sanitize_amount(value: Decimal) -> Decimal {
    let mut value = value.clamp(-MAX_AMOUNT, MAX_AMOUNT);
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

/// Converts a float amount. NaN and infinities become 0; finite values
/// beyond [`MAX_AMOUNT`] are capped.
pub fn amount_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    let bound = MAX_AMOUNT.to_f64().unwrap_or(f64::MAX);
    Decimal::from_f64(value.clamp(-bound, bound)).map_or(Decimal::ZERO, sanitize_amount)
}

/// Parses a typed amount. Blank or unparsable text becomes 0.
///
/// A lone comma is read as the decimal separator. When both `.` and `,`
/// appear, the last one is the decimal separator and the other groups
/// thousands, so `1.500,00` is 1500. Exponent notation is accepted through
/// the float path.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = normalize_separators(trimmed);

    match Decimal::from_str(&normalized) {
        Ok(value) => sanitize_amount(value),
        Err(_) => normalized
            .parse::<f64>()
            .map(amount_from_f64)
            .unwrap_or(Decimal::ZERO),
    }
}

fn normalize_separators(text: &str) -> String {
    match (text.rfind('.'), text.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (None, Some(_)) => text.replace(',', "."),
        _ => text.to_string(),
    }
}

/// Sanitized monetary inputs of one record.
#[derive(Debug, Clone, Copy)]
struct Amounts {
    rent: Decimal,
    condo: Decimal,
    water: Decimal,
    electricity: Decimal,
    property_tax: Decimal,
    management: Decimal,
    other: Decimal,
}

impl From<&PaymentRecord> for Amounts {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            rent: sanitize_amount(record.rent_value),
            condo: sanitize_amount(record.condo_fee),
            water: sanitize_amount(record.water_fee),
            electricity: sanitize_amount(record.electricity_bill),
            property_tax: sanitize_amount(record.property_tax),
            management: sanitize_amount(record.management_fee),
            other: sanitize_amount(record.other_expenses),
        }
    }
}

/// Property tax for one month.
///
/// A monthly amount passes through unchanged; an annual one is divided by 12
/// and rounded to the cent.
pub fn monthly_property_tax(property_tax: Decimal, is_monthly: bool) -> Decimal {
    let property_tax = sanitize_amount(property_tax);
    if is_monthly {
        with_cents(property_tax)
    } else {
        round2(property_tax / Decimal::from(MONTHS_PER_YEAR))
    }
}

/// Computes the breakdown for `record`. Never fails and has no side effects.
pub fn compute_breakdown(record: &PaymentRecord) -> PaymentBreakdown {
    let amounts = Amounts::from(record);

    let monthly_property_tax =
        monthly_property_tax(amounts.property_tax, record.is_property_tax_monthly);

    let deductions_subtotal = round2(
        amounts.condo + amounts.water + amounts.electricity + monthly_property_tax + amounts.other,
    );

    let total = round2(
        amounts.rent + amounts.condo + amounts.water + amounts.electricity + monthly_property_tax
            - amounts.management
            + amounts.other,
    );

    let net_rent =
        round2(amounts.rent - deductions_subtotal - amounts.management).max(round2(Decimal::ZERO));

    debug!(
        "Computed breakdown: total={}, net_rent={}, deductions={}, monthly_tax={}",
        total, net_rent, deductions_subtotal, monthly_property_tax
    );

    PaymentBreakdown {
        monthly_property_tax,
        deductions_subtotal,
        net_rent,
        total,
    }
}
