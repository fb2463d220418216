//! Property-based integration tests for the payment calculator.
//!
//! These tests check that the breakdown invariants hold across random
//! non-negative inputs, using the `proptest` crate for case generation.

use proptest::prelude::*;
use rentslip_core::constants::MAX_AMOUNT;
use rentslip_core::history::HistoryEntry;
use rentslip_core::payments::{compute_breakdown, round2, PaymentRecord};
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a non-negative amount in whole cents, up to one million.
fn arb_amount() -> impl Strategy<Value = Decimal> + Clone {
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates an amount with up to four decimal places, as a typed value can have.
fn arb_fine_amount() -> impl Strategy<Value = Decimal> + Clone {
    (0i64..=10_000_000_000).prop_map(|units| Decimal::new(units, 4))
}

/// Generates any non-negative `Decimal`, up to `Decimal::MAX`, at any scale.
fn arb_full_range_amount() -> impl Strategy<Value = Decimal> + Clone {
    prop_oneof![
        Just(Decimal::MAX),
        (any::<u32>(), any::<u32>(), any::<u32>(), 0u32..=28)
            .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale)),
    ]
}

fn arb_record_with(
    amount: impl Strategy<Value = Decimal> + Clone,
) -> impl Strategy<Value = PaymentRecord> {
    (
        (amount.clone(), amount.clone(), amount.clone(), amount.clone()),
        (amount.clone(), amount.clone(), amount),
        any::<bool>(),
    )
        .prop_map(
            |((rent, condo, water, electricity), (tax, management, other), monthly)| {
                PaymentRecord {
                    property_name: "Imóvel".to_string(),
                    tenant_name: "Locatário".to_string(),
                    month: "2024-01".to_string(),
                    rent_value: rent,
                    condo_fee: condo,
                    water_fee: water,
                    electricity_bill: electricity,
                    property_tax: tax,
                    is_property_tax_monthly: monthly,
                    management_fee: management,
                    other_expenses: other,
                    other_expenses_description: String::new(),
                }
            },
        )
}

fn arb_record() -> impl Strategy<Value = PaymentRecord> {
    arb_record_with(arb_amount())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every output figure carries exactly two decimal places.
    #[test]
    fn prop_outputs_have_two_decimals(record in arb_record_with(arb_fine_amount())) {
        let breakdown = compute_breakdown(&record);

        prop_assert_eq!(breakdown.deductions_subtotal.scale(), 2);
        prop_assert_eq!(breakdown.net_rent.scale(), 2);
        prop_assert_eq!(breakdown.total.scale(), 2);
        if !record.is_property_tax_monthly {
            prop_assert_eq!(breakdown.monthly_property_tax.scale(), 2);
        }
    }

    /// Cent-valued inputs give cent-valued outputs for every figure.
    #[test]
    fn prop_outputs_are_rounded_to_cents(record in arb_record()) {
        let breakdown = compute_breakdown(&record);

        for value in [
            breakdown.monthly_property_tax,
            breakdown.deductions_subtotal,
            breakdown.net_rent,
            breakdown.total,
        ] {
            prop_assert_eq!(round2(value), value);
            prop_assert_eq!(value.scale(), 2);
        }
    }

    /// Net rent floors at zero.
    #[test]
    fn prop_net_rent_never_negative(record in arb_record_with(arb_fine_amount())) {
        let breakdown = compute_breakdown(&record);
        prop_assert!(breakdown.net_rent >= Decimal::ZERO);
        prop_assert!(!breakdown.net_rent.is_sign_negative());
    }

    /// A monthly property tax passes through unchanged.
    #[test]
    fn prop_monthly_tax_passes_through(record in arb_record()) {
        let record = PaymentRecord { is_property_tax_monthly: true, ..record };
        let breakdown = compute_breakdown(&record);
        prop_assert_eq!(breakdown.monthly_property_tax, record.property_tax);
    }

    /// An annual property tax is divided by 12 and rounded to the cent.
    #[test]
    fn prop_annual_tax_is_twelfth(record in arb_record()) {
        let record = PaymentRecord { is_property_tax_monthly: false, ..record };
        let breakdown = compute_breakdown(&record);
        prop_assert_eq!(
            breakdown.monthly_property_tax,
            round2(record.property_tax / Decimal::from(12))
        );
    }

    /// The grand total is rent plus subtotal minus the management fee.
    #[test]
    fn prop_total_matches_subtotal(record in arb_record()) {
        let breakdown = compute_breakdown(&record);
        prop_assert_eq!(
            breakdown.total,
            record.rent_value + breakdown.deductions_subtotal - record.management_fee
        );
    }

    /// Amounts anywhere in the `Decimal` range never make the calculator fail.
    #[test]
    fn prop_full_range_amounts_never_fail(record in arb_record_with(arb_full_range_amount())) {
        let breakdown = compute_breakdown(&record);

        prop_assert_eq!(breakdown.deductions_subtotal.scale(), 2);
        prop_assert_eq!(breakdown.total.scale(), 2);
        prop_assert!(breakdown.net_rent >= Decimal::ZERO);
        prop_assert!(breakdown.total.abs() <= MAX_AMOUNT * Decimal::from(7));
    }

    /// Same record, same breakdown.
    #[test]
    fn prop_idempotent(record in arb_record_with(arb_fine_amount())) {
        prop_assert_eq!(compute_breakdown(&record), compute_breakdown(&record.clone()));
    }

    /// A snapshot stored in history and read back recomputes the saved total.
    #[test]
    fn prop_history_round_trip_reproduces_total(record in arb_record_with(arb_fine_amount())) {
        let entry = HistoryEntry {
            id: "entry".to_string(),
            date: chrono::Utc::now(),
            total: compute_breakdown(&record).total,
            payment_data: record,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let restored: HistoryEntry = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&restored.payment_data, &entry.payment_data);
        prop_assert_eq!(compute_breakdown(&restored.payment_data).total, entry.total);
    }
}
