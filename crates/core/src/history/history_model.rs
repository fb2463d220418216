//! History domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payments::PaymentRecord;

/// A saved payment: the record exactly as it was when saved, plus the total
/// the calculator produced for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// Save time, persisted as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub total: Decimal,
    pub payment_data: PaymentRecord,
}
