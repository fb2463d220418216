//! Share texts and links for the chat and email channels.
//!
//! Both channels render the same figures from one `PaymentBreakdown`; only
//! the emphasis markup and the link format differ.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::line_items::{line_items, LABEL_OTHER_EXPENSES};
use crate::errors::{Error, ValidationError};
use crate::payments::{PaymentBreakdown, PaymentRecord};
use crate::utils::format_currency;

const CHAT_SHARE_URL: &str = "https://wa.me/?text=";
const TITLE: &str = "Detalhamento de Pagamento";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    /// WhatsApp message; `*` marks bold text.
    Chat,
    Email,
}

impl ShareChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareChannel::Chat => "chat",
            ShareChannel::Email => "email",
        }
    }

    fn emphasize(&self, text: &str) -> String {
        match self {
            ShareChannel::Chat => format!("*{}*", text),
            ShareChannel::Email => text.to_string(),
        }
    }
}

impl fmt::Display for ShareChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" | "whatsapp" => Ok(ShareChannel::Chat),
            "email" | "mail" => Ok(ShareChannel::Email),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown share channel '{}'",
                other
            ))
            .into()),
        }
    }
}

/// Subject line used by the email channel.
pub fn share_subject(record: &PaymentRecord) -> String {
    format!("{} - {}", TITLE, record.month)
}

/// The message body for `channel`.
///
/// Fixed order: header (month, property, tenant), rent, condo, water,
/// electricity, property tax, management fee (negated), other expenses when
/// present, then the total.
pub fn share_text(
    channel: ShareChannel,
    record: &PaymentRecord,
    breakdown: &PaymentBreakdown,
) -> String {
    let mut lines = vec![
        channel.emphasize(&share_subject(record)),
        format!("Imóvel: {}", record.property_name),
        format!("Locatário: {}", record.tenant_name),
        String::new(),
    ];

    for item in line_items(record, breakdown) {
        if item.label == LABEL_OTHER_EXPENSES {
            if item.amount > Decimal::ZERO {
                lines.push(format!("Outras despesas: {}", format_currency(item.amount)));
                if let Some(note) = &item.note {
                    lines.push(format!("Descrição: {}", note));
                }
            }
            continue;
        }

        let sign = if item.is_withheld() { "-" } else { "" };
        lines.push(format!(
            "{}: {}{}",
            item.label,
            sign,
            format_currency(item.amount)
        ));
    }

    lines.push(String::new());
    lines.push(channel.emphasize(&format!(
        "Total a pagar: {}",
        format_currency(breakdown.total)
    )));

    lines.join("\n")
}

/// A link that opens the channel's composer with the message filled in.
pub fn share_link(
    channel: ShareChannel,
    record: &PaymentRecord,
    breakdown: &PaymentBreakdown,
) -> String {
    let body = share_text(channel, record, breakdown);
    match channel {
        ShareChannel::Chat => format!("{}{}", CHAT_SHARE_URL, urlencoding::encode(&body)),
        ShareChannel::Email => format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&share_subject(record)),
            urlencoding::encode(&body)
        ),
    }
}
