use rust_decimal::Decimal;

use crate::payments::round2;

/// Currency symbol for the single supported locale.
pub const CURRENCY_SYMBOL: &str = "R$";

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const SYMBOL_SPACE: char = '\u{a0}';

/// Formats an amount as pt-BR reais, e.g. `R$ 1.920,00` (with a no-break
/// space after the symbol) or `-R$ 200,00`.
///
/// The value goes through the calculator's `round2` first so the printed cent
/// is the same one the calculator produced.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round2(value);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{}{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        SYMBOL_SPACE,
        group_thousands(int_part),
        DECIMAL_SEPARATOR,
        frac_part
    )
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
