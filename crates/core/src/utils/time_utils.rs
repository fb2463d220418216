use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::constants::NOT_SPECIFIED;

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parses a `YYYY-MM` reference month into its first day.
pub fn parse_reference_month(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d").ok()
}

/// Long pt-BR month label, e.g. `outubro de 2026`.
///
/// Blank input yields the "not specified" placeholder; text that is not a
/// `YYYY-MM` month is returned as typed.
pub fn format_month_long(month: &str) -> String {
    if month.trim().is_empty() {
        return NOT_SPECIFIED.to_string();
    }
    match parse_reference_month(month) {
        Some(date) => long_label(date),
        None => month.to_string(),
    }
}

/// Like [`format_month_long`], but a blank month shows the month of `today`.
pub fn format_month_long_or(month: &str, today: NaiveDate) -> String {
    if month.trim().is_empty() {
        return long_label(today);
    }
    format_month_long(month)
}

fn long_label(date: NaiveDate) -> String {
    format!("{} de {}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// Short pt-BR date, `dd/mm/yyyy`, in the timezone `date` carries.
pub fn format_date_short<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_month_long() {
        assert_eq!(format_month_long("2026-10"), "outubro de 2026");
        assert_eq!(format_month_long("2024-03"), "março de 2024");
        assert_eq!(format_month_long("2025-01"), "janeiro de 2025");
    }

    #[test]
    fn test_format_month_long_fallbacks() {
        assert_eq!(format_month_long(""), NOT_SPECIFIED);
        assert_eq!(format_month_long("   "), NOT_SPECIFIED);
        assert_eq!(format_month_long("next month"), "next month");
        assert_eq!(format_month_long("2024-13"), "2024-13");
    }

    #[test]
    fn test_format_month_long_or_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_month_long_or("", today), "outubro de 2026");
        assert_eq!(format_month_long_or("2024-03", today), "março de 2024");
        assert_eq!(format_month_long_or("next month", today), "next month");
    }

    #[test]
    fn test_format_date_short() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 30, 0).unwrap();
        assert_eq!(format_date_short(&date), "07/03/2024");
    }
}
