pub mod currency_format;
pub mod time_utils;

pub use currency_format::format_currency;
pub use time_utils::{format_date_short, format_month_long, format_month_long_or, parse_reference_month};
