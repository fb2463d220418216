use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for every monetary figure
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Largest magnitude an input amount can hold. Larger values are capped, so
/// the sum of every field of a record stays far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Months an annual property tax is spread over
pub const MONTHS_PER_YEAR: u32 = 12;

/// Storage key holding the ordered history list
pub const HISTORY_STORAGE_KEY: &str = "paymentHistory";

/// Placeholder shown when a name or month was left blank
pub const NOT_SPECIFIED: &str = "Não especificado";

/// Placeholder for a blank property name in history listings
pub const PROPERTY_NOT_SPECIFIED: &str = "Imóvel não especificado";

/// Export filename fallbacks
pub const FILENAME_PREFIX: &str = "pagamento";
pub const FILENAME_PROPERTY_FALLBACK: &str = "imovel";
pub const FILENAME_MONTH_FALLBACK: &str = "atual";
