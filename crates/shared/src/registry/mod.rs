//! Currency Registry.
//!
//! Read-only, process-wide currency and locale data with pure lookup and
//! formatting functions. Nothing here holds mutable state, so every function
//! is safe to call concurrently.

mod format;
mod locale_data;

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{MoneyError, MoneyResult};
use crate::types::{CurrencyCode, DEFAULT_MINOR_UNIT_DIGITS, Locale};
use format::NumberStyle;
use locale_data::{home_currency, language_conventions, language_symbol, narrow_symbol, region_separators};

pub use locale_data::NBSP;

/// Options for [`formatted_string`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Caps the number of fractional digits. Defaults to the currency's
    /// minor-unit digits.
    pub max_fraction_digits: Option<u32>,
    /// Replaces the locale's currency symbol. An empty string omits it.
    pub symbol: Option<String>,
}

impl FormatOptions {
    /// Options with a fractional-digit cap.
    #[must_use]
    pub fn with_max_fraction_digits(max_fraction_digits: Option<u32>) -> Self {
        Self {
            max_fraction_digits,
            symbol: None,
        }
    }

    /// Options that leave out the currency symbol.
    #[must_use]
    pub fn without_symbol() -> Self {
        Self {
            max_fraction_digits: None,
            symbol: Some(String::new()),
        }
    }
}

/// Minor-unit digits of a currency code, `2` for codes without an override
/// or outside the supported set.
pub fn minor_unit_digits(code: &str) -> u32 {
    CurrencyCode::from_code(code).map_or(DEFAULT_MINOR_UNIT_DIGITS, CurrencyCode::minor_unit_digits)
}

/// Singular name of a currency in a language, e.g. `"yen japonais"`.
///
/// Falls back to the English name when no translation exists. Returns
/// `None` for codes outside the supported set.
pub fn localized_name(code: &str, language: &str) -> Option<String> {
    names(code, language).map(|(singular, _)| singular.to_string())
}

/// Name of a currency fitting `amount`: singular for exactly one, plural for
/// every other amount including zero, fractions and negatives.
///
/// The region does not change the wording of names; it is accepted so callers
/// can pass a full locale.
pub fn pluralized_localized_name(
    code: &str,
    amount: Decimal,
    language: &str,
    region: Option<&str>,
) -> Option<String> {
    let (singular, plural) = names(code, language)?;
    let name = if amount == Decimal::ONE { singular } else { plural };
    debug!(code, %amount, language, ?region, name, "Resolved currency name");
    Some(name.to_string())
}

/// Currency symbol as written in `locale`.
///
/// Inside the currency's home region the local symbol is used (`¥` for JPY in
/// `en_JP`), elsewhere the language's international one (`JP¥` in `en_FR`).
/// Codes outside the supported set are their own symbol.
pub fn symbol(code: &str, locale: &Locale) -> String {
    CurrencyCode::from_code(code).map_or_else(
        || code.to_ascii_uppercase(),
        |currency| currency_symbol(currency, locale).to_string(),
    )
}

/// Decimal separator of a locale.
pub fn decimal_separator(locale: &Locale) -> char {
    number_style(locale).decimal
}

/// Grouping separator of a locale.
pub fn grouping_separator(locale: &Locale) -> char {
    number_style(locale).grouping
}

/// Formats `amount` as a currency string for `locale`.
///
/// The amount is rounded half-to-even to the fractional digits allowed by
/// `options`, padded to the currency's minor-unit digits, grouped by
/// thousands and decorated with the symbol the way the language places it:
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_shared::registry::{formatted_string, FormatOptions};
/// use tender_shared::Locale;
///
/// let nl: Locale = "nl_NL".parse().unwrap();
/// let text = formatted_string(dec!(1234.5), "EUR", &nl, &FormatOptions::default());
/// assert_eq!(text, "€\u{a0}1.234,50");
/// ```
pub fn formatted_string(amount: Decimal, code: &str, locale: &Locale, options: &FormatOptions) -> String {
    let style = number_style(locale);
    let digits = minor_unit_digits(code);
    let max_digits = options.max_fraction_digits.unwrap_or(digits);

    let (text, negative) = format::format_digits(amount, digits, max_digits, &style);

    let shown_symbol = match &options.symbol {
        Some(custom) => custom.clone(),
        None => symbol(code, locale),
    };

    format::place_symbol(&text, negative, &shown_symbol, style.placement)
}

/// Parses a locale-independent amount such as `"1234.56"` or `"1.5e3"`.
///
/// Input that a `Decimal` can only hold after rounding is rejected.
pub fn parse_decimal(input: &str) -> MoneyResult<Decimal> {
    format::parse_exact(input.trim()).map_err(|e| {
        debug!(input, error = %e, "Rejected amount");
        MoneyError::parse(input)
    })
}

/// Parses an amount written with `locale`'s separators, e.g. `"1.234,56"`
/// for `nl_NL`.
pub fn parse_localized(input: &str, locale: &Locale) -> MoneyResult<Decimal> {
    format::parse_digits(input, &number_style(locale))
}

fn names(code: &str, language: &str) -> Option<(&'static str, &'static str)> {
    let currency = CurrencyCode::from_code(code)?;
    let language = language.to_ascii_lowercase();

    locale_data::localized_names(&language, currency).or_else(|| {
        debug!(code, language = %language, "No localized currency name, using English");
        locale_data::localized_names("en", currency)
    })
}

fn currency_symbol(currency: CurrencyCode, locale: &Locale) -> &'static str {
    let at_home = locale
        .region()
        .and_then(home_currency)
        .is_some_and(|home| home == currency);

    if at_home && let Some(narrow) = narrow_symbol(currency) {
        return narrow;
    }

    language_symbol(locale.language(), locale.region(), currency).unwrap_or_else(|| currency.symbol())
}

fn number_style(locale: &Locale) -> NumberStyle {
    let conventions = language_conventions(locale.language());
    let (decimal, grouping) = locale
        .region()
        .and_then(region_separators)
        .unwrap_or((conventions.decimal, conventions.grouping));

    NumberStyle {
        placement: conventions.placement,
        decimal,
        grouping,
    }
}
