//! Display Adapter.
//!
//! [`DisplayableMoney`] pairs an amount and its currency with a locale and
//! renders them through the currency registry. It is a plain value: switching
//! locale with [`DisplayableMoney::with`] returns a new adapter and leaves the
//! original untouched.


use std::fmt;

use rust_decimal::Decimal;
use tender_shared::registry::{self, FormatOptions};
use tender_shared::{CurrencyCode, Locale, MoneyResult};

use crate::rounding::{CurrencyRounding, RoundingMode};

/// Formats an amount of one currency for a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayableMoney {
    amount: Decimal,
    currency: CurrencyCode,
    locale: Locale,
}

impl DisplayableMoney {
    /// Creates an adapter for `amount` of `currency` in `locale`.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode, locale: Locale) -> Self {
        Self {
            amount,
            currency,
            locale,
        }
    }

    /// The amount being formatted.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency being formatted.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// The locale used by [`DisplayableMoney::formatted`].
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Replaces the locale in place.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// A copy bound to `language` and `region`, e.g. `with("nl", Some("NL"))`.
    ///
    /// A region of `None` or `"*"` means no region.
    pub fn with(&self, language: &str, region: Option<&str>) -> MoneyResult<Self> {
        Ok(self.with_locale(Locale::new(language, region)?))
    }

    /// A copy bound to `locale`.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    /// Currency symbol in the adapter's locale.
    #[must_use]
    pub fn symbol(&self) -> String {
        registry::symbol(self.currency.as_str(), &self.locale)
    }

    /// Decimal separator in the adapter's locale.
    #[must_use]
    pub fn separator(&self) -> char {
        registry::decimal_separator(&self.locale)
    }

    /// Grouping separator in the adapter's locale.
    #[must_use]
    pub fn grouping_separator(&self) -> char {
        registry::grouping_separator(&self.locale)
    }

    /// Singular currency name in the locale's language.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        registry::localized_name(self.currency.as_str(), self.locale.language())
    }

    /// Currency name agreeing with the amount: singular for exactly one,
    /// plural for anything else.
    #[must_use]
    pub fn name_for_amount(&self) -> Option<String> {
        registry::pluralized_localized_name(
            self.currency.as_str(),
            self.amount,
            self.locale.language(),
            self.locale.region(),
        )
    }

    /// The amount formatted in the adapter's locale.
    #[must_use]
    pub fn formatted(&self) -> String {
        self.formatted_for(&self.locale, None)
    }

    /// The amount formatted in `locale`, optionally capping the fractional
    /// digits.
    #[must_use]
    pub fn formatted_for(&self, locale: &Locale, max_fraction_digits: Option<u32>) -> String {
        registry::formatted_string(
            self.amount,
            self.currency.as_str(),
            locale,
            &FormatOptions::with_max_fraction_digits(max_fraction_digits),
        )
    }

    /// The amount with its fraction dropped (rounded toward negative
    /// infinity), padded to the currency's digits.
    #[must_use]
    pub fn formatted_truncating_decimals(&self, locale: &Locale) -> String {
        let truncated = self.amount.currency_rounded(0, RoundingMode::Down);
        registry::formatted_string(truncated, self.currency.as_str(), locale, &FormatOptions::default())
    }

    /// The amount formatted in `locale` without any currency symbol.
    #[must_use]
    pub fn formatted_without_currency_symbol(&self, locale: &Locale) -> String {
        registry::formatted_string(
            self.amount,
            self.currency.as_str(),
            locale,
            &FormatOptions::without_symbol(),
        )
        .trim()
        .to_string()
    }
}

impl fmt::Display for DisplayableMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
