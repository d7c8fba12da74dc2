//! The `Tender` value type.

use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tender_shared::registry;
use tender_shared::{CurrencyCode, Locale, MoneyError, MoneyResult};

use super::wire;
use crate::currency::Currency;
use crate::display::DisplayableMoney;
use crate::rounding::{self, RoundingMode};

/// An exact decimal amount of currency `C`.
///
/// Equality and ordering compare the full-precision amount, not the rounded
/// one. The currency never changes for the lifetime of a value.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_core::currency::Eur;
/// use tender_core::money::Tender;
///
/// let price = Tender::<Eur>::new(dec!(3.14159));
/// assert_eq!(price.rounded_amount(), dec!(3.14));
/// assert_eq!(price + Tender::new(dec!(1)), Tender::new(dec!(4.14159)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tender<C: Currency> {
    amount: Decimal,
    currency: PhantomData<C>,
}

impl<C: Currency> Tender<C> {
    /// Creates an amount of `C`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: PhantomData,
        }
    }

    /// Zero in currency `C`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Parses an amount written with `locale`'s separators, e.g. `"1.234,56"`
    /// in `nl_NL`.
    pub fn from_str_localized(input: &str, locale: &Locale) -> MoneyResult<Self> {
        registry::parse_localized(input, locale).map(Self::new)
    }

    /// The exact stored amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this amount.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        C::CODE
    }

    /// The amount rounded half-to-even to the currency's minor unit.
    #[must_use]
    pub fn rounded_amount(&self) -> Decimal {
        let scale = i32::try_from(C::minor_unit_scale()).unwrap_or(i32::MAX);
        rounding::round(self.amount, scale, RoundingMode::Bankers)
    }

    /// Whether the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// The whole part, `amount - minor_units`.
    ///
    /// For negative amounts this is the next lower integer: `-3.14` has major
    /// units `-4`.
    #[must_use]
    pub fn major_units(&self) -> Decimal {
        self.amount - self.minor_units()
    }

    /// The fractional part, `amount mod 1` with the quotient floored.
    ///
    /// Always in `[0, 1)`, even for negative amounts: `-3.14` has minor units
    /// `0.86`, not the truncated remainder `-0.14` that follows the amount's
    /// sign. Use [`Tender::abs`] first to get the fraction written after the
    /// sign.
    #[must_use]
    pub fn minor_units(&self) -> Decimal {
        rounding::modulo(self.amount, Decimal::ONE)
    }

    /// The absolute amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs())
    }

    /// A display adapter at the current locale.
    #[must_use]
    pub fn displayable(&self) -> DisplayableMoney {
        DisplayableMoney::new(self.amount, C::CODE, Locale::current())
    }
}

impl<C: Currency> From<Decimal> for Tender<C> {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),*) => {
        $(
            impl<C: Currency> From<$int> for Tender<C> {
                fn from(amount: $int) -> Self {
                    Self::new(Decimal::from(amount))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

/// Converts through the nearest decimal representation.
///
/// Binary floats rarely hold the decimal the literal suggests, so the result
/// may differ from the intended amount in the last digits. NaN, infinities and
/// values outside the decimal range fail with
/// [`MoneyError::NotRepresentable`].
impl<C: Currency> TryFrom<f64> for Tender<C> {
    type Error = MoneyError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(amount)
            .map(Self::new)
            .ok_or_else(|| MoneyError::NotRepresentable(amount.to_string()))
    }
}

impl<C: Currency> FromStr for Tender<C> {
    type Err = MoneyError;

    /// Parses plain or exponent notation. Input that would need rounding to
    /// fit a `Decimal` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::parse_decimal(s).map(Self::new)
    }
}

impl<C: Currency> fmt::Display for Tender<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.displayable().formatted())
    }
}

impl<C: Currency> fmt::Debug for Tender<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tender")
            .field("amount", &self.amount)
            .field("currency", &C::CODE)
            .finish()
    }
}

impl<C: Currency> Sum for Tender<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|tender| tender.amount).sum())
    }
}

impl<'a, C: Currency> Sum<&'a Tender<C>> for Tender<C> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<C: Currency> Serialize for Tender<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        wire::serialize(&self.amount, serializer)
    }
}

impl<'de, C: Currency> Deserialize<'de> for Tender<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wire::deserialize(deserializer).map(Self::new)
    }
}
