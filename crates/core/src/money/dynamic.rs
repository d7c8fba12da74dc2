//! Currency-erased money.

use std::any::Any;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tender_shared::{CurrencyCode, MoneyError, MoneyResult};

use super::{MoneyFactory, Tender};
use crate::currency::Currency;
use crate::display::DisplayableMoney;

/// Read access to a monetary amount whose currency is only known at runtime.
///
/// Implemented by every [`Tender`]; object safe so amounts of different
/// currencies can share a collection.
pub trait Money: fmt::Debug + Send + Sync {
    /// The exact stored amount.
    fn amount(&self) -> Decimal;

    /// The currency of the amount.
    fn currency(&self) -> CurrencyCode;

    /// The amount rounded half-to-even to the currency's minor unit.
    fn rounded_amount(&self) -> Decimal;

    /// Whether the amount is strictly below zero.
    fn is_negative(&self) -> bool;

    /// The whole part, `amount - minor_units`.
    fn major_units(&self) -> Decimal;

    /// The fractional part, `amount mod 1` with the quotient floored, so
    /// always in `[0, 1)` (`-3.14` gives `0.86`).
    fn minor_units(&self) -> Decimal;

    /// A display adapter at the current locale.
    fn displayable(&self) -> DisplayableMoney;

    /// Upcast used to recover the concrete [`Tender`].
    fn as_any(&self) -> &dyn Any;
}

impl<C: Currency> Money for Tender<C> {
    fn amount(&self) -> Decimal {
        Tender::amount(self)
    }

    fn currency(&self) -> CurrencyCode {
        C::CODE
    }

    fn rounded_amount(&self) -> Decimal {
        Tender::rounded_amount(self)
    }

    fn is_negative(&self) -> bool {
        Tender::is_negative(self)
    }

    fn major_units(&self) -> Decimal {
        Tender::major_units(self)
    }

    fn minor_units(&self) -> Decimal {
        Tender::minor_units(self)
    }

    fn displayable(&self) -> DisplayableMoney {
        Tender::displayable(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Owns exactly one boxed [`Tender`] of any currency.
///
/// Built from a typed tender with [`DynamicMoney::new`], or from a runtime
/// currency code with [`MoneyFactory`].
///
/// Serializes as `{"amount": 3.14, "currency": "EUR"}`.
#[derive(Debug)]
pub struct DynamicMoney {
    inner: Box<dyn Money>,
}

impl DynamicMoney {
    /// Wraps a typed tender.
    #[must_use]
    pub fn new<C: Currency>(tender: Tender<C>) -> Self {
        Self {
            inner: Box::new(tender),
        }
    }

    /// The exact stored amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.inner.amount()
    }

    /// The currency of the amount.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.inner.currency()
    }

    /// The amount rounded to the currency's minor unit.
    #[must_use]
    pub fn rounded_amount(&self) -> Decimal {
        self.inner.rounded_amount()
    }

    /// Whether the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.inner.amount().is_zero()
    }

    /// The whole part of the amount.
    #[must_use]
    pub fn major_units(&self) -> Decimal {
        self.inner.major_units()
    }

    /// The fractional part of the amount.
    #[must_use]
    pub fn minor_units(&self) -> Decimal {
        self.inner.minor_units()
    }

    /// A display adapter at the current locale.
    #[must_use]
    pub fn displayable(&self) -> DisplayableMoney {
        self.inner.displayable()
    }

    /// Returns the typed tender if the currency is `C`.
    #[must_use]
    pub fn downcast<C: Currency>(&self) -> Option<Tender<C>> {
        self.inner.as_any().downcast_ref::<Tender<C>>().copied()
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for different currencies and
    /// [`MoneyError::Overflow`] when the sum does not fit.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other, Decimal::checked_add)
    }

    /// Subtracts two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for different currencies and
    /// [`MoneyError::Overflow`] when the difference does not fit.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other, Decimal::checked_sub)
    }

    fn combine(&self, other: &Self, op: fn(Decimal, Decimal) -> Option<Decimal>) -> MoneyResult<Self> {
        if self.currency() != other.currency() {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency(),
                found: other.currency(),
            });
        }
        let amount = op(self.amount(), other.amount()).ok_or(MoneyError::Overflow)?;
        Ok(MoneyFactory::money_from(amount, self.currency()))
    }
}

impl Clone for DynamicMoney {
    fn clone(&self) -> Self {
        MoneyFactory::money_from(self.amount(), self.currency())
    }
}

impl PartialEq for DynamicMoney {
    fn eq(&self, other: &Self) -> bool {
        self.currency() == other.currency() && self.amount() == other.amount()
    }
}

impl Eq for DynamicMoney {}

impl fmt::Display for DynamicMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.displayable().formatted())
    }
}

impl<C: Currency> From<Tender<C>> for DynamicMoney {
    fn from(tender: Tender<C>) -> Self {
        Self::new(tender)
    }
}

#[derive(Serialize, Deserialize)]
struct MoneyRecord {
    #[serde(with = "super::wire")]
    amount: Decimal,
    currency: CurrencyCode,
}

impl Serialize for DynamicMoney {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRecord {
            amount: self.amount(),
            currency: self.currency(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DynamicMoney {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = MoneyRecord::deserialize(deserializer)?;
        Ok(MoneyFactory::money_from(record.amount, record.currency))
    }
}
