//! Dynamic Money Factory.
//!
//! Maps a runtime [`CurrencyCode`] to the matching typed [`Tender`]. The
//! dispatch table is generated from the same currency list as the code
//! enumeration, so every code has exactly one constructor.

use rust_decimal::Decimal;
use tender_shared::{CurrencyCode, MoneyResult};
use tracing::trace;

use super::{DynamicMoney, Tender};
use crate::currency::Currency;

/// Builds a [`DynamicMoney`] of one fixed currency.
pub type MoneyConstructor = fn(Decimal) -> DynamicMoney;

fn construct<C: Currency>(amount: Decimal) -> DynamicMoney {
    DynamicMoney::new(Tender::<C>::new(amount))
}

macro_rules! define_constructor_table {
    ($(($variant:ident, $code:literal, $digits:literal, $symbol:literal, $name:literal, $plural:literal)),* $(,)?) => {
        /// Constructors indexed by `CurrencyCode` discriminant.
        static CONSTRUCTORS: [MoneyConstructor; CurrencyCode::COUNT] = [
            $(construct::<crate::currency::$variant>),*
        ];
    };
}

tender_shared::for_each_currency!(define_constructor_table);

/// Creates money from a runtime currency code.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_core::money::MoneyFactory;
/// use tender_shared::CurrencyCode;
///
/// let money = MoneyFactory::money_from(dec!(3.14), CurrencyCode::Eur);
/// assert_eq!(money.currency(), CurrencyCode::Eur);
/// assert_eq!(money.amount(), dec!(3.14));
/// ```
pub struct MoneyFactory;

impl MoneyFactory {
    /// Wraps `amount` in the tender type of `currency`.
    #[must_use]
    pub fn money_from(amount: Decimal, currency: CurrencyCode) -> DynamicMoney {
        trace!(%amount, %currency, "Constructing money");
        CONSTRUCTORS[currency.index()](amount)
    }

    /// Like [`MoneyFactory::money_from`] for a textual code such as `"eur"`.
    ///
    /// Fails with `MoneyError::UnknownCurrency` for codes outside the supported
    /// set.
    pub fn money_from_code(amount: Decimal, code: &str) -> MoneyResult<DynamicMoney> {
        let currency: CurrencyCode = code.parse()?;
        Ok(Self::money_from(amount, currency))
    }
}
