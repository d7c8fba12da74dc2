//! Currency tags.
//!
//! Every supported currency is a zero-size marker type implementing
//! [`Currency`]. A [`Tender`](crate::money::Tender) is generic over its tag, so
//! mixing currencies in arithmetic is a compile error rather than a runtime
//! check.

mod tags;

use std::fmt::Debug;
use std::hash::Hash;

use rust_decimal::Decimal;
use tender_shared::registry;
use tender_shared::{CurrencyCode, Locale};

pub use tags::*;

/// A currency known at compile time.
///
/// Implementations only declare [`Currency::CODE`]; everything else is looked
/// up in the currency registry.
pub trait Currency: Copy + Eq + Ord + Hash + Default + Debug + Send + Sync + 'static {
    /// Entry of the supported-currency enumeration this tag stands for.
    const CODE: CurrencyCode;

    /// Three-letter ISO 4217 code, e.g. `"EUR"`.
    #[must_use]
    fn code() -> &'static str {
        Self::CODE.as_str()
    }

    /// Number of fractional digits of the minor unit (`2` for cents).
    #[must_use]
    fn minor_unit_scale() -> u32 {
        registry::minor_unit_digits(Self::code())
    }

    /// Singular name in `language`, or in the current locale's language.
    #[must_use]
    fn name_localized(language: Option<&str>) -> Option<String> {
        match language {
            Some(language) => registry::localized_name(Self::code(), language),
            None => registry::localized_name(Self::code(), Locale::current().language()),
        }
    }

    /// Name fitting `amount` (plural for anything but exactly one).
    ///
    /// Defaults to the plural form in the current locale's language.
    #[must_use]
    fn pluralized_name_localized(
        amount: Option<Decimal>,
        language: Option<&str>,
        region: Option<&str>,
    ) -> Option<String> {
        let amount = amount.unwrap_or(Decimal::TWO);
        match language {
            Some(language) => registry::pluralized_localized_name(Self::code(), amount, language, region),
            None => {
                let current = Locale::current();
                registry::pluralized_localized_name(Self::code(), amount, current.language(), region)
            }
        }
    }
}
