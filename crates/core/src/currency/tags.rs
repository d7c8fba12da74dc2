//! One marker type per supported currency.

use tender_shared::CurrencyCode;

use super::Currency;

macro_rules! define_currency_tags {
    ($(($variant:ident, $code:literal, $digits:literal, $symbol:literal, $name:literal, $plural:literal)),* $(,)?) => {
        $(
            #[doc = concat!($name, " (`", $code, "`).")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $variant;

            impl Currency for $variant {
                const CODE: CurrencyCode = CurrencyCode::$variant;
            }
        )*
    };
}

tender_shared::for_each_currency!(define_currency_tags);
