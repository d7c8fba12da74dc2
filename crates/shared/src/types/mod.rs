//! Common value types.

pub mod currency;
pub mod locale;

pub use currency::{CurrencyCode, DEFAULT_MINOR_UNIT_DIGITS};
pub use locale::{ANY_REGION, Locale};
