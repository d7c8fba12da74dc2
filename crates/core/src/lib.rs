//! Currency-typed monetary values.
//!
//! Amounts are exact decimals tagged with their currency at the type level,
//! so `Tender<Eur> + Tender<Usd>` does not compile. Rounding follows each
//! currency's minor unit with banker's rounding, and values render through the
//! locale-aware currency registry of `tender-shared`.
//!
//! # Modules
//!
//! - `rounding` - Exact decimal rounding at any scale
//! - `currency` - Compile-time currency tags
//! - `money` - `Tender`, dynamic money and the money factory
//! - `display` - Locale-aware display adapter
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tender_core::currency::Jpy;
//! use tender_core::money::Tender;
//!
//! let price = Tender::<Jpy>::new(dec!(1234.5));
//! assert_eq!(price.rounded_amount(), dec!(1234));
//! assert_eq!(price.displayable().with("ja", Some("JP")).unwrap().formatted(), "¥1,234");
//! ```

pub mod currency;
pub mod display;
pub mod money;
pub mod rounding;

pub use currency::Currency;
pub use display::DisplayableMoney;
pub use money::{DynamicMoney, Money, MoneyFactory, Tender};
pub use rounding::{CurrencyRounding, RoundingMode};
pub use tender_shared::{CurrencyCode, Locale, MoneyError, MoneyResult};
