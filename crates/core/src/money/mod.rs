//! Currency-typed monetary amounts.
//!
//! - [`Tender`] carries its currency in the type, so only amounts of one
//!   currency can be added, subtracted or compared.
//! - [`DynamicMoney`] erases the currency for values whose currency is only
//!   known at runtime, and [`MoneyFactory`] builds one from a currency code.

mod algebra;
mod allocation;
mod dynamic;
mod factory;
mod tender;
pub mod wire;

#[cfg(test)]
mod props;

pub use algebra::Scalar;
pub use dynamic::{DynamicMoney, Money};
pub use factory::{MoneyConstructor, MoneyFactory};
pub use tender::Tender;
