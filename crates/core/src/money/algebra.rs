//! Operators on `Tender`.
//!
//! `+` and `-` only exist between amounts of the same currency. `*` and `/`
//! take a plain scalar on either side and keep the tender's currency.
//!
//! The operators panic where `Decimal` does: on overflow, on division by zero
//! and on a float with no decimal value. Each has a `checked_*` counterpart
//! returning a [`MoneyError`] instead.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tender_shared::{MoneyError, MoneyResult};

use super::Tender;
use crate::currency::Currency;

/// A plain number usable as a factor or divisor of a [`Tender`].
pub trait Scalar: Copy {
    /// Converts the scalar to an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NotRepresentable`] for floats that are NaN,
    /// infinite or outside the decimal range.
    fn try_to_decimal(self) -> MoneyResult<Decimal>;
}

impl Scalar for Decimal {
    fn try_to_decimal(self) -> MoneyResult<Decimal> {
        Ok(self)
    }
}

macro_rules! impl_integer_scalar {
    ($($int:ty),*) => {
        $(
            impl Scalar for $int {
                fn try_to_decimal(self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_integer_scalar!(i32, i64, u32, u64);

impl Scalar for f64 {
    fn try_to_decimal(self) -> MoneyResult<Decimal> {
        Decimal::from_f64(self).ok_or_else(|| MoneyError::NotRepresentable(self.to_string()))
    }
}

/// Scalar conversion for the panicking operators.
fn to_decimal<S: Scalar>(scalar: S) -> Decimal {
    match scalar.try_to_decimal() {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl<C: Currency> Tender<C> {
    /// Adds an amount of the same currency, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] when the sum does not fit.
    pub fn checked_add(&self, rhs: Self) -> MoneyResult<Self> {
        self.amount()
            .checked_add(rhs.amount())
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtracts an amount of the same currency, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] when the difference does not fit.
    pub fn checked_sub(&self, rhs: Self) -> MoneyResult<Self> {
        self.amount()
            .checked_sub(rhs.amount())
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by `factor`, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NotRepresentable`] for a float factor with no
    /// decimal value and [`MoneyError::Overflow`] when the product does not
    /// fit.
    pub fn checked_mul<S: Scalar>(&self, factor: S) -> MoneyResult<Self> {
        self.amount()
            .checked_mul(factor.try_to_decimal()?)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Divides by `divisor`, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero divisor,
    /// [`MoneyError::NotRepresentable`] for a float divisor with no decimal
    /// value and [`MoneyError::Overflow`] when the quotient does not fit.
    pub fn checked_div<S: Scalar>(&self, divisor: S) -> MoneyResult<Self> {
        divide(self.amount(), divisor.try_to_decimal()?).map(Self::new)
    }

    /// Divides `dividend` by the amount, keeping the currency. The checked
    /// form of `scalar / tender`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero amount,
    /// [`MoneyError::NotRepresentable`] for a float dividend with no decimal
    /// value and [`MoneyError::Overflow`] when the quotient does not fit.
    pub fn checked_rdiv<S: Scalar>(&self, dividend: S) -> MoneyResult<Self> {
        divide(dividend.try_to_decimal()?, self.amount()).map(Self::new)
    }
}

fn divide(dividend: Decimal, divisor: Decimal) -> MoneyResult<Decimal> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(MoneyError::Overflow)
}

impl<C: Currency> Add for Tender<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount() + rhs.amount())
    }
}

impl<C: Currency> Sub for Tender<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.amount() - rhs.amount())
    }
}

impl<C: Currency> AddAssign for Tender<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Currency> SubAssign for Tender<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Currency> Neg for Tender<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount())
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl<C: Currency> Mul<$scalar> for Tender<C> {
                type Output = Self;

                /// # Panics
                ///
                /// Panics on overflow or a float with no decimal value; see
                /// [`Tender::checked_mul`].
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.amount() * to_decimal(rhs))
                }
            }

            impl<C: Currency> Mul<Tender<C>> for $scalar {
                type Output = Tender<C>;

                /// # Panics
                ///
                /// Panics on overflow or a float with no decimal value; see
                /// [`Tender::checked_mul`].
                fn mul(self, rhs: Tender<C>) -> Tender<C> {
                    Tender::new(to_decimal(self) * rhs.amount())
                }
            }

            impl<C: Currency> Div<$scalar> for Tender<C> {
                type Output = Self;

                /// # Panics
                ///
                /// Panics on a zero divisor, overflow or a float with no
                /// decimal value; see [`Tender::checked_div`].
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.amount() / to_decimal(rhs))
                }
            }

            /// Divides the scalar by the amount, keeping the tender's currency.
            impl<C: Currency> Div<Tender<C>> for $scalar {
                type Output = Tender<C>;

                /// # Panics
                ///
                /// Panics on a zero amount, overflow or a float with no
                /// decimal value; see [`Tender::checked_rdiv`].
                fn div(self, rhs: Tender<C>) -> Tender<C> {
                    Tender::new(to_decimal(self) / rhs.amount())
                }
            }

            impl<C: Currency> MulAssign<$scalar> for Tender<C> {
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self = *self * rhs;
                }
            }

            impl<C: Currency> DivAssign<$scalar> for Tender<C> {
                fn div_assign(&mut self, rhs: $scalar) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_scalar_ops!(Decimal, i32, i64, u32, u64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Eur, Jpy};
    use rust_decimal_macros::dec;

    fn eur(amount: Decimal) -> Tender<Eur> {
        Tender::new(amount)
    }

    #[test]
    fn test_add_and_sub() {
        assert_eq!(eur(dec!(1.5)) + eur(dec!(1.501)), eur(dec!(3.001)));
        assert_eq!(eur(dec!(1.5)) - eur(dec!(1.501)), eur(dec!(-0.001)));
    }

    #[test]
    fn test_compound_assignment() {
        let mut total = eur(dec!(10));
        total += eur(dec!(2.5));
        assert_eq!(total, eur(dec!(12.5)));
        total -= eur(dec!(0.5));
        assert_eq!(total, eur(dec!(12)));
        total *= 2_i32;
        assert_eq!(total, eur(dec!(24)));
        total /= dec!(3);
        assert_eq!(total, eur(dec!(8)));
    }

    #[test]
    fn test_multiply_by_scalars() {
        assert_eq!(eur(dec!(1.5)) * 3_i32, eur(dec!(4.5)));
        assert_eq!(eur(dec!(1.5)) * 3_i64, eur(dec!(4.5)));
        assert_eq!(eur(dec!(1.5)) * 3_u32, eur(dec!(4.5)));
        assert_eq!(eur(dec!(1.5)) * 3_u64, eur(dec!(4.5)));
        assert_eq!(eur(dec!(1.5)) * dec!(-2), eur(dec!(-3)));
        assert_eq!(eur(dec!(1.5)) * 2.0, eur(dec!(3)));
        assert_eq!(3_i32 * eur(dec!(1.5)), eur(dec!(4.5)));
        assert_eq!(dec!(-2) * eur(dec!(1.5)), eur(dec!(-3)));
    }

    #[test]
    fn test_divide_by_scalars() {
        assert_eq!(eur(dec!(1.5)) / 3_i32, eur(dec!(0.5)));
        assert_eq!(eur(dec!(1.5)) / dec!(-2), eur(dec!(-0.75)));
        assert_eq!(eur(dec!(1.5)) / 0.5, eur(dec!(3)));
    }

    #[test]
    fn test_scalar_divided_by_tender() {
        assert_eq!(3_i32 / eur(dec!(1.5)), eur(dec!(2)));
        assert_eq!(dec!(3) / eur(dec!(1.5)), eur(dec!(2)));
        assert_eq!(3.0 / eur(dec!(1.5)), eur(dec!(2)));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-eur(dec!(1.5)), eur(dec!(-1.5)));
        assert_eq!(-Tender::<Jpy>::zero(), Tender::zero());
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(eur(dec!(9)).checked_div(dec!(3)), Ok(eur(dec!(3))));
        assert_eq!(eur(dec!(9)).checked_div(3_i32), Ok(eur(dec!(3))));
        assert_eq!(eur(dec!(9)).checked_div(Decimal::ZERO), Err(MoneyError::DivisionByZero));
        assert_eq!(eur(dec!(9)).checked_div(0_u64), Err(MoneyError::DivisionByZero));
        assert_eq!(eur(Decimal::MAX).checked_div(dec!(0.1)), Err(MoneyError::Overflow));
        assert!(matches!(
            eur(dec!(9)).checked_div(f64::INFINITY),
            Err(MoneyError::NotRepresentable(_))
        ));
    }

    #[test]
    fn test_checked_rdiv() {
        assert_eq!(eur(dec!(1.5)).checked_rdiv(3_i32), Ok(eur(dec!(2))));
        assert_eq!(eur(dec!(1.5)).checked_rdiv(3.0), Ok(eur(dec!(2))));
        assert_eq!(Tender::<Eur>::zero().checked_rdiv(3_i32), Err(MoneyError::DivisionByZero));
        assert!(matches!(
            eur(dec!(1.5)).checked_rdiv(f64::NAN),
            Err(MoneyError::NotRepresentable(_))
        ));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(eur(dec!(1.5)).checked_mul(3_u32), Ok(eur(dec!(4.5))));
        assert_eq!(eur(dec!(1.5)).checked_mul(2.0), Ok(eur(dec!(3))));
        assert_eq!(eur(Decimal::MAX).checked_mul(2_i64), Err(MoneyError::Overflow));
        assert!(matches!(
            eur(dec!(1)).checked_mul(f64::NAN),
            Err(MoneyError::NotRepresentable(_))
        ));
    }

    #[test]
    fn test_checked_add_and_sub() {
        assert_eq!(eur(dec!(1.5)).checked_add(eur(dec!(1))), Ok(eur(dec!(2.5))));
        assert_eq!(eur(dec!(1.5)).checked_sub(eur(dec!(1))), Ok(eur(dec!(0.5))));
        assert_eq!(eur(Decimal::MAX).checked_add(eur(dec!(1))), Err(MoneyError::Overflow));
        assert_eq!(eur(Decimal::MIN).checked_sub(eur(dec!(1))), Err(MoneyError::Overflow));
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_scalar_divided_by_zero_tender_panics() {
        let _ = 3_i32 / Tender::<Eur>::zero();
    }

    #[test]
    #[should_panic(expected = "cannot be represented")]
    fn test_nan_factor_panics() {
        let _ = eur(dec!(1)) * f64::NAN;
    }

    #[test]
    fn test_comparison_uses_exact_amount() {
        assert!(eur(dec!(1.001)) > eur(dec!(1)));
        assert_eq!(eur(dec!(1.10)), eur(dec!(1.1)));
    }
}
