//! Decimal Rounding Engine.
//!
//! Exact base-10 rounding at any integer scale. Positive scales keep that many
//! fractional digits, zero rounds to an integer and negative scales round to a
//! power of ten (`-1` to tens, `-2` to hundreds).

use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(test)]
mod props;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Largest power of ten used as an `i128` divisor without risking overflow
/// when doubling a remainder.
const MAX_DIVISOR_EXPONENT: u32 = 37;

/// How to resolve digits beyond the target scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero.
    Plain,
    /// Round toward negative infinity.
    Down,
    /// Round toward positive infinity.
    Up,
    /// Round to nearest, ties to the even neighbour (banker's rounding).
    #[default]
    Bankers,
}

impl RoundingMode {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Plain => RoundingStrategy::MidpointAwayFromZero,
            Self::Down => RoundingStrategy::ToNegativeInfinity,
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Bankers => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Rounds `value` to `scale` fractional digits using `mode`.
///
/// Results that do not fit in a `Decimal` saturate to `Decimal::MAX` or
/// `Decimal::MIN`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_core::rounding::{round, RoundingMode};
///
/// assert_eq!(round(dec!(3.14159), 3, RoundingMode::Bankers), dec!(3.142));
/// assert_eq!(round(dec!(25), -1, RoundingMode::Bankers), dec!(20));
/// assert_eq!(round(dec!(35), -1, RoundingMode::Bankers), dec!(40));
/// ```
#[must_use]
pub fn round(value: Decimal, scale: i32, mode: RoundingMode) -> Decimal {
    match u32::try_from(scale) {
        Ok(scale) if scale >= MAX_SCALE => value,
        Ok(scale) => value.round_dp_with_strategy(scale, mode.strategy()),
        Err(_) => round_to_power_of_ten(value, scale.unsigned_abs(), mode),
    }
}

/// Remainder of `a / b` with the quotient rounded toward negative infinity:
/// `a - b * floor(a / b)`.
///
/// The result carries the sign of `b`. A zero divisor returns `a` unchanged.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_core::rounding::modulo;
///
/// assert_eq!(modulo(dec!(3.14), dec!(1)), dec!(0.14));
/// assert_eq!(modulo(dec!(-3.14), dec!(1)), dec!(0.86));
/// ```
#[must_use]
pub fn modulo(a: Decimal, b: Decimal) -> Decimal {
    let Some(remainder) = a.checked_rem(b) else {
        return a;
    };

    if !remainder.is_zero() && remainder.is_sign_negative() != b.is_sign_negative() {
        remainder + b
    } else {
        remainder
    }
}

/// Rounding helpers available directly on `Decimal`.
pub trait CurrencyRounding {
    /// Returns the value rounded to `scale` digits.
    #[must_use]
    fn currency_rounded(&self, scale: i32, mode: RoundingMode) -> Self;

    /// Rounds the value in place.
    fn currency_round(&mut self, scale: i32, mode: RoundingMode);

    /// Floor-division remainder, see [`modulo`].
    #[must_use]
    fn modulo(&self, other: Self) -> Self;
}

impl CurrencyRounding for Decimal {
    fn currency_rounded(&self, scale: i32, mode: RoundingMode) -> Self {
        round(*self, scale, mode)
    }

    fn currency_round(&mut self, scale: i32, mode: RoundingMode) {
        *self = round(*self, scale, mode);
    }

    fn modulo(&self, other: Self) -> Self {
        modulo(*self, other)
    }
}

/// Rounds to a multiple of `10^exponent` by integer arithmetic on the mantissa.
fn round_to_power_of_ten(value: Decimal, exponent: u32, mode: RoundingMode) -> Decimal {
    let mantissa = value.mantissa();
    let divisor_exponent = value.scale() + exponent;

    let quotient = if divisor_exponent > MAX_DIVISOR_EXPONENT {
        // |mantissa| < 10^29 is below half the divisor, so only the directed
        // modes can move away from zero.
        match mode {
            RoundingMode::Down if mantissa < 0 => -1,
            RoundingMode::Up if mantissa > 0 => 1,
            _ => 0,
        }
    } else {
        divide_rounded(mantissa, 10_i128.pow(divisor_exponent), mode)
    };

    if quotient == 0 {
        return Decimal::ZERO;
    }

    let rounded = (exponent <= MAX_SCALE)
        .then(|| quotient.checked_mul(10_i128.pow(exponent)))
        .flatten()
        .and_then(|product| Decimal::try_from_i128_with_scale(product, 0).ok());

    rounded.unwrap_or(if quotient > 0 { Decimal::MAX } else { Decimal::MIN })
}

/// Integer division of `numerator` by a positive `divisor`, rounded per `mode`.
fn divide_rounded(numerator: i128, divisor: i128, mode: RoundingMode) -> i128 {
    let floor = numerator.div_euclid(divisor);
    let remainder = numerator.rem_euclid(divisor);

    if remainder == 0 {
        return floor;
    }

    match mode {
        RoundingMode::Down => floor,
        RoundingMode::Up => floor + 1,
        RoundingMode::Plain | RoundingMode::Bankers => match (remainder * 2).cmp(&divisor) {
            std::cmp::Ordering::Less => floor,
            std::cmp::Ordering::Greater => floor + 1,
            std::cmp::Ordering::Equal => match mode {
                RoundingMode::Plain if numerator > 0 => floor + 1,
                RoundingMode::Bankers if floor % 2 != 0 => floor + 1,
                _ => floor,
            },
        },
    }
}
