//! Property-based tests for the rounding engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::*;

/// Amounts with up to 6 fractional digits (-10,000,000 to 10,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000_000i64..10_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Scales from hundred-thousands to eight fractional digits.
fn scale() -> impl Strategy<Value = i32> {
    -5i32..=8
}

fn mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Plain),
        Just(RoundingMode::Down),
        Just(RoundingMode::Up),
        Just(RoundingMode::Bankers),
    ]
}

/// Size of one step at `scale`, e.g. `0.01` at 2 and `100` at -2.
fn step(scale: i32) -> Decimal {
    if scale >= 0 {
        Decimal::new(1, scale.unsigned_abs())
    } else {
        Decimal::from(10i64.pow(scale.unsigned_abs()))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rounding an already rounded value changes nothing.
    #[test]
    fn prop_round_is_idempotent(value in amount(), scale in scale(), mode in mode()) {
        let once = round(value, scale, mode);
        prop_assert_eq!(round(once, scale, mode), once);
    }

    /// The result is a whole number of steps.
    #[test]
    fn prop_round_lands_on_step(value in amount(), scale in scale(), mode in mode()) {
        let rounded = round(value, scale, mode);
        prop_assert!(modulo(rounded, step(scale)).is_zero(), "{} is not a multiple of {}", rounded, step(scale));
    }

    /// The result is less than one step away from the input.
    #[test]
    fn prop_round_stays_within_step(value in amount(), scale in scale(), mode in mode()) {
        let rounded = round(value, scale, mode);
        prop_assert!((rounded - value).abs() < step(scale));
    }

    /// Down never exceeds the input and Up never falls below it.
    #[test]
    fn prop_directed_modes_bound_input(value in amount(), scale in scale()) {
        prop_assert!(round(value, scale, RoundingMode::Down) <= value);
        prop_assert!(round(value, scale, RoundingMode::Up) >= value);
    }

    /// Nearest modes are within half a step.
    #[test]
    fn prop_nearest_modes_within_half_step(value in amount(), scale in scale()) {
        let half = step(scale) / Decimal::TWO;
        prop_assert!((round(value, scale, RoundingMode::Plain) - value).abs() <= half);
        prop_assert!((round(value, scale, RoundingMode::Bankers) - value).abs() <= half);
    }

    /// Plain and banker's rounding are symmetric around zero.
    #[test]
    fn prop_nearest_modes_are_symmetric(value in amount(), scale in scale()) {
        prop_assert_eq!(round(-value, scale, RoundingMode::Plain), -round(value, scale, RoundingMode::Plain));
        prop_assert_eq!(round(-value, scale, RoundingMode::Bankers), -round(value, scale, RoundingMode::Bankers));
    }

    /// The floor remainder plus the floored part rebuilds the value.
    #[test]
    fn prop_modulo_rebuilds_value(value in amount()) {
        let remainder = modulo(value, Decimal::ONE);
        prop_assert!(remainder >= Decimal::ZERO && remainder < Decimal::ONE);
        prop_assert_eq!(round(value, 0, RoundingMode::Down) + remainder, value);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Ties go to the even neighbour at every scale.
    #[test]
    fn test_bankers_ties() {
        assert_eq!(round(dec!(2.25), 1, RoundingMode::Bankers), dec!(2.2));
        assert_eq!(round(dec!(2.35), 1, RoundingMode::Bankers), dec!(2.4));
        assert_eq!(round(dec!(150), -2, RoundingMode::Bankers), dec!(200));
        assert_eq!(round(dec!(250), -2, RoundingMode::Bankers), dec!(200));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(2), dec!(0.01));
        assert_eq!(step(0), dec!(1));
        assert_eq!(step(-2), dec!(100));
    }
}
