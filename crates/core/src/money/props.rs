//! Property-based tests for monetary amounts.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::*;
use crate::currency::{Eur, Jod, Jpy};

/// Amounts with up to 4 fractional digits (-1,000,000 to 1,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn currency_code() -> impl Strategy<Value = tender_shared::CurrencyCode> {
    proptest::sample::select(tender_shared::CurrencyCode::ALL)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding and then subtracting the same amount gives the original back.
    #[test]
    fn prop_add_then_sub_is_identity(a in amount(), b in amount()) {
        let a = Tender::<Eur>::new(a);
        let b = Tender::<Eur>::new(b);
        prop_assert_eq!(a + b - b, a);
    }

    /// Major and minor units add up to the amount.
    #[test]
    fn prop_major_plus_minor_is_amount(a in amount()) {
        let money = Tender::<Eur>::new(a);
        prop_assert_eq!(money.major_units() + money.minor_units(), money.amount());
        prop_assert!(money.minor_units() >= Decimal::ZERO && money.minor_units() < Decimal::ONE);
    }

    /// The rounded amount never has more digits than the minor unit.
    #[test]
    fn prop_rounded_amount_fits_minor_unit(a in amount()) {
        prop_assert!(Tender::<Jpy>::new(a).rounded_amount().normalize().scale() == 0);
        prop_assert!(Tender::<Eur>::new(a).rounded_amount().normalize().scale() <= 2);
        prop_assert!(Tender::<Jod>::new(a).rounded_amount().normalize().scale() <= 3);
    }

    /// Encoding then decoding yields an equal tender.
    #[test]
    fn prop_serde_round_trip(a in amount()) {
        let money = Tender::<Eur>::new(a);
        let json = serde_json::to_string(&money).unwrap();
        let decoded: Tender<Eur> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, money);
    }

    /// The factory keeps the amount and the requested currency.
    #[test]
    fn prop_factory_is_total(a in amount(), code in currency_code()) {
        let money = MoneyFactory::money_from(a, code);
        prop_assert_eq!(money.currency(), code);
        prop_assert_eq!(money.amount(), a);
    }

    /// Allocated parts sum to the rounded total.
    #[test]
    fn prop_allocate_equal_sum_invariant(a in amount(), count in 1usize..50) {
        let money = Tender::<Eur>::new(a);
        let total: Tender<Eur> = money.allocate_equal(count).into_iter().sum();
        prop_assert_eq!(total.amount(), money.rounded_amount());
    }

    /// Ratio allocation keeps the count and the rounded total.
    #[test]
    fn prop_allocate_by_ratios_sum_invariant(
        a in amount(),
        ratios in prop::collection::vec(1u32..100, 1..10),
    ) {
        let money = Tender::<Jod>::new(a);
        let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();
        let parts = money.allocate_by_ratios(&ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert_eq!(parts.iter().sum::<Tender<Jod>>().amount(), money.rounded_amount());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: 1.5 + 1.501 - 1.501 = 1.5 exactly.
    #[test]
    fn test_add_then_sub_example() {
        let a = Tender::<Eur>::new(dec!(1.5));
        let b = Tender::<Eur>::new(dec!(1.501));
        assert_eq!(a + b - b, a);
    }
}
