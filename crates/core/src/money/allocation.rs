//! Splitting an amount without losing minor units.
//!
//! Uses the largest remainder method:
//! 1. Round the total to the currency's minor unit
//! 2. Truncate each exact share to the minor unit
//! 3. Hand the units left over to the shares with the largest cut-off part,
//!    earlier shares first on ties

use std::cmp::Ordering;

use rust_decimal::prelude::*;
use tender_shared::{MoneyError, MoneyResult};

use super::Tender;
use crate::currency::Currency;

impl<C: Currency> Tender<C> {
    /// Splits the amount into `count` parts that differ by at most one minor
    /// unit and sum exactly to the rounded amount.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tender_core::currency::Usd;
    /// use tender_core::money::Tender;
    ///
    /// let parts = Tender::<Usd>::new(dec!(100)).allocate_equal(3);
    /// assert_eq!(parts, [dec!(33.34), dec!(33.33), dec!(33.33)].map(Tender::<Usd>::new));
    /// ```
    #[must_use]
    pub fn allocate_equal(&self, count: usize) -> Vec<Self> {
        if count == 0 {
            return vec![];
        }
        let mut total = self.rounded_amount();
        total.rescale(C::minor_unit_scale());
        split_evenly(total, count)
            .into_iter()
            .map(Self::new)
            .collect()
    }

    /// Splits the amount proportionally to `ratios`.
    ///
    /// Negative ratios count as zero. The parts sum exactly to the rounded
    /// amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] when no ratio is positive and
    /// [`MoneyError::Overflow`] when a share of the amount cannot be computed
    /// exactly.
    pub fn allocate_by_ratios(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Self>> {
        if ratios.is_empty() {
            return Ok(vec![]);
        }

        let weights: Vec<Decimal> = ratios.iter().map(|r| (*r).max(Decimal::ZERO)).collect();
        if weights.iter().all(Decimal::is_zero) {
            return Err(MoneyError::DivisionByZero);
        }

        let parts = split(self.rounded_amount(), &weights, C::minor_unit_scale())
            .ok_or(MoneyError::Overflow)?;
        Ok(parts.into_iter().map(Self::new).collect())
    }
}

/// Splits `total` into `count` parts by integer division of its mantissa.
///
/// `total` is expected at the currency's minor unit scale, or the closest
/// scale it fits at.
///
/// The first `mantissa % count` parts carry one extra unit of the last digit.
fn split_evenly(total: Decimal, count: usize) -> Vec<Decimal> {
    let mantissa = total.mantissa();
    let sign = mantissa.signum();
    let magnitude = mantissa.unsigned_abs();
    let divisor = u128::try_from(count).unwrap_or(u128::MAX);

    let share = magnitude / divisor;
    let extra = usize::try_from(magnitude % divisor).unwrap_or(count);

    (0..count)
        .map(|i| {
            let units = if i < extra { share + 1 } else { share };
            // |units| never exceeds the mantissa it was split from.
            let units = i128::try_from(units).unwrap_or(i128::MAX) * sign;
            Decimal::from_i128_with_scale(units, total.scale())
        })
        .collect()
}

/// Distributes `total` (already at `scale`) over non-negative `weights`.
///
/// Returns `None` when a weighted share overflows.
fn split(total: Decimal, weights: &[Decimal], scale: u32) -> Option<Vec<Decimal>> {
    let negative = total.is_sign_negative();
    let magnitude = total.abs();
    let unit = Decimal::new(1, scale);
    let weight_sum = weights
        .iter()
        .try_fold(Decimal::ZERO, |sum, w| sum.checked_add(*w))?;

    let exact = weights
        .iter()
        .map(|w| magnitude.checked_mul(*w)?.checked_div(weight_sum))
        .collect::<Option<Vec<Decimal>>>()?;

    let mut parts: Vec<Decimal> = exact
        .iter()
        .map(|a| a.round_dp_with_strategy(scale, RoundingStrategy::ToZero))
        .collect();

    let allocated = parts
        .iter()
        .try_fold(Decimal::ZERO, |sum, p| sum.checked_add(*p))?;
    if allocated > magnitude {
        return None;
    }

    let units_left = ((magnitude - allocated) / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_usize()
        .unwrap_or(0);

    if units_left > 0 {
        let mut remainders: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(parts.iter())
            .enumerate()
            .map(|(i, (e, p))| (i, *e - *p))
            .collect();

        // Stable sort keeps earlier parts first among equal remainders.
        remainders.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        for (idx, _) in remainders.iter().take(units_left) {
            parts[*idx] += unit;
        }
    }

    if negative {
        parts.iter_mut().for_each(|p| *p = -*p);
    }
    Some(parts)
}
