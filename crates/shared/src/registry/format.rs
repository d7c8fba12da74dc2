//! Locale-aware number formatting and parsing.

use rust_decimal::{Decimal, RoundingStrategy};
use thousands::{Separable, SeparatorPolicy, digits};
use tracing::debug;

use super::locale_data::{NBSP, SymbolPlacement};
use crate::error::{MoneyError, MoneyResult};

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Separators and symbol placement resolved for one locale.
#[derive(Debug, Clone, Copy)]
pub(super) struct NumberStyle {
    pub placement: SymbolPlacement,
    pub decimal: char,
    pub grouping: char,
}

/// Rounds `amount` half-to-even to `max_digits` and renders it with at least
/// `min_digits` fractional digits, grouping the integer part by thousands.
///
/// Returns the digits without sign, and whether the rounded value is negative.
pub(super) fn format_digits(
    amount: Decimal,
    min_digits: u32,
    max_digits: u32,
    style: &NumberStyle,
) -> (String, bool) {
    let max_digits = max_digits.min(MAX_SCALE);
    let min_digits = min_digits.min(max_digits);

    let mut rounded = amount
        .round_dp_with_strategy(max_digits, RoundingStrategy::MidpointNearestEven)
        .normalize();
    if rounded.scale() < min_digits {
        rounded.rescale(min_digits);
    }

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let separator = style.grouping.to_string();
    let policy = SeparatorPolicy {
        separator: &separator,
        groups: &[3],
        digits: digits::ASCII_DECIMAL,
    };
    let mut text = integer.to_string().separate_by_policy(policy);

    if !fraction.is_empty() {
        text.push(style.decimal);
        text.push_str(fraction);
    }

    (text, negative)
}

/// Places the currency symbol and sign around formatted digits.
pub(super) fn place_symbol(digits: &str, negative: bool, symbol: &str, placement: SymbolPlacement) -> String {
    let sign = if negative { "-" } else { "" };

    match placement {
        SymbolPlacement::Prefix => {
            // Letters touching digits get a space, e.g. `JOD 1.234` but `€1.23`.
            let spacing = if symbol.chars().last().is_some_and(char::is_alphabetic) {
                NBSP.to_string()
            } else {
                String::new()
            };
            format!("{sign}{symbol}{spacing}{digits}")
        }
        SymbolPlacement::PrefixSpaced => format!("{symbol}{NBSP}{sign}{digits}"),
        SymbolPlacement::SuffixSpaced => format!("{sign}{digits}{NBSP}{symbol}"),
    }
}

/// Parses a number written with the given separators.
pub(super) fn parse_digits(input: &str, style: &NumberStyle) -> MoneyResult<Decimal> {
    let spaced_grouping = style.grouping.is_whitespace();

    let mut normalized = String::with_capacity(input.len());
    for c in input.trim().chars() {
        if c == style.grouping || (spaced_grouping && c.is_whitespace()) {
            continue;
        }
        if c == style.decimal {
            normalized.push('.');
        } else {
            normalized.push(c);
        }
    }

    if normalized.is_empty() || normalized.contains(char::is_whitespace) {
        debug!(input, "Rejected localized amount");
        return Err(MoneyError::parse(input));
    }

    parse_exact(&normalized).map_err(|e| {
        debug!(input, error = %e, "Rejected localized amount");
        MoneyError::parse(input)
    })
}

/// Parses plain or exponent notation without rounding.
///
/// Input with more significant digits than a `Decimal` holds is an error.
pub(super) fn parse_exact(input: &str) -> Result<Decimal, rust_decimal::Error> {
    match input.find(['e', 'E']) {
        None => Decimal::from_str_exact(input),
        Some(at) => {
            Decimal::from_str_exact(&input[..at])?;
            Decimal::from_scientific(input)
        }
    }
}
