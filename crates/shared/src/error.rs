//! Library-wide error types.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors surfaced by monetary construction, decoding and combination.
///
/// None of these are fatal: every failure is local to the call that produced
/// it and the caller can retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The input string is not a decimal number.
    #[error("Invalid decimal amount: {input:?}")]
    Parse {
        /// The rejected input.
        input: String,
    },

    /// A serialized value could not be decoded as a decimal.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Two amounts of different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: CurrencyCode,
        /// Currency of the right-hand operand.
        found: CurrencyCode,
    },

    /// The currency code is not part of the supported set.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The locale identifier is empty or malformed.
    #[error("Invalid locale identifier: {0:?}")]
    InvalidLocale(String),

    /// A floating-point value has no decimal representation.
    #[error("Value {0} cannot be represented as a decimal")]
    NotRepresentable(String),

    /// Division of an amount by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit in a decimal.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "PARSE_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InvalidLocale(_) => "INVALID_LOCALE",
            Self::NotRepresentable(_) => "NOT_REPRESENTABLE",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
        }
    }

    /// Creates a parse error for the given input.
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MoneyError::parse("x").error_code(), "PARSE_ERROR");
        assert_eq!(
            MoneyError::Decode(String::new()).error_code(),
            "DECODE_ERROR"
        );
        assert_eq!(
            MoneyError::CurrencyMismatch {
                expected: CurrencyCode::Eur,
                found: CurrencyCode::Usd,
            }
            .error_code(),
            "CURRENCY_MISMATCH"
        );
        assert_eq!(
            MoneyError::UnknownCurrency(String::new()).error_code(),
            "UNKNOWN_CURRENCY"
        );
        assert_eq!(
            MoneyError::InvalidLocale(String::new()).error_code(),
            "INVALID_LOCALE"
        );
        assert_eq!(
            MoneyError::NotRepresentable(String::new()).error_code(),
            "NOT_REPRESENTABLE"
        );
        assert_eq!(MoneyError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(MoneyError::Overflow.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::parse("baloney sandwich").to_string(),
            "Invalid decimal amount: \"baloney sandwich\""
        );
        assert_eq!(
            MoneyError::CurrencyMismatch {
                expected: CurrencyCode::Eur,
                found: CurrencyCode::Jpy,
            }
            .to_string(),
            "Currency mismatch: expected EUR, found JPY"
        );
        assert_eq!(
            MoneyError::UnknownCurrency("XXX".into()).to_string(),
            "Unknown currency: XXX"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "Division by zero");
    }
}
