//! Wire format of monetary amounts: a bare decimal number.
//!
//! Amounts travel as exact JSON numbers (`3.14`, never `"3.14"`), without a
//! currency code. Use with `#[serde(with = "tender_core::money::wire")]` on a
//! `Decimal` field.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserializer, Serializer};
use tender_shared::{MoneyError, registry};

/// Key `serde_json` uses to pass arbitrary-precision numbers through a map.
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Serializes `amount` as an exact number.
pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    rust_decimal::serde::arbitrary_precision::serialize(amount, serializer)
}

/// Deserializes an exact number. Strings and every other non-numeric value
/// are rejected, as are numbers a `Decimal` can only hold after rounding.
///
/// Failures carry a [`MoneyError::Decode`] message.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

fn decode_error<E: de::Error>(reason: impl fmt::Display) -> E {
    E::custom(MoneyError::Decode(reason.to_string()))
}

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Decimal, E> {
        Decimal::from_i128(value).ok_or_else(|| decode_error(format_args!("{value} is out of decimal range")))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Decimal, E> {
        Decimal::from_u128(value).ok_or_else(|| decode_error(format_args!("{value} is out of decimal range")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        Decimal::from_f64(value).ok_or_else(|| decode_error(format_args!("{value} is not a decimal")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        Err(decode_error(format_args!("expected a number, found string {value:?}")))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Decimal, A::Error> {
        match map.next_key::<String>()? {
            Some(key) if key == JSON_NUMBER_TOKEN => {
                let text: String = map.next_value()?;
                registry::parse_decimal(&text)
                    .map_err(|_| decode_error(format_args!("{text} does not fit a decimal exactly")))
            }
            _ => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
        }
    }
}
