//! Serde adapters writing big integers as decimal strings.
//!
//! JSON numbers lose precision beyond 53 bits in most consumers, so every
//! integer of the record is written as a string. Reading also accepts native
//! JSON integers, which older records use for `g`, `X` and `Y`.

use core::fmt;

use num_bigint::BigUint;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serializer};

/// A big integer read from either a decimal string or a JSON integer.
struct Decimal(BigUint);

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal(BigUint::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        u64::try_from(v)
            .map(|v| Decimal(BigUint::from(v)))
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        BigUint::parse_bytes(v.as_bytes(), 10)
            .map(Decimal)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

/// A single integer.
pub(crate) mod decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        Decimal::deserialize(deserializer).map(|d| d.0)
    }
}

/// A sequence of integers.
pub(crate) mod decimal_seq {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(BigUint::to_string))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<BigUint>, D::Error> {
        let values = Vec::<Decimal>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|d| d.0).collect())
    }
}

/// A matrix of integers, row by row.
pub(crate) mod decimal_matrix {
    use super::*;

    pub fn serialize<S: Serializer>(
        rows: &[Vec<BigUint>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            rows.iter()
                .map(|row| row.iter().map(BigUint::to_string).collect::<Vec<_>>()),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<BigUint>>, D::Error> {
        let rows = Vec::<Vec<Decimal>>::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(|d| d.0).collect())
            .collect())
    }
}
