//! Raw token amounts
//!
//! A raw amount is expressed in a token's smallest unit with no decimal
//! scaling applied. Token supplies routinely exceed `u64`, so amounts are
//! backed by an arbitrary-precision integer and travel over JSON as decimal
//! strings. Input may be a decimal string or a JSON integer of any width;
//! strings are parsed as given, without trimming.

use num_bigint::{BigInt, Sign};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, Result};

/// Formatted rendering of a zero amount.
pub const ZERO_FORMATTED: &str = "0";

/// Arbitrary-precision amount in a token's smallest unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawAmount(BigInt);

impl RawAmount {
    pub fn zero() -> Self {
        Self(BigInt::from(0u8))
    }

    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn into_bigint(self) -> BigInt {
        self.0
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RawAmount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_str(s)
            .map(Self)
            .map_err(|e| LedgerError::InvalidAmount(format!("{:?}: {}", s, e)))
    }
}

impl From<BigInt> for RawAmount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u128> for RawAmount {
    fn from(value: u128) -> Self {
        Self(BigInt::from(value))
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct RawAmountVisitor;

impl<'de> Visitor<'de> for RawAmountVisitor {
    type Value = RawAmount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal integer string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<RawAmount, E> {
        RawAmount::from_str(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<RawAmount, E> {
        Ok(RawAmount::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<RawAmount, E> {
        Ok(RawAmount::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<RawAmount, E> {
        Ok(RawAmount::from(v))
    }

    // serde_json `arbitrary_precision` hands numbers over as a map token
    fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> std::result::Result<RawAmount, A::Error> {
        let number = serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))?;
        RawAmount::from_str(&number.to_string()).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(RawAmountVisitor)
    }
}
