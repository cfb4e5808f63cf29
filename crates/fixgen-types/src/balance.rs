//! Exact integer balances.
//!
//! Genesis balances routinely exceed what an `f64` can hold exactly
//! (the default funding amount is 10^27). [`Balance`] stores the value as a
//! 256-bit unsigned integer and serializes it as a bare JSON integer literal
//! through `serde_json`'s arbitrary-precision `Number`, so the digits reach
//! the output unchanged and unquoted.
//!
//! The serializer emits `serde_json`'s private number token; it is meant for
//! JSON output only.

use alloy_primitives::U256;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a balance string is not a non-negative decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid balance {input:?}: {reason}")]
pub struct ParseBalanceError {
    input: String,
    reason: &'static str,
}

/// A non-negative integer balance with exact JSON representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(U256);

impl Balance {
    /// Creates a balance from a 256-bit integer.
    #[must_use]
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// The funding amount given to every merged genesis account: 10^27.
    #[must_use]
    pub fn genesis_default() -> Self {
        Self(U256::from(10u64).pow(U256::from(27u64)))
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn as_u256(&self) -> U256 {
        self.0
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::genesis_default()
    }
}

impl From<u64> for Balance {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Balance {
    type Err = ParseBalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseBalanceError {
            input: s.to_string(),
            reason,
        };

        let digits = s.trim();
        if digits.is_empty() {
            return Err(err("empty"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("expected decimal digits only"));
        }

        U256::from_str_radix(digits, 10)
            .map(Self)
            .map_err(|_| err("exceeds 256 bits"))
    }
}

impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => n.to_string().parse().map_err(D::Error::custom),
            serde_json::Value::String(s) => s.parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected an integer balance, got {other}"
            ))),
        }
    }
}
