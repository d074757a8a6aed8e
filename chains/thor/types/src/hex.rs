//! Canonical hexadecimal values.
//!
//! A [`Hex`] is a non-negative value backed by bytes and always rendered as
//! lowercase, `0x` prefixed, even-length text. Integers have a single canonical form,
//! the minimal big-endian byte string, with zero represented by one zero byte.
use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use primitive_types::U256;
use thiserror::Error;

use crate::Bytes;

/// Reasons a value cannot be represented as canonical hex.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("{0} is negative")]
    NotPositive(String),

    #[error("{0:?} is not a hexadecimal string")]
    NotHex(String),

    #[error("{value} does not fit in {width} bytes")]
    NotFit { value: String, width: usize },
}

#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex(Bytes);

impl Hex {
    pub fn of_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Minimal big-endian form of `value`; zero is a single `0x00` byte.
    #[must_use]
    pub fn of_uint(value: U256) -> Self {
        let mut buffer = [0u8; 32];
        value.to_big_endian(&mut buffer);
        let start = buffer.iter().position(|byte| *byte != 0).unwrap_or(31);
        Self(Bytes::copy_from_slice(&buffer[start..]))
    }

    /// # Errors
    /// Returns [`HexError::NotPositive`] if `value` is negative.
    pub fn of_signed(value: i128) -> Result<Self, HexError> {
        let value = u128::try_from(value).map_err(|_| HexError::NotPositive(value.to_string()))?;
        Ok(Self::of_uint(U256::from(value)))
    }

    /// Parses hex text, with or without a `0x` prefix and in any letter case.
    ///
    /// An odd number of digits is padded with a leading zero nibble.
    ///
    /// # Errors
    /// Returns [`HexError::NotPositive`] for a leading minus sign, [`HexError::NotHex`]
    /// for anything that isn't a hex digit.
    pub fn of_hex_str(text: &str) -> Result<Self, HexError> {
        if let Some(unsigned) = text.strip_prefix('-') {
            return match split_digits(unsigned) {
                Some(_) => Err(HexError::NotPositive(text.to_string())),
                None => Err(HexError::NotHex(text.to_string())),
            };
        }
        let digits = split_digits(text).ok_or_else(|| HexError::NotHex(text.to_string()))?;
        let decoded = if digits.len() % 2 == 1 {
            const_hex::decode(format!("0{digits}"))
        } else {
            const_hex::decode(digits)
        };
        decoded.map(|bytes| Self(bytes.into())).map_err(|_| HexError::NotHex(text.to_string()))
    }

    /// Returns the same value with exactly `width` bytes, left-padding with zeros or
    /// dropping superfluous leading zero bytes.
    ///
    /// # Errors
    /// Returns [`HexError::NotFit`] when the significant bytes exceed `width`.
    pub fn fit(&self, width: usize) -> Result<Self, HexError> {
        let significant = trim_leading_zeros(self.as_bytes());
        if significant.len() > width {
            return Err(HexError::NotFit { value: self.to_string(), width });
        }
        let mut fitted = vec![0u8; width];
        fitted[width - significant.len()..].copy_from_slice(significant);
        Ok(Self(fitted.into()))
    }

    /// # Errors
    /// Returns [`HexError::NotFit`] when the value exceeds 256 bits.
    pub fn to_uint(&self) -> Result<U256, HexError> {
        let significant = trim_leading_zeros(self.as_bytes());
        if significant.len() > 32 {
            return Err(HexError::NotFit { value: self.to_string(), width: 32 });
        }
        Ok(U256::from_big_endian(significant))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders `value` as a trimmed quantity: `0x0`, `0x1f`, ...
#[must_use]
pub fn quantity(value: &U256) -> String {
    format!("{value:#x}")
}

pub(crate) fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|byte| *byte != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn split_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
    digits.bytes().all(|byte| byte.is_ascii_hexdigit()).then_some(digits)
}

impl FromStr for Hex {
    type Err = HexError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::of_hex_str(text)
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Hex({})", self.0)
    }
}

impl AsRef<[u8]> for Hex {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Bytes> for Hex {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<U256> for Hex {
    fn from(value: U256) -> Self {
        Self::of_uint(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::of_hex_str(&text).map_err(serde::de::Error::custom)
    }
}
