//! serde adapters for fields whose JSON form differs from their type's default.
use serde::{Deserialize, Deserializer, Serializer};

use crate::Bytes;

/// serde functions for converting `u64` to and from a `0x` prefixed quantity
pub mod uint_to_hex {
    use super::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    /// # Errors
    /// Returns `Err` if the serializer rejects the string
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&format_args!("{value:#x}"))
    }

    /// # Errors
    /// Returns `Err` if the source is not a `0x` prefixed hexadecimal string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = <String as Deserialize>::deserialize(deserializer)?;
        let digits = text
            .strip_prefix("0x")
            .ok_or_else(|| serde::de::Error::custom("quantity must be 0x prefixed"))?;
        if digits.is_empty() {
            return Ok(0);
        }
        u64::from_str_radix(digits, 16).map_err(serde::de::Error::custom)
    }
}

/// serde functions for optional bytes rendered as `0x` when absent
pub mod bytes_or_empty {
    use super::{Bytes, Deserialize, Deserializer, Serializer};

    /// # Errors
    /// Returns `Err` if the serializer rejects the string
    pub fn serialize<S>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.collect_str(bytes),
            None => serializer.serialize_str("0x"),
        }
    }

    /// # Errors
    /// Returns `Err` if the source is not a hexadecimal string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Bytes>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <Option<Bytes> as Deserialize>::deserialize(deserializer)?;
        Ok(bytes.filter(|bytes| !bytes.is_empty()))
    }
}
