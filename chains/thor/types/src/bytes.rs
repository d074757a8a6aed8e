use std::{
    borrow::Borrow,
    fmt::{self, Debug, Display, Formatter, LowerHex},
    ops::Deref,
    str::FromStr,
};

/// Immutable byte buffer rendered as `0x` prefixed lowercase hex.
///
/// Used for clause payloads, reserved entries and signatures, where the length is
/// not fixed by the protocol.
#[derive(Clone, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Bytes(pub bytes::Bytes);

impl Bytes {
    #[must_use]
    pub const fn new() -> Self {
        Self(bytes::Bytes::new())
    }

    /// Wraps a static slice without copying it.
    #[must_use]
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self(bytes::Bytes::from_static(data))
    }

    #[must_use]
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self(bytes::Bytes::copy_from_slice(data))
    }

    fn write_hex(&self, f: &mut Formatter<'_>, prefixed: bool) -> fmt::Result {
        if prefixed {
            f.write_str("0x")?;
        }
        f.write_str(&const_hex::encode(&self.0))
    }
}

impl Debug for Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Bytes(")?;
        self.write_hex(f, true)?;
        f.write_str(")")
    }
}

impl Display for Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true)
    }
}

impl LowerHex for Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_hex(f, f.alternate())
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Bytes {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<bytes::Bytes> for Bytes {
    fn from(inner: bytes::Bytes) -> Self {
        Self(inner)
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Self(bytes::Bytes::from(data))
    }
}

impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        Self::copy_from_slice(data)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(data: [u8; N]) -> Self {
        Self::copy_from_slice(&data)
    }
}

impl PartialEq<[u8]> for Bytes {
    fn eq(&self, other: &[u8]) -> bool {
        self.0[..] == *other
    }
}

impl PartialEq<Vec<u8>> for Bytes {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.0[..] == other[..]
    }
}

/// Input was not valid hex.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex bytes: {0}")]
pub struct ParseBytesError(const_hex::FromHexError);

impl FromStr for Bytes {
    type Err = ParseBytesError;

    /// Accepts hex with or without the `0x` prefix.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let data = const_hex::decode(text).map_err(ParseBytesError)?;
        Ok(data.into())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Bytes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bytes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
