use primitive_types::U256;

use super::Value;
use crate::{
    hex::{quantity, trim_leading_zeros},
    Bytes, Error, Hex,
};

/// Wire representation of a single profiled field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Unsigned integer of at most `max_bytes` bytes, minimal big-endian. Zero is a
    /// single `0x00` byte.
    Numeric(usize),
    /// Arbitrary length bytes carried as [`Value::Hex`].
    HexBlob,
    /// Exactly `n` bytes.
    FixedHexBlob(usize),
    /// `n` byte value sent without its leading zero bytes.
    CompactFixedHexBlob(usize),
    /// Either nothing (an empty string on the wire) or exactly `n` bytes.
    OptionalFixedHexBlob(usize),
    /// Raw bytes carried as [`Value::Bytes`].
    Buffer,
    /// Homogeneous list.
    ArrayOf(Box<Kind>),
    /// Heterogeneous list with one item per field, in field order.
    Struct(Vec<Field>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self { name, kind }
    }
}

impl Kind {
    #[must_use]
    pub fn array_of(kind: Self) -> Self {
        Self::ArrayOf(Box::new(kind))
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::ArrayOf(_) | Self::Struct(_))
    }

    /// Converts `value` into the byte string sent on the wire.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if `value` has the wrong type or violates the
    /// length rules of the kind.
    pub fn encode(&self, value: &Value, context: &str) -> Result<Bytes, Error> {
        match self {
            Self::Numeric(max_bytes) => {
                let number = value.as_number().ok_or_else(|| mismatch("number", value, context))?;
                let encoded = Hex::of_uint(number);
                if encoded.len() > *max_bytes {
                    return Err(Error::rlp(
                        context,
                        format!("{} exceeds {max_bytes} bytes", quantity(&number)),
                    ));
                }
                Ok(encoded.into_bytes())
            },
            Self::HexBlob => Ok(hex(value, context)?.to_bytes()),
            Self::FixedHexBlob(width) => {
                let hex = hex(value, context)?;
                check_width(hex.as_bytes(), *width, context)?;
                Ok(hex.to_bytes())
            },
            Self::CompactFixedHexBlob(width) => {
                let hex = hex(value, context)?;
                check_width(hex.as_bytes(), *width, context)?;
                Ok(Bytes::copy_from_slice(trim_leading_zeros(hex.as_bytes())))
            },
            Self::OptionalFixedHexBlob(width) => {
                if value.is_null() {
                    return Ok(Bytes::new());
                }
                let hex = hex(value, context)?;
                check_width(hex.as_bytes(), *width, context)?;
                Ok(hex.to_bytes())
            },
            Self::Buffer => {
                value.as_bytes().cloned().ok_or_else(|| mismatch("bytes", value, context))
            },
            Self::ArrayOf(_) | Self::Struct(_) => Err(Error::rlp(context, "not a scalar kind")),
        }
    }

    /// Validates a byte string read from the wire and converts it back into a value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if `data` is not the canonical encoding of a value
    /// of this kind.
    pub fn decode(&self, data: &[u8], context: &str) -> Result<Value, Error> {
        match self {
            Self::Numeric(max_bytes) => {
                let max_bytes = (*max_bytes).min(32);
                if data.len() > max_bytes {
                    return Err(Error::rlp(
                        context,
                        format!("expected at most {max_bytes} bytes, got {}", data.len()),
                    ));
                }
                if data.len() > 1 && data[0] == 0 {
                    return Err(Error::rlp(context, "number must not have leading zero bytes"));
                }
                Ok(Value::Number(U256::from_big_endian(data)))
            },
            Self::HexBlob => Ok(Value::Hex(Hex::of_bytes(data))),
            Self::FixedHexBlob(width) => {
                check_width(data, *width, context)?;
                Ok(Value::Hex(Hex::of_bytes(data)))
            },
            Self::CompactFixedHexBlob(width) => {
                if data.len() > *width {
                    return Err(Error::rlp(
                        context,
                        format!("expected at most {width} bytes, got {}", data.len()),
                    ));
                }
                if data.first() == Some(&0) {
                    return Err(Error::rlp(context, "compact value must not have leading zero bytes"));
                }
                let mut padded = vec![0u8; *width];
                padded[*width - data.len()..].copy_from_slice(data);
                Ok(Value::Hex(Hex::of_bytes(padded)))
            },
            Self::OptionalFixedHexBlob(width) => {
                if data.is_empty() {
                    return Ok(Value::Null);
                }
                check_width(data, *width, context)?;
                Ok(Value::Hex(Hex::of_bytes(data)))
            },
            Self::Buffer => Ok(Value::Bytes(Bytes::copy_from_slice(data))),
            Self::ArrayOf(_) | Self::Struct(_) => Err(Error::rlp(context, "expected a list")),
        }
    }
}

fn hex<'a>(value: &'a Value, context: &str) -> Result<&'a Hex, Error> {
    value.as_hex().ok_or_else(|| mismatch("hex", value, context))
}

fn check_width(data: &[u8], width: usize, context: &str) -> Result<(), Error> {
    if data.len() == width {
        Ok(())
    } else {
        Err(Error::rlp(context, format!("expected {width} bytes, got {}", data.len())))
    }
}

fn mismatch(expected: &str, value: &Value, context: &str) -> Error {
    Error::rlp(context, format!("expected {expected}, got {}", value.type_name()))
}
