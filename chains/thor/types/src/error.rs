use thiserror::Error;

use crate::hex::HexError;

/// Errors produced while building, encoding or decoding transaction requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A primitive value could not be represented, e.g. malformed hex.
    #[error("invalid data type: {0}")]
    InvalidDataType(#[from] HexError),

    /// The bytes or the value violate the shape required by an RLP field kind.
    #[error("{context}: invalid RLP: {reason}")]
    InvalidRlp { context: String, reason: String },

    /// A decoded field could not be mapped back into the transaction model.
    #[error("{context}: invalid transaction field: {reason}")]
    InvalidTransactionField { context: String, reason: String },

    /// The requested operation does not apply to this request.
    #[error("{context}: unsupported operation: {reason}")]
    UnsupportedOperation { context: &'static str, reason: String },

    #[error(transparent)]
    Crypto(#[from] thor_crypto::Error),
}

impl Error {
    pub(crate) fn rlp(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRlp { context: context.into(), reason: reason.into() }
    }

    pub(crate) fn field(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTransactionField { context: context.into(), reason: reason.into() }
    }
}
