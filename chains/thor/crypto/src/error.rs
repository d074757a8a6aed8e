use thiserror::Error;

/// Errors raised by the secp256k1 primitives.
///
/// Every variant names the operation that rejected its input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The private key is not 32 bytes or lies outside `[1, n - 1]`.
    #[error("{operation}: invalid private key ({length} bytes)")]
    InvalidPrivateKey {
        /// Operation that received the key.
        operation: &'static str,
        /// Length of the rejected key.
        length: usize,
    },

    /// The message hash is not exactly 32 bytes.
    #[error("{operation}: invalid message hash, expected 32 bytes, got {length}")]
    InvalidMessageHash {
        /// Operation that received the hash.
        operation: &'static str,
        /// Length of the rejected hash.
        length: usize,
    },

    /// The signature is malformed or does not recover to a public key.
    #[error("{operation}: invalid signature: {reason}")]
    InvalidSignature {
        /// Operation that received the signature.
        operation: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Any other argument failed validation, e.g. a malformed public key.
    #[error("{operation}: {reason}")]
    IllegalArgument {
        /// Operation that received the argument.
        operation: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
