//! Cryptographic primitives used to sign and verify VeChain Thor transactions.
#![deny(missing_docs)]

pub mod address;
pub mod ecdsa;
mod error;
pub mod hash;

pub use error::Error;

/// Length in bytes of a secp256k1 private key.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length in bytes of a message hash accepted by [`ecdsa::sign`] and [`ecdsa::recover`].
pub const MESSAGE_HASH_LENGTH: usize = 32;

/// Length in bytes of a recoverable signature, `r ‖ s ‖ recovery`.
pub const SIGNATURE_LENGTH: usize = 65;

/// Length in bytes of a SEC1 compressed public key.
pub const COMPRESSED_PUBLIC_KEY_LENGTH: usize = 33;

/// Length in bytes of a SEC1 uncompressed public key.
pub const UNCOMPRESSED_PUBLIC_KEY_LENGTH: usize = 65;

/// Length in bytes of an account address.
pub const ADDRESS_LENGTH: usize = 20;
