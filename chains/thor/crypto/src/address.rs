//! Account addresses: the last 20 bytes of the Keccak-256 of the uncompressed public key.
use crate::{ecdsa, hash::keccak256, Error, ADDRESS_LENGTH};

/// Derives the address of a SEC1 public key, compressed or not.
///
/// # Errors
/// Returns [`Error::IllegalArgument`] if `public_key` is not a valid curve point.
pub fn from_public_key(public_key: &[u8]) -> Result<[u8; ADDRESS_LENGTH], Error> {
    let uncompressed = ecdsa::inflate_public_key(public_key)?;
    let digest = keccak256(&uncompressed[1..]);
    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&digest[12..]);
    Ok(address)
}

/// Derives the address controlled by `private_key`.
///
/// # Errors
/// Returns [`Error::InvalidPrivateKey`] if the key is not a valid scalar.
pub fn from_private_key(private_key: &[u8]) -> Result<[u8; ADDRESS_LENGTH], Error> {
    let public = ecdsa::derive_public_key(private_key, false)?;
    from_public_key(&public)
}
