//! Recoverable ECDSA over secp256k1.
//!
//! Signatures are 65 bytes, `r ‖ s ‖ recovery` with the recovery byte in `{0, 1}`.
//! Signing is deterministic (RFC 6979) and always yields a low `s`. Preconditions are
//! checked before any curve arithmetic so callers get a typed error for bad input.
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    rand::{rngs::OsRng, RngCore},
    Message, PublicKey, SecretKey, SECP256K1,
};
use zeroize::Zeroizing;

use crate::{
    Error, COMPRESSED_PUBLIC_KEY_LENGTH, MESSAGE_HASH_LENGTH, PRIVATE_KEY_LENGTH,
    SIGNATURE_LENGTH, UNCOMPRESSED_PUBLIC_KEY_LENGTH,
};

/// Returns `true` if `message_hash` has the length of a signable digest.
#[must_use]
pub const fn is_valid_message_hash(message_hash: &[u8]) -> bool {
    message_hash.len() == MESSAGE_HASH_LENGTH
}

/// Returns `true` if `private_key` is a 32-byte scalar in `[1, n - 1]`.
#[must_use]
pub fn is_valid_private_key(private_key: &[u8]) -> bool {
    private_key.len() == PRIVATE_KEY_LENGTH && SecretKey::from_slice(private_key).is_ok()
}

/// Generates a new random private key using the operating system's entropy source.
#[must_use]
pub fn generate_private_key() -> Zeroizing<[u8; PRIVATE_KEY_LENGTH]> {
    let secret = SecretKey::new(&mut OsRng);
    Zeroizing::new(secret.secret_bytes())
}

/// Returns `length` bytes from the operating system's entropy source.
#[must_use]
pub fn random_bytes(length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Derives the public key of `private_key`, SEC1 compressed (33 bytes) or uncompressed
/// (65 bytes).
///
/// # Errors
/// Returns [`Error::InvalidPrivateKey`] if the key is not a valid scalar.
pub fn derive_public_key(private_key: &[u8], compressed: bool) -> Result<Vec<u8>, Error> {
    let secret = secret_key(private_key, "derive_public_key")?;
    let public = PublicKey::from_secret_key(SECP256K1, &secret);
    Ok(serialize_public_key(&public, compressed))
}

/// Converts a SEC1 public key to its 33 byte compressed form.
///
/// A key that is already compressed is returned unchanged.
///
/// # Errors
/// Returns [`Error::IllegalArgument`] if `public_key` is not a valid curve point.
pub fn compress_public_key(public_key: &[u8]) -> Result<Vec<u8>, Error> {
    let public = public_key_from_slice(public_key, "compress_public_key")?;
    Ok(serialize_public_key(&public, true))
}

/// Converts a SEC1 public key to its 65 byte uncompressed form.
///
/// # Errors
/// Returns [`Error::IllegalArgument`] if `public_key` is not a valid curve point.
pub fn inflate_public_key(public_key: &[u8]) -> Result<Vec<u8>, Error> {
    let public = public_key_from_slice(public_key, "inflate_public_key")?;
    Ok(serialize_public_key(&public, false))
}

/// Signs a 32 byte `message_hash`, returning `r ‖ s ‖ recovery`.
///
/// # Errors
/// Returns [`Error::InvalidMessageHash`] or [`Error::InvalidPrivateKey`] when the
/// inputs fail validation.
pub fn sign(message_hash: &[u8], private_key: &[u8]) -> Result<[u8; SIGNATURE_LENGTH], Error> {
    let message = message(message_hash, "sign")?;
    let secret = secret_key(private_key, "sign")?;
    let (recovery_id, compact) =
        SECP256K1.sign_ecdsa_recoverable(&message, &secret).serialize_compact();

    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature[..64].copy_from_slice(&compact);
    signature[64] = u8::try_from(recovery_id.to_i32())
        .ok()
        .filter(|recovery| *recovery <= 1)
        .ok_or_else(|| Error::InvalidSignature {
            operation: "sign",
            reason: format!("unexpected recovery id {}", recovery_id.to_i32()),
        })?;
    Ok(signature)
}

/// Recovers the uncompressed public key (65 bytes) that produced `signature` over
/// `message_hash`.
///
/// # Errors
/// Returns [`Error::InvalidMessageHash`] for a bad hash, and
/// [`Error::InvalidSignature`] if the signature is not 65 bytes, its recovery byte is
/// not `0` or `1`, or no public key can be recovered.
pub fn recover(
    message_hash: &[u8],
    signature: &[u8],
) -> Result<[u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH], Error> {
    const OPERATION: &str = "recover";
    let message = message(message_hash, OPERATION)?;
    if signature.len() != SIGNATURE_LENGTH {
        return Err(Error::InvalidSignature {
            operation: OPERATION,
            reason: format!("expected {SIGNATURE_LENGTH} bytes, got {}", signature.len()),
        });
    }
    let recovery = signature[64];
    if recovery > 1 {
        return Err(Error::InvalidSignature {
            operation: OPERATION,
            reason: format!("recovery byte must be 0 or 1, got {recovery}"),
        });
    }

    let invalid = |error: secp256k1::Error| Error::InvalidSignature {
        operation: OPERATION,
        reason: error.to_string(),
    };
    let recovery_id = RecoveryId::from_i32(i32::from(recovery)).map_err(invalid)?;
    let signature =
        RecoverableSignature::from_compact(&signature[..64], recovery_id).map_err(invalid)?;
    let public = SECP256K1.recover_ecdsa(&message, &signature).map_err(invalid)?;
    Ok(public.serialize_uncompressed())
}

fn message(message_hash: &[u8], operation: &'static str) -> Result<Message, Error> {
    let digest = <[u8; MESSAGE_HASH_LENGTH]>::try_from(message_hash)
        .map_err(|_| Error::InvalidMessageHash { operation, length: message_hash.len() })?;
    Ok(Message::from_digest(digest))
}

fn secret_key(private_key: &[u8], operation: &'static str) -> Result<SecretKey, Error> {
    SecretKey::from_slice(private_key)
        .map_err(|_| Error::InvalidPrivateKey { operation, length: private_key.len() })
}

fn public_key_from_slice(public_key: &[u8], operation: &'static str) -> Result<PublicKey, Error> {
    if public_key.len() != COMPRESSED_PUBLIC_KEY_LENGTH &&
        public_key.len() != UNCOMPRESSED_PUBLIC_KEY_LENGTH
    {
        return Err(Error::IllegalArgument {
            operation,
            reason: format!(
                "public key must be {COMPRESSED_PUBLIC_KEY_LENGTH} or \
                 {UNCOMPRESSED_PUBLIC_KEY_LENGTH} bytes, got {}",
                public_key.len()
            ),
        });
    }
    PublicKey::from_slice(public_key)
        .map_err(|error| Error::IllegalArgument { operation, reason: error.to_string() })
}

fn serialize_public_key(public: &PublicKey, compressed: bool) -> Vec<u8> {
    if compressed {
        public.serialize().to_vec()
    } else {
        public.serialize_uncompressed().to_vec()
    }
}
