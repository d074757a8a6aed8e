//! Protocol constants of the Thor transaction wire format.

/// Leading byte of every dynamic-fee transaction encoding.
pub const DYNAMIC_FEE_PREFIX: u8 = 0x51;

/// Bit of `reserved.features` marking a request that expects a gas payer.
pub const DELEGATED_FEATURE: u32 = 1;

/// Length of a single secp256k1 signature.
pub const SIGNATURE_LENGTH: usize = thor_crypto::SIGNATURE_LENGTH;

/// Length of the origin signature followed by the gas payer signature.
pub const SPONSORED_SIGNATURE_LENGTH: usize = 2 * SIGNATURE_LENGTH;

/// Length of a block reference.
pub const BLOCK_REF_LENGTH: usize = 8;

/// Length of a clause recipient and of the `beggar` field.
pub const ADDRESS_LENGTH: usize = thor_crypto::ADDRESS_LENGTH;

/// Length of a transaction id, as referenced by `dependsOn`.
pub const TX_ID_LENGTH: usize = thor_crypto::hash::HASH_LENGTH;
