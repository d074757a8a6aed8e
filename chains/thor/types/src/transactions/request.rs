use primitive_types::U256;
use thor_crypto::hash::blake2b256;

use super::{clause::Clause, codec::TransactionRequestRlpCodec, signed::SignedTransactionRequest};
use crate::{
    constants::DELEGATED_FEATURE,
    signer::{PrivateKeySigner, Signer},
    BlockRef, Bytes, Error, H256,
};

/// How the request pays for gas. Fixed at construction: a request is either legacy or
/// dynamic-fee for its whole life.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(untagged))]
pub enum GasPricing {
    /// Gas price as a coefficient over the network base price.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Legacy { gas_price_coef: u8 },
    /// Dynamic fee, encoded with the `0x51` type prefix.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    DynamicFee { max_fee_per_gas: U256, max_priority_fee_per_gas: U256 },
}

impl Default for GasPricing {
    fn default() -> Self {
        Self::Legacy { gas_price_coef: 0 }
    }
}

/// Feature flags and unrecognized trailing entries of the `reserved` list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Reserved {
    pub features: u32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub unused: Vec<Bytes>,
}

impl Reserved {
    /// Reserved field requesting a gas payer.
    #[must_use]
    pub const fn delegated() -> Self {
        Self { features: DELEGATED_FEATURE, unused: Vec::new() }
    }

    #[must_use]
    pub const fn is_delegated(&self) -> bool {
        self.features & DELEGATED_FEATURE == DELEGATED_FEATURE
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features == 0 && self.unused.is_empty()
    }
}

/// Unsigned transaction request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransactionRequest {
    /// Last byte of the genesis block id of the target network.
    pub chain_tag: u8,
    /// Block after which the transaction becomes valid.
    pub block_ref: BlockRef,
    /// Number of blocks after `block_ref` during which the transaction stays valid.
    pub expiration: u32,
    pub clauses: Vec<Clause>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pricing: GasPricing,
    pub gas: u64,
    /// Transaction that must be executed before this one.
    pub depends_on: Option<H256>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::uint_to_hex"))]
    pub nonce: u64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Reserved::is_empty"))]
    pub reserved: Reserved,
}

impl TransactionRequest {
    #[must_use]
    pub const fn is_dynamic_fee(&self) -> bool {
        matches!(self.pricing, GasPricing::DynamicFee { .. })
    }

    /// The legacy gas price coefficient, `0` for dynamic-fee requests.
    #[must_use]
    pub const fn gas_price_coef(&self) -> u8 {
        match self.pricing {
            GasPricing::Legacy { gas_price_coef } => gas_price_coef,
            GasPricing::DynamicFee { .. } => 0,
        }
    }

    #[must_use]
    pub const fn max_fee_per_gas(&self) -> Option<U256> {
        match self.pricing {
            GasPricing::DynamicFee { max_fee_per_gas, .. } => Some(max_fee_per_gas),
            GasPricing::Legacy { .. } => None,
        }
    }

    #[must_use]
    pub const fn max_priority_fee_per_gas(&self) -> Option<U256> {
        match self.pricing {
            GasPricing::DynamicFee { max_priority_fee_per_gas, .. } => {
                Some(max_priority_fee_per_gas)
            },
            GasPricing::Legacy { .. } => None,
        }
    }

    /// Whether the origin asks a gas payer to cover the fees.
    #[must_use]
    pub const fn is_intended_to_be_sponsored(&self) -> bool {
        self.reserved.is_delegated()
    }

    /// # Errors
    /// Returns [`Error::InvalidRlp`] if a field cannot be encoded.
    pub fn encode_to_sign(&self) -> Result<Bytes, Error> {
        TransactionRequestRlpCodec::encode_to_sign(self)
    }

    /// Blake2b-256 of the unsigned encoding; the digest the origin signs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if a field cannot be encoded.
    pub fn signing_hash(&self) -> Result<H256, Error> {
        Ok(H256(blake2b256(&self.encode_to_sign()?)))
    }

    /// Signs the request as its origin.
    ///
    /// # Errors
    /// Returns [`Error::Crypto`] if `private_key` is not a valid secp256k1 key.
    pub fn sign(&self, private_key: &[u8]) -> Result<SignedTransactionRequest, Error> {
        PrivateKeySigner::new(private_key)?.sign(self)
    }
}
