//! Transaction request types and the canonical RLP codec of VeChain Thor.
mod bytes;
pub mod constants;
mod error;
pub mod hex;
pub mod rlp;
#[cfg(feature = "serde")]
pub mod serde_utils;
pub mod signer;
mod thor_hash;
pub mod transactions;

pub use bytes::{Bytes, ParseBytesError};
pub use error::Error;
pub use hex::{Hex, HexError};
pub use primitive_types::U256;
pub use signer::{PrivateKeySigner, Signer};
pub use thor_hash::{Address, BlockRef, TxId, H160, H256, H520, H64};
pub use transactions::{
    clause::Clause,
    codec::TransactionRequestRlpCodec,
    request::{GasPricing, Reserved, TransactionRequest},
    signed::{
        AnyTransactionRequest, SignedRequest, SignedTransactionRequest,
        SponsoredTransactionRequest,
    },
};

/// Re-exports so downstream crates don't need to depend on the codec stack directly.
pub mod ext {
    pub use bytes;
    pub use primitive_types;
    pub use rlp;
    #[cfg(feature = "serde")]
    pub use serde;
    pub use thor_crypto;
}
