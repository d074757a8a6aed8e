// ignore clippy warnings in `construct_fixed_hash!` macro.
#![allow(
    clippy::pedantic,
    clippy::reversed_empty_ranges,
    clippy::assign_op_pattern,
    clippy::incorrect_clone_impl_on_copy_type
)]
use fixed_hash::construct_fixed_hash;
#[cfg(feature = "serde")]
use impl_serde_macro::impl_fixed_hash_serde;
pub use primitive_types::{H160, H256};

pub type Address = H160;
pub type TxId = H256;
/// First 8 bytes of a block id: the block number followed by 4 bytes of its hash.
pub type BlockRef = H64;

macro_rules! impl_hash {
    ($hash: ident, $n_bytes: expr) => {
        construct_fixed_hash! { pub struct $hash($n_bytes); }

        #[cfg(feature = "serde")]
        impl_fixed_hash_serde!($hash, $n_bytes);
    };
}

impl_hash!(H64, 8);
impl_hash!(H520, 65);

impl H64 {
    /// Block number encoded in the first 4 bytes of a block reference.
    #[must_use]
    pub fn block_number(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}
