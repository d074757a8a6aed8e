//! Shared requests and their wire encodings.
//!
//! Three requests built from the same body: plain legacy, legacy with the delegation
//! flag, and dynamic-fee with the delegation flag. Each is signed by `ORIGIN_KEY` and,
//! when delegated, sponsored by `GAS_PAYER_KEY`.
#![allow(dead_code)]
use hex_literal::hex;
use primitive_types::U256;

use super::{
    clause::Clause,
    request::{GasPricing, Reserved, TransactionRequest},
};
use crate::{Address, BlockRef};

pub const ORIGIN_KEY: [u8; 32] =
    hex!("7582be841ca040aa940fff6c05773129e135623e41acce3e0b8ba520dc1ae26a");
pub const ORIGIN: [u8; 20] = hex!("d989829d88b0ed1b06edf5c50174ecfa64f14a64");
pub const GAS_PAYER_KEY: [u8; 32] =
    hex!("321d6443bc6177273b5abf54210fe806d451d6b7973bccc2384ef78bbcd0bf51");
pub const GAS_PAYER: [u8; 20] = hex!("d3ae78222beadb038203be21ed5ce7c9b1bff602");

pub fn legacy_request() -> TransactionRequest {
    let to = Address::from(hex!("7567d83b7b8d80addcb281a71d54fc7b3364ffed"));
    TransactionRequest {
        chain_tag: 1,
        block_ref: BlockRef::from(hex!("00000000aabbccdd")),
        expiration: 32,
        clauses: vec![
            Clause::call(to, U256::from(10_000), hex!("000000606060")),
            Clause::call(to, U256::from(20_000), hex!("000000606060")),
        ],
        pricing: GasPricing::Legacy { gas_price_coef: 128 },
        gas: 21_000,
        depends_on: None,
        nonce: 12_345_678,
        reserved: Reserved::default(),
    }
}

pub fn delegated_request() -> TransactionRequest {
    TransactionRequest { reserved: Reserved::delegated(), ..legacy_request() }
}

pub fn dynamic_fee_request() -> TransactionRequest {
    TransactionRequest {
        pricing: GasPricing::DynamicFee {
            max_fee_per_gas: U256::from(1_000_000_000_000_000u64),
            max_priority_fee_per_gas: U256::zero(),
        },
        reserved: Reserved::delegated(),
        ..legacy_request()
    }
}

pub static LEGACY_TO_SIGN: &[u8] = &hex!("f8540184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec0");
pub static LEGACY_TO_SEND: &[u8] = &hex!("f8970184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec0b841f76f3c91a834165872aa9464fc55b03a13f46ea8d3b858e528fcceaf371ad6884193c3f313ff8effbb57fe4d1adc13dceb933bedbf9dbb528d2936203d5511df00");
pub static LEGACY_FULL_UNSIGNED: &[u8] = &hex!("f8580184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec080808080");
pub static LEGACY_FULL_SIGNED: &[u8] = &hex!("f8dc0184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec080b841f76f3c91a834165872aa9464fc55b03a13f46ea8d3b858e528fcceaf371ad6884193c3f313ff8effbb57fe4d1adc13dceb933bedbf9dbb528d2936203d5511df0080b841f76f3c91a834165872aa9464fc55b03a13f46ea8d3b858e528fcceaf371ad6884193c3f313ff8effbb57fe4d1adc13dceb933bedbf9dbb528d2936203d5511df00");
pub const LEGACY_SIGNING_HASH: [u8; 32] = hex!("2a1c25ce0d66f45276a5f308b99bf410e2fc7d5b6ea37a49f2ab9f1da9446478");
pub const LEGACY_ID: [u8; 32] = hex!("da90eaea52980bc4bb8d40cb2ff84d78433b3b4a6e7d50b75736c5e3e77b71ec");
pub const LEGACY_ORIGIN_SIGNATURE: [u8; 65] = hex!("f76f3c91a834165872aa9464fc55b03a13f46ea8d3b858e528fcceaf371ad6884193c3f313ff8effbb57fe4d1adc13dceb933bedbf9dbb528d2936203d5511df00");

pub static DELEGATED_TO_SIGN: &[u8] = &hex!("f8550184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec101");
pub static DELEGATED_TO_SEND: &[u8] = &hex!("f8980184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec101b8412cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d01");
pub static DELEGATED_FULL_UNSIGNED: &[u8] = &hex!("f8590184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec10180808080");
pub static DELEGATED_FULL_SIGNED: &[u8] = &hex!("f8dd0184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec10180b8412cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d0180b8412cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d01");
pub static DELEGATED_TO_SEND_SPONSORED: &[u8] = &hex!("f8d90184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec101b8822cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d01290df2f7f39fffd68cb12233fe6f3094e05c4971163d5608b0c9146dd69bdcce396a22fe004645613aebe9d69c7c1b62fd575ce068ac75dcc946b5362f029da400");
pub static DELEGATED_FULL_SPONSORED: &[u8] = &hex!("f901740184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e208600000060606081808252088083bc614ec10194d3ae78222beadb038203be21ed5ce7c9b1bff602b8412cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d01b841290df2f7f39fffd68cb12233fe6f3094e05c4971163d5608b0c9146dd69bdcce396a22fe004645613aebe9d69c7c1b62fd575ce068ac75dcc946b5362f029da400b8822cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d01290df2f7f39fffd68cb12233fe6f3094e05c4971163d5608b0c9146dd69bdcce396a22fe004645613aebe9d69c7c1b62fd575ce068ac75dcc946b5362f029da400");
pub const DELEGATED_SIGNING_HASH: [u8; 32] = hex!("005fb0b47dfd16b7f2f61bb17df791242bc37ed1fffe9b05fa55fb0fe069f9a3");
pub const DELEGATED_ID: [u8; 32] = hex!("d4d1ae152119bd7c9410844e70b82d6d42c15494f1d59b99f5808a90da403a98");
pub const DELEGATED_ORIGIN_SIGNATURE: [u8; 65] = hex!("2cec617320e27c7ddd4058c048328ca7288914a4b9c9a663a0f7673b774b1f2c3e4366ddc5a03724ad9aad72c8805cb7972a927638eee40718e2eb4e580d322d01");
pub const DELEGATED_GAS_PAYER_SIGNATURE: [u8; 65] = hex!("290df2f7f39fffd68cb12233fe6f3094e05c4971163d5608b0c9146dd69bdcce396a22fe004645613aebe9d69c7c1b62fd575ce068ac75dcc946b5362f029da400");

pub static DYNAMIC_FEE_TO_SIGN: &[u8] = &hex!("51f85c0184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e20860000006060600087038d7ea4c680008252088083bc614ec101");
pub static DYNAMIC_FEE_TO_SEND: &[u8] = &hex!("51f89f0184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e20860000006060600087038d7ea4c680008252088083bc614ec101b841f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa488700");
pub static DYNAMIC_FEE_FULL_UNSIGNED: &[u8] = &hex!("51f8600184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e20860000006060600087038d7ea4c680008252088083bc614ec10180808080");
pub static DYNAMIC_FEE_FULL_SIGNED: &[u8] = &hex!("51f8e40184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e20860000006060600087038d7ea4c680008252088083bc614ec10180b841f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa48870080b841f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa488700");
pub static DYNAMIC_FEE_TO_SEND_SPONSORED: &[u8] = &hex!("51f8e00184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e20860000006060600087038d7ea4c680008252088083bc614ec101b882f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa48870049708d845078ddd5c40744c5dedb73d5c30a0190d74022ea8f408a379376226c1c74b1d798dc6d5d2fd64ded347f5ad94f83b2ec5148211f83014b0591952f5e01");
pub static DYNAMIC_FEE_FULL_SPONSORED: &[u8] = &hex!("51f9017b0184aabbccdd20f840df947567d83b7b8d80addcb281a71d54fc7b3364ffed82271086000000606060df947567d83b7b8d80addcb281a71d54fc7b3364ffed824e20860000006060600087038d7ea4c680008252088083bc614ec10194d3ae78222beadb038203be21ed5ce7c9b1bff602b841f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa488700b84149708d845078ddd5c40744c5dedb73d5c30a0190d74022ea8f408a379376226c1c74b1d798dc6d5d2fd64ded347f5ad94f83b2ec5148211f83014b0591952f5e01b882f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa48870049708d845078ddd5c40744c5dedb73d5c30a0190d74022ea8f408a379376226c1c74b1d798dc6d5d2fd64ded347f5ad94f83b2ec5148211f83014b0591952f5e01");
pub const DYNAMIC_FEE_SIGNING_HASH: [u8; 32] = hex!("2de4ea3a675c63734a2cfb6e53d1f439a172e3253427ee036268181f5b460a0e");
pub const DYNAMIC_FEE_ID: [u8; 32] = hex!("1d430420e51fcc27db91e6954befebea8a021ee33bc6a4aa2b95e518b86c93f5");
pub const DYNAMIC_FEE_ORIGIN_SIGNATURE: [u8; 65] = hex!("f8597288f5131648fe09f6177c2918638f914a529c6cacaf59db18829f906415435ad68d9a659bec97642490cfa84af062d3403f77fb474aa9d30686f5aa488700");
pub const DYNAMIC_FEE_GAS_PAYER_SIGNATURE: [u8; 65] = hex!("49708d845078ddd5c40744c5dedb73d5c30a0190d74022ea8f408a379376226c1c74b1d798dc6d5d2fd64ded347f5ad94f83b2ec5148211f83014b0591952f5e01");
