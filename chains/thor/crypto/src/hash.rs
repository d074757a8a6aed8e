//! Digest functions used by the Thor protocol.
use sha3::Digest;

/// Length in bytes of every digest produced by this module.
pub const HASH_LENGTH: usize = 32;

/// Blake2b with a 256 bit output, the hash behind signing hashes and transaction ids.
#[must_use]
pub fn blake2b256(data: &[u8]) -> [u8; HASH_LENGTH] {
    blake2b256_concat(&[data])
}

/// Blake2b-256 over the concatenation of `parts`, without allocating the concatenation.
#[must_use]
pub fn blake2b256_concat(parts: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut context = blake2_rfc::blake2b::Blake2b::new(HASH_LENGTH);
    for part in parts {
        context.update(part);
    }
    let mut digest = [0u8; HASH_LENGTH];
    digest.copy_from_slice(context.finalize().as_bytes());
    digest
}

/// Keccak-256, used to derive account addresses from public keys.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; HASH_LENGTH] {
    sha3::Keccak256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn blake2b256_works() {
        assert_eq!(
            blake2b256(b""),
            hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
        );
        assert_eq!(
            blake2b256(b"hello world"),
            hex!("256c83b297114d201b30179f3f0ef0cace9783622da5974326b436178aeef610")
        );
    }

    #[test]
    fn blake2b256_concat_matches_single_buffer() {
        assert_eq!(blake2b256_concat(&[b"hello", b" ", b"world"]), blake2b256(b"hello world"));
        assert_eq!(blake2b256_concat(&[]), blake2b256(b""));
    }

    #[test]
    fn keccak256_works() {
        assert_eq!(
            keccak256(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(
            keccak256(b"hello world"),
            hex!("47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad")
        );
    }
}
