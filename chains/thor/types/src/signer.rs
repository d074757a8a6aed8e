use core::fmt::{Debug, Formatter};

use thor_crypto::{address, ecdsa, PRIVATE_KEY_LENGTH};
use zeroize::Zeroizing;

use crate::{
    transactions::{
        request::TransactionRequest,
        signed::{SignedRequest, SignedTransactionRequest, SponsoredTransactionRequest},
    },
    Address, Error, H520,
};

pub trait Signer {
    type Error;

    /// Address whose signatures this signer produces.
    fn address(&self) -> Address;

    /// Signs `request` as its origin.
    ///
    /// # Errors
    /// Returns `Err` if the request can't be encoded or signed.
    fn sign(&self, request: &TransactionRequest) -> Result<SignedTransactionRequest, Self::Error>;

    /// Signs an origin-signed request as its gas payer.
    ///
    /// # Errors
    /// Returns `Err` if the request does not ask for a gas payer or can't be signed.
    fn sponsor(
        &self,
        signed: &SignedTransactionRequest,
    ) -> Result<SponsoredTransactionRequest, Self::Error>;
}

/// Signer holding a secp256k1 private key in memory, wiped on drop.
pub struct PrivateKeySigner {
    private_key: Zeroizing<[u8; PRIVATE_KEY_LENGTH]>,
    address: Address,
}

impl PrivateKeySigner {
    /// # Errors
    /// Returns [`Error::Crypto`] if `private_key` is not a valid secp256k1 key.
    pub fn new(private_key: &[u8]) -> Result<Self, Error> {
        let address = Address::from(address::from_private_key(private_key)?);
        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
        key.copy_from_slice(private_key);
        Ok(Self { private_key: key, address })
    }

    /// Signer over a freshly generated key.
    ///
    /// # Errors
    /// Returns [`Error::Crypto`] if the generated key can't be used, which the key
    /// generator rules out.
    pub fn random() -> Result<Self, Error> {
        let private_key = ecdsa::generate_private_key();
        let address = Address::from(address::from_private_key(private_key.as_ref())?);
        Ok(Self { private_key, address })
    }

    fn sign_hash(&self, hash: &[u8]) -> Result<H520, Error> {
        Ok(H520(ecdsa::sign(hash, self.private_key.as_ref())?))
    }
}

impl Debug for PrivateKeySigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKeySigner").field("address", &self.address).finish_non_exhaustive()
    }
}

impl Signer for PrivateKeySigner {
    type Error = Error;

    fn address(&self) -> Address {
        self.address
    }

    fn sign(&self, request: &TransactionRequest) -> Result<SignedTransactionRequest, Error> {
        let signing_hash = request.signing_hash()?;
        tracing::debug!(origin = %self.address, %signing_hash, "signing transaction request");
        let signature = self.sign_hash(signing_hash.as_bytes())?;
        SignedTransactionRequest::from_signature(request.clone(), signature)
    }

    fn sponsor(
        &self,
        signed: &SignedTransactionRequest,
    ) -> Result<SponsoredTransactionRequest, Error> {
        if !signed.request().is_intended_to_be_sponsored() {
            return Err(Error::UnsupportedOperation {
                context: "PrivateKeySigner::sponsor",
                reason: "transaction is not intended to be sponsored".into(),
            });
        }
        let hash = signed.gas_payer_signing_hash()?;
        tracing::debug!(
            origin = %signed.origin(),
            gas_payer = %self.address,
            "sponsoring transaction request"
        );
        let signature = self.sign_hash(hash.as_bytes())?;
        SponsoredTransactionRequest::from_signatures(signed.clone(), signature)
    }
}
