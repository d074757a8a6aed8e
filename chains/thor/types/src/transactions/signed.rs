use thor_crypto::{address, ecdsa, hash::blake2b256_concat};

use super::{codec::TransactionRequestRlpCodec, request::TransactionRequest};
use crate::{
    constants::SPONSORED_SIGNATURE_LENGTH, Address, Bytes, Error, TxId, H256, H520,
};

/// Common view over requests carrying at least the origin signature.
pub trait SignedRequest {
    fn request(&self) -> &TransactionRequest;

    fn origin(&self) -> Address;

    fn origin_signature(&self) -> &H520;

    /// The signature sent to the network: 65 bytes, or 130 when sponsored.
    fn signature(&self) -> &Bytes;

    fn gas_payer(&self) -> Option<Address> {
        None
    }

    /// Blake2b-256 of `signing_hash ‖ origin`, the digest a gas payer signs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if the request cannot be encoded.
    fn gas_payer_signing_hash(&self) -> Result<H256, Error> {
        let signing_hash = self.request().signing_hash()?;
        Ok(H256(blake2b256_concat(&[signing_hash.as_bytes(), self.origin().as_bytes()])))
    }

    /// Transaction id, the same digest as [`SignedRequest::gas_payer_signing_hash`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if the request cannot be encoded.
    fn id(&self) -> Result<TxId, Error> {
        self.gas_payer_signing_hash()
    }

    /// # Errors
    /// Returns [`Error::InvalidRlp`] if the request cannot be encoded.
    fn encode_to_send(&self) -> Result<Bytes, Error> {
        TransactionRequestRlpCodec::encode_to_send(self)
    }
}

/// Request signed by its origin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct SignedTransactionRequest {
    #[cfg_attr(feature = "serde", serde(flatten))]
    request: TransactionRequest,
    origin: Address,
    origin_signature: H520,
    signature: Bytes,
}

impl SignedTransactionRequest {
    /// Attaches `origin_signature` to `request`, recovering the origin from it.
    ///
    /// # Errors
    /// Returns [`Error::Crypto`] if the signature is malformed or does not recover.
    pub fn from_signature(
        request: TransactionRequest,
        origin_signature: H520,
    ) -> Result<Self, Error> {
        let signing_hash = request.signing_hash()?;
        let origin = recover_address(&signing_hash, &origin_signature)?;
        Ok(Self {
            request,
            origin,
            origin_signature,
            signature: Bytes::copy_from_slice(origin_signature.as_bytes()),
        })
    }

    #[must_use]
    pub fn into_request(self) -> TransactionRequest {
        self.request
    }
}

impl SignedRequest for SignedTransactionRequest {
    fn request(&self) -> &TransactionRequest {
        &self.request
    }

    fn origin(&self) -> Address {
        self.origin
    }

    fn origin_signature(&self) -> &H520 {
        &self.origin_signature
    }

    fn signature(&self) -> &Bytes {
        &self.signature
    }
}

/// Request signed by both its origin and the gas payer sponsoring it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct SponsoredTransactionRequest {
    #[cfg_attr(feature = "serde", serde(flatten))]
    request: TransactionRequest,
    origin: Address,
    origin_signature: H520,
    gas_payer: Address,
    gas_payer_signature: H520,
    signature: Bytes,
}

impl SponsoredTransactionRequest {
    /// Adds the gas payer signature to an origin-signed request.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedOperation`] if the request does not ask for a gas
    /// payer, or [`Error::Crypto`] if the signature does not recover.
    pub fn from_signatures(
        signed: SignedTransactionRequest,
        gas_payer_signature: H520,
    ) -> Result<Self, Error> {
        if !signed.request.is_intended_to_be_sponsored() {
            return Err(Error::UnsupportedOperation {
                context: "SponsoredTransactionRequest::from_signatures",
                reason: "transaction is not intended to be sponsored".into(),
            });
        }
        Self::recover(signed, gas_payer_signature)
    }

    /// Same as [`Self::from_signatures`] without checking the delegation flag, so
    /// decoding reflects exactly what is on the wire.
    pub(crate) fn recover(
        signed: SignedTransactionRequest,
        gas_payer_signature: H520,
    ) -> Result<Self, Error> {
        let gas_payer =
            recover_address(&signed.gas_payer_signing_hash()?, &gas_payer_signature)?;
        let mut signature = Vec::with_capacity(SPONSORED_SIGNATURE_LENGTH);
        signature.extend_from_slice(signed.origin_signature.as_bytes());
        signature.extend_from_slice(gas_payer_signature.as_bytes());
        Ok(Self {
            request: signed.request,
            origin: signed.origin,
            origin_signature: signed.origin_signature,
            gas_payer,
            gas_payer_signature,
            signature: signature.into(),
        })
    }

    #[must_use]
    pub const fn gas_payer_signature(&self) -> &H520 {
        &self.gas_payer_signature
    }

    #[must_use]
    pub fn into_request(self) -> TransactionRequest {
        self.request
    }
}

impl SignedRequest for SponsoredTransactionRequest {
    fn request(&self) -> &TransactionRequest {
        &self.request
    }

    fn origin(&self) -> Address {
        self.origin
    }

    fn origin_signature(&self) -> &H520 {
        &self.origin_signature
    }

    fn signature(&self) -> &Bytes {
        &self.signature
    }

    fn gas_payer(&self) -> Option<Address> {
        Some(self.gas_payer)
    }
}

/// A transaction request in any of its signature states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyTransactionRequest {
    Unsigned(TransactionRequest),
    Signed(SignedTransactionRequest),
    Sponsored(SponsoredTransactionRequest),
}

impl AnyTransactionRequest {
    #[must_use]
    pub const fn request(&self) -> &TransactionRequest {
        match self {
            Self::Unsigned(request) => request,
            Self::Signed(signed) => &signed.request,
            Self::Sponsored(sponsored) => &sponsored.request,
        }
    }

    #[must_use]
    pub fn as_signed(&self) -> Option<&dyn SignedRequest> {
        match self {
            Self::Unsigned(_) => None,
            Self::Signed(signed) => Some(signed),
            Self::Sponsored(sponsored) => Some(sponsored),
        }
    }

    #[must_use]
    pub const fn is_signed(&self) -> bool {
        !matches!(self, Self::Unsigned(_))
    }

    #[must_use]
    pub const fn is_sponsored(&self) -> bool {
        matches!(self, Self::Sponsored(_))
    }

    /// Full encoding, keeping every signature slot.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if a field cannot be encoded.
    pub fn encode(&self) -> Result<Bytes, Error> {
        TransactionRequestRlpCodec::encode(self)
    }

    /// # Errors
    /// Returns [`Error::InvalidRlp`] or [`Error::Crypto`] for malformed input.
    pub fn decode(encoded: &[u8]) -> Result<Self, Error> {
        TransactionRequestRlpCodec::decode(encoded)
    }
}

impl From<TransactionRequest> for AnyTransactionRequest {
    fn from(request: TransactionRequest) -> Self {
        Self::Unsigned(request)
    }
}

impl From<SignedTransactionRequest> for AnyTransactionRequest {
    fn from(signed: SignedTransactionRequest) -> Self {
        Self::Signed(signed)
    }
}

impl From<SponsoredTransactionRequest> for AnyTransactionRequest {
    fn from(sponsored: SponsoredTransactionRequest) -> Self {
        Self::Sponsored(sponsored)
    }
}

fn recover_address(hash: &H256, signature: &H520) -> Result<Address, Error> {
    let public = ecdsa::recover(hash.as_bytes(), signature.as_bytes())?;
    Ok(Address::from(address::from_public_key(&public)?))
}
