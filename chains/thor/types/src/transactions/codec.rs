//! RLP codec of Thor transaction requests.
//!
//! Each pricing family (legacy, dynamic-fee) has three wire forms sharing one body:
//!
//! | form    | trailing fields                                                  |
//! |---------|------------------------------------------------------------------|
//! | to-sign | none                                                             |
//! | to-send | `signature`                                                      |
//! | full    | `beggar`, `originSignature`, `gasPayerSignature`, `signature`    |
//!
//! Dynamic-fee encodings start with [`DYNAMIC_FEE_PREFIX`]. Decoding picks the family
//! from that byte and the form from the number of top-level items.
use lazy_static::lazy_static;
use primitive_types::U256;

use super::{
    clause::Clause,
    request::{GasPricing, Reserved, TransactionRequest},
    signed::{
        AnyTransactionRequest, SignedRequest, SignedTransactionRequest,
        SponsoredTransactionRequest,
    },
};
use crate::{
    constants::{
        ADDRESS_LENGTH, BLOCK_REF_LENGTH, DYNAMIC_FEE_PREFIX, SIGNATURE_LENGTH,
        SPONSORED_SIGNATURE_LENGTH, TX_ID_LENGTH,
    },
    rlp::{Field, Kind, Object, Profile, RlpItem, RlpProfiler, Value},
    Address, BlockRef, Bytes, Error, Hex, H256, H520,
};

const PROFILE_NAME: &str = "tx";

/// Encodes the `reserved.features` entry.
const FEATURES_KIND: Kind = Kind::Numeric(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WireForm {
    ToSign,
    ToSend,
    Full,
}

struct Profiles {
    body_len: usize,
    to_sign: Profile,
    to_send: Profile,
    full: Profile,
}

impl Profiles {
    fn new(pricing: Vec<Field>) -> Self {
        let clause = Kind::Struct(vec![
            Field::new("to", Kind::OptionalFixedHexBlob(ADDRESS_LENGTH)),
            Field::new("value", Kind::Numeric(32)),
            Field::new("data", Kind::HexBlob),
        ]);
        let mut body = vec![
            Field::new("chainTag", Kind::Numeric(1)),
            Field::new("blockRef", Kind::CompactFixedHexBlob(BLOCK_REF_LENGTH)),
            Field::new("expiration", Kind::Numeric(4)),
            Field::new("clauses", Kind::array_of(clause)),
        ];
        body.extend(pricing);
        body.extend([
            Field::new("gas", Kind::Numeric(8)),
            Field::new("dependsOn", Kind::OptionalFixedHexBlob(TX_ID_LENGTH)),
            Field::new("nonce", Kind::Numeric(8)),
            Field::new("reserved", Kind::array_of(Kind::Buffer)),
        ]);

        let with = |extra: &[Field]| {
            let mut fields = body.clone();
            fields.extend_from_slice(extra);
            Profile::with_fields(PROFILE_NAME, fields)
        };
        let to_send = with(&[Field::new("signature", Kind::Buffer)]);
        let full = with(&[
            Field::new("beggar", Kind::OptionalFixedHexBlob(ADDRESS_LENGTH)),
            Field::new("originSignature", Kind::Buffer),
            Field::new("gasPayerSignature", Kind::Buffer),
            Field::new("signature", Kind::Buffer),
        ]);
        let body_len = body.len();
        Self { body_len, to_sign: Profile::with_fields(PROFILE_NAME, body), to_send, full }
    }

    const fn get(&self, form: WireForm) -> &Profile {
        match form {
            WireForm::ToSign => &self.to_sign,
            WireForm::ToSend => &self.to_send,
            WireForm::Full => &self.full,
        }
    }

    fn form_of(&self, item_count: usize) -> Option<WireForm> {
        [WireForm::ToSign, WireForm::ToSend, WireForm::Full]
            .into_iter()
            .find(|form| self.get(*form).fields().len() == item_count)
    }
}

lazy_static! {
    static ref LEGACY: Profiles =
        Profiles::new(vec![Field::new("gasPriceCoef", Kind::Numeric(1))]);
    static ref DYNAMIC_FEE: Profiles = Profiles::new(vec![
        Field::new("maxPriorityFeePerGas", Kind::Numeric(32)),
        Field::new("maxFeePerGas", Kind::Numeric(32)),
    ]);
}

fn profiles(dynamic_fee: bool) -> &'static Profiles {
    if dynamic_fee {
        &DYNAMIC_FEE
    } else {
        &LEGACY
    }
}

/// Encoder and decoder for every wire form of a [`TransactionRequest`].
pub struct TransactionRequestRlpCodec;

impl TransactionRequestRlpCodec {
    /// Encodes the body only; the bytes whose hash the origin signs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if a field cannot be encoded.
    pub fn encode_to_sign(request: &TransactionRequest) -> Result<Bytes, Error> {
        encode(request, WireForm::ToSign, Object::new())
    }

    /// Encodes the body followed by the 65 or 130 byte signature, as broadcast to the
    /// network.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if a field cannot be encoded.
    pub fn encode_to_send<T: SignedRequest + ?Sized>(request: &T) -> Result<Bytes, Error> {
        let extra = Object::new().with("signature", request.signature().clone());
        encode(request.request(), WireForm::ToSend, extra)
    }

    /// Encodes the body followed by every signature slot, empty when absent.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] if a field cannot be encoded.
    pub fn encode(request: &AnyTransactionRequest) -> Result<Bytes, Error> {
        let mut extra = Object::new()
            .with("beggar", Value::Null)
            .with("originSignature", Bytes::new())
            .with("gasPayerSignature", Bytes::new())
            .with("signature", Bytes::new());
        if let Some(signed) = request.as_signed() {
            let origin_signature = signed.origin_signature().as_bytes();
            extra.insert("originSignature", Bytes::copy_from_slice(origin_signature));
            extra.insert("signature", signed.signature().clone());
        }
        if let AnyTransactionRequest::Sponsored(sponsored) = request {
            extra.insert("beggar", address_value(sponsored.gas_payer()));
            extra.insert(
                "gasPayerSignature",
                Bytes::copy_from_slice(sponsored.gas_payer_signature().as_bytes()),
            );
        }
        encode(request.request(), WireForm::Full, extra)
    }

    /// Decodes any wire form, recovering the origin and gas payer from the signatures.
    ///
    /// The first byte alone selects the family: [`DYNAMIC_FEE_PREFIX`] means
    /// dynamic-fee, anything else is decoded as legacy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRlp`] for malformed bytes or an unknown number of fields,
    /// and [`Error::Crypto`] if a signature does not recover.
    pub fn decode(encoded: &[u8]) -> Result<AnyTransactionRequest, Error> {
        match encoded.split_first() {
            Some((&DYNAMIC_FEE_PREFIX, rest)) => Self::decode_dynamic_fee(rest),
            _ => Self::decode_legacy(encoded),
        }
    }

    /// Decodes a dynamic-fee request with its type prefix already stripped.
    ///
    /// # Errors
    /// See [`Self::decode`].
    pub fn decode_dynamic_fee(encoded: &[u8]) -> Result<AnyTransactionRequest, Error> {
        decode(encoded, true)
    }

    /// # Errors
    /// See [`Self::decode`].
    pub fn decode_legacy(encoded: &[u8]) -> Result<AnyTransactionRequest, Error> {
        decode(encoded, false)
    }
}

fn encode(request: &TransactionRequest, form: WireForm, extra: Object) -> Result<Bytes, Error> {
    let dynamic_fee = request.is_dynamic_fee();
    let mut object = body_object(request)?;
    for (name, value) in extra.iter() {
        object.insert(name, value.clone());
    }
    let profile = profiles(dynamic_fee).get(form);
    let encoded = RlpProfiler::of_object(&Value::Object(object), profile)?.encoded().clone();
    tracing::trace!(?form, dynamic_fee, len = encoded.len(), "encoded transaction request");
    if !dynamic_fee {
        return Ok(encoded);
    }
    let mut prefixed = Vec::with_capacity(encoded.len() + 1);
    prefixed.push(DYNAMIC_FEE_PREFIX);
    prefixed.extend_from_slice(&encoded);
    Ok(prefixed.into())
}

fn decode(encoded: &[u8], dynamic_fee: bool) -> Result<AnyTransactionRequest, Error> {
    let profiles = profiles(dynamic_fee);
    let item =
        RlpItem::decode(encoded).map_err(|error| Error::rlp(PROFILE_NAME, error.to_string()))?;
    let item_count = item
        .as_list()
        .map(<[RlpItem]>::len)
        .ok_or_else(|| Error::rlp(PROFILE_NAME, "expected a list"))?;
    let form = profiles.form_of(item_count).ok_or_else(|| {
        Error::rlp(
            PROFILE_NAME,
            format!(
                "invalid encoded transaction request: expected {}, {} or {} items, but got \
                 {item_count}",
                profiles.body_len,
                profiles.body_len + 1,
                profiles.body_len + 4
            ),
        )
    })?;
    tracing::debug!(?form, dynamic_fee, item_count, "decoding transaction request");

    let value = profiles.get(form).unpack(&item)?;
    let object = value.as_object().ok_or_else(|| Error::rlp(PROFILE_NAME, "expected a list"))?;
    let request = request_from_object(object, dynamic_fee)?;
    ensure_canonical_body(&request, &item, profiles.body_len)?;

    let decoded = match form {
        WireForm::ToSign => AnyTransactionRequest::Unsigned(request),
        WireForm::ToSend => from_signature(request, bytes(object, "signature")?)?,
        WireForm::Full => from_full_signatures(request, object)?,
    };
    if let Some(signed) = decoded.as_signed() {
        tracing::debug!(
            origin = %signed.origin(),
            gas_payer = ?signed.gas_payer(),
            "recovered transaction request signers"
        );
    }
    Ok(decoded)
}

/// The signing hash is taken over the re-encoded body, so any wire body that does not
/// re-encode byte for byte would recover a signer over bytes it never signed.
fn ensure_canonical_body(
    request: &TransactionRequest,
    item: &RlpItem,
    body_len: usize,
) -> Result<(), Error> {
    let body = item
        .as_list()
        .and_then(|items| items.get(..body_len))
        .ok_or_else(|| Error::rlp(PROFILE_NAME, "expected a list"))?;
    let received = RlpItem::List(body.to_vec()).encode();
    let expected = TransactionRequestRlpCodec::encode_to_sign(request)?;
    let expected = match expected.split_first() {
        Some((&DYNAMIC_FEE_PREFIX, rest)) if request.is_dynamic_fee() => rest,
        _ => &expected[..],
    };
    if received[..] != *expected {
        return Err(Error::rlp(PROFILE_NAME, "non-canonical transaction body"));
    }
    Ok(())
}

fn from_signature(
    request: TransactionRequest,
    signature: &Bytes,
) -> Result<AnyTransactionRequest, Error> {
    let context = || format!("{PROFILE_NAME}.signature");
    match signature.len() {
        SIGNATURE_LENGTH => {
            let signed =
                SignedTransactionRequest::from_signature(request, H520::from_slice(signature))?;
            Ok(signed.into())
        },
        SPONSORED_SIGNATURE_LENGTH => {
            let (origin_signature, gas_payer_signature) = signature.split_at(SIGNATURE_LENGTH);
            let origin_signature = H520::from_slice(origin_signature);
            let gas_payer_signature = H520::from_slice(gas_payer_signature);
            let signed = SignedTransactionRequest::from_signature(request, origin_signature)?;
            let sponsored = SponsoredTransactionRequest::recover(signed, gas_payer_signature)?;
            Ok(sponsored.into())
        },
        length => Err(Error::rlp(
            context(),
            format!(
                "expected {SIGNATURE_LENGTH} or {SPONSORED_SIGNATURE_LENGTH} bytes, got {length}"
            ),
        )),
    }
}

fn from_full_signatures(
    request: TransactionRequest,
    object: &Object,
) -> Result<AnyTransactionRequest, Error> {
    let beggar = optional_hex(object, "beggar")?;
    let origin_signature = bytes(object, "originSignature")?;
    let gas_payer_signature = bytes(object, "gasPayerSignature")?;
    let signature = bytes(object, "signature")?;

    if signature.is_empty() {
        if !origin_signature.is_empty() || !gas_payer_signature.is_empty() || beggar.is_some() {
            return Err(Error::rlp(PROFILE_NAME, "signature slots set on an unsigned request"));
        }
        return Ok(AnyTransactionRequest::Unsigned(request));
    }
    if origin_signature.len() != SIGNATURE_LENGTH {
        return Err(Error::rlp(
            format!("{PROFILE_NAME}.originSignature"),
            format!("expected {SIGNATURE_LENGTH} bytes, got {}", origin_signature.len()),
        ));
    }
    if signature[..] != [&origin_signature[..], &gas_payer_signature[..]].concat()[..] {
        return Err(Error::rlp(
            format!("{PROFILE_NAME}.signature"),
            "does not match originSignature followed by gasPayerSignature",
        ));
    }

    let decoded = from_signature(request, signature)?;
    let gas_payer = decoded.as_signed().and_then(SignedRequest::gas_payer);
    match (beggar, gas_payer) {
        (None, _) => Ok(decoded),
        (Some(beggar), Some(gas_payer)) if Address::from_slice(beggar.as_bytes()) == gas_payer => {
            Ok(decoded)
        },
        (Some(_), _) => Err(Error::field(
            format!("{PROFILE_NAME}.beggar"),
            "does not match the address recovered from gasPayerSignature",
        )),
    }
}

fn address_value(address: Option<Address>) -> Value {
    address.map(|address| Hex::of_bytes(address.to_fixed_bytes())).into()
}

fn body_object(request: &TransactionRequest) -> Result<Object, Error> {
    let clauses = request
        .clauses
        .iter()
        .map(|clause| {
            Object::new()
                .with("to", address_value(clause.to))
                .with("value", clause.value)
                .with("data", Hex::of_bytes(Bytes::copy_from_slice(clause.data())))
                .into()
        })
        .collect::<Vec<Value>>();

    let mut object = Object::new()
        .with("chainTag", request.chain_tag)
        .with("blockRef", Hex::of_bytes(request.block_ref.to_fixed_bytes()))
        .with("expiration", request.expiration)
        .with("clauses", clauses)
        .with("gas", request.gas)
        .with("dependsOn", request.depends_on.map(|id| Hex::of_bytes(id.to_fixed_bytes())))
        .with("nonce", request.nonce)
        .with("reserved", encode_reserved(&request.reserved)?);
    match request.pricing {
        GasPricing::Legacy { gas_price_coef } => {
            object.insert("gasPriceCoef", gas_price_coef);
        },
        GasPricing::DynamicFee { max_fee_per_gas, max_priority_fee_per_gas } => {
            object.insert("maxPriorityFeePerGas", max_priority_fee_per_gas);
            object.insert("maxFeePerGas", max_fee_per_gas);
        },
    }
    Ok(object)
}

/// Features first (empty when zero), then unused entries, without trailing empties.
fn encode_reserved(reserved: &Reserved) -> Result<Vec<Value>, Error> {
    let features = if reserved.features == 0 {
        Bytes::new()
    } else {
        FEATURES_KIND.encode(
            &Value::from(reserved.features),
            &format!("{PROFILE_NAME}.reserved.features"),
        )?
    };
    let mut entries = Vec::with_capacity(reserved.unused.len() + 1);
    entries.push(features);
    entries.extend(reserved.unused.iter().cloned());
    while entries.last().is_some_and(|entry| entry.is_empty()) {
        entries.pop();
    }
    Ok(entries.into_iter().map(Value::Bytes).collect())
}

fn decode_reserved(entries: &[Value]) -> Result<Reserved, Error> {
    let context = format!("{PROFILE_NAME}.reserved");
    let entries = entries
        .iter()
        .map(|entry| entry.as_bytes().ok_or_else(|| Error::field(&context, "expected bytes")))
        .collect::<Result<Vec<_>, _>>()?;
    let Some((raw_features, unused)) = entries.split_first() else {
        return Ok(Reserved::default());
    };
    if entries.last().is_some_and(|entry| entry.is_empty()) {
        return Err(Error::rlp(context, "invalid reserved fields: not trimmed"));
    }
    let features_context = format!("{context}.features");
    let features = FEATURES_KIND
        .decode(raw_features, &features_context)?
        .as_number()
        .map_or(0, |features| features.low_u32());
    if features == 0 && !raw_features.is_empty() {
        return Err(Error::rlp(features_context, "zero features must be an empty entry"));
    }
    Ok(Reserved { features, unused: unused.iter().map(|entry| (*entry).clone()).collect() })
}

fn request_from_object(object: &Object, dynamic_fee: bool) -> Result<TransactionRequest, Error> {
    let clauses = field(object, "clauses")?
        .as_list()
        .ok_or_else(|| Error::field(context("clauses"), "expected a list"))?
        .iter()
        .map(clause_from_value)
        .collect::<Result<Vec<_>, _>>()?;
    let reserved = field(object, "reserved")?
        .as_list()
        .ok_or_else(|| Error::field(context("reserved"), "expected a list"))
        .and_then(decode_reserved)?;

    let pricing = if dynamic_fee {
        GasPricing::DynamicFee {
            max_fee_per_gas: number(object, "maxFeePerGas")?,
            max_priority_fee_per_gas: number(object, "maxPriorityFeePerGas")?,
        }
    } else {
        GasPricing::Legacy { gas_price_coef: small_number(object, "gasPriceCoef")? }
    };

    Ok(TransactionRequest {
        chain_tag: small_number(object, "chainTag")?,
        block_ref: BlockRef::from(fixed::<BLOCK_REF_LENGTH>(object, "blockRef")?),
        expiration: small_number(object, "expiration")?,
        clauses,
        pricing,
        gas: small_number(object, "gas")?,
        depends_on: optional_hex(object, "dependsOn")?
            .map(|hex| fixed_from_hex::<TX_ID_LENGTH>(hex, "dependsOn").map(H256))
            .transpose()?,
        nonce: small_number(object, "nonce")?,
        reserved,
    })
}

fn clause_from_value(value: &Value) -> Result<Clause, Error> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::field(context("clauses"), "expected an object"))?;
    let data = hex(object, "data")?;
    Ok(Clause {
        to: optional_hex(object, "to")?
            .map(|hex| fixed_from_hex::<ADDRESS_LENGTH>(hex, "to").map(Address::from))
            .transpose()?,
        value: number(object, "value")?,
        data: (!data.is_empty()).then(|| data.to_bytes()),
        comment: None,
        abi: None,
    })
}

fn context(name: &str) -> String {
    format!("{PROFILE_NAME}.{name}")
}

fn field<'a>(object: &'a Object, name: &str) -> Result<&'a Value, Error> {
    object.get(name).ok_or_else(|| Error::field(context(name), "missing"))
}

fn number(object: &Object, name: &str) -> Result<U256, Error> {
    field(object, name)?
        .as_number()
        .ok_or_else(|| Error::field(context(name), "expected a number"))
}

fn small_number<T: TryFrom<u64>>(object: &Object, name: &str) -> Result<T, Error> {
    let value = number(object, name)?;
    let out_of_range = || Error::field(context(name), format!("{value} is out of range"));
    if value.bits() > 64 {
        return Err(out_of_range());
    }
    T::try_from(value.low_u64()).map_err(|_| out_of_range())
}

fn hex<'a>(object: &'a Object, name: &str) -> Result<&'a Hex, Error> {
    field(object, name)?.as_hex().ok_or_else(|| Error::field(context(name), "expected hex"))
}

fn optional_hex<'a>(object: &'a Object, name: &str) -> Result<Option<&'a Hex>, Error> {
    match field(object, name)? {
        Value::Null => Ok(None),
        Value::Hex(hex) => Ok(Some(hex)),
        _ => Err(Error::field(context(name), "expected hex or null")),
    }
}

fn bytes<'a>(object: &'a Object, name: &str) -> Result<&'a Bytes, Error> {
    field(object, name)?.as_bytes().ok_or_else(|| Error::field(context(name), "expected bytes"))
}

fn fixed<const N: usize>(object: &Object, name: &str) -> Result<[u8; N], Error> {
    fixed_from_hex(hex(object, name)?, name)
}

fn fixed_from_hex<const N: usize>(hex: &Hex, name: &str) -> Result<[u8; N], Error> {
    <[u8; N]>::try_from(hex.as_bytes())
        .map_err(|_| Error::field(context(name), format!("expected {N} bytes, got {}", hex.len())))
}
