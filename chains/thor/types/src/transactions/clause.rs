use primitive_types::U256;

use crate::{Address, Bytes};

/// A single call or transfer inside a transaction.
///
/// `comment` and `abi` are annotations for tooling and never reach the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Clause {
    /// Recipient, `None` deploys a contract.
    pub to: Option<Address>,
    pub value: U256,
    /// Call data or deployment bytecode. An empty payload is normalized to `None`.
    #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_utils::bytes_or_empty"))]
    pub data: Option<Bytes>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub comment: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub abi: Option<String>,
}

impl Clause {
    #[must_use]
    pub fn transfer(to: Address, value: U256) -> Self {
        Self { to: Some(to), value, ..Self::default() }
    }

    #[must_use]
    pub fn call(to: Address, value: U256, data: impl Into<Bytes>) -> Self {
        Self { to: Some(to), value, data: non_empty(data.into()), ..Self::default() }
    }

    #[must_use]
    pub fn deploy(bytecode: impl Into<Bytes>) -> Self {
        Self { data: non_empty(bytecode.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_abi(mut self, abi: impl Into<String>) -> Self {
        self.abi = Some(abi.into());
        self
    }

    /// Payload bytes, empty when the clause carries none.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

fn non_empty(bytes: Bytes) -> Option<Bytes> {
    (!bytes.is_empty()).then_some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const TO: [u8; 20] = hex!("7567d83b7b8d80addcb281a71d54fc7b3364ffed");

    #[test]
    fn constructors() {
        let transfer = Clause::transfer(Address::from(TO), U256::from(10_000));
        assert!(!transfer.is_contract_creation());
        assert!(transfer.data().is_empty());

        let deploy = Clause::deploy(hex!("6080"));
        assert!(deploy.is_contract_creation());
        assert_eq!(deploy.data(), &hex!("6080"));

        let call = Clause::call(Address::from(TO), U256::zero(), Vec::new());
        assert_eq!(call.data, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_works() {
        let clause = Clause::call(Address::from(TO), U256::from(10_000), hex!("000000606060"))
            .with_comment("transfer");
        let json = serde_json::to_value(&clause).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "to": "0x7567d83b7b8d80addcb281a71d54fc7b3364ffed",
                "value": "0x2710",
                "data": "0x000000606060",
                "comment": "transfer",
            })
        );
        assert_eq!(serde_json::from_value::<Clause>(json).unwrap(), clause);

        let deploy = serde_json::to_value(Clause::default()).unwrap();
        assert_eq!(deploy, serde_json::json!({ "to": null, "value": "0x0", "data": "0x" }));
    }
}
