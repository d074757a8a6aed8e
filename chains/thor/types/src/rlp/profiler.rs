use super::{Field, Kind, Object, RlpItem, Value};
use crate::{Bytes, Error};

/// Named root of a profile tree. The name prefixes every error context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub kind: Kind,
}

impl Profile {
    #[must_use]
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self { name, kind }
    }

    #[must_use]
    pub const fn with_fields(name: &'static str, fields: Vec<Field>) -> Self {
        Self::new(name, Kind::Struct(fields))
    }

    /// Fields of a struct profile, empty for any other kind.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            Kind::Struct(fields) => fields,
            _ => &[],
        }
    }

    /// # Errors
    /// Returns [`Error::InvalidRlp`] when `value` does not match the profile.
    pub fn pack(&self, value: &Value) -> Result<RlpItem, Error> {
        pack(&self.kind, value, self.name)
    }

    /// # Errors
    /// Returns [`Error::InvalidRlp`] when `item` does not match the profile.
    pub fn unpack(&self, item: &RlpItem) -> Result<Value, Error> {
        unpack(&self.kind, item, self.name)
    }
}

/// Encodes objects to bytes, or decodes bytes to objects, according to a [`Profile`].
#[derive(Clone, Debug)]
pub struct RlpProfiler {
    object: Value,
    encoded: Bytes,
}

impl RlpProfiler {
    /// # Errors
    /// Returns [`Error::InvalidRlp`] naming the first field that fails validation.
    pub fn of_object(object: &Value, profile: &Profile) -> Result<Self, Error> {
        let encoded = profile.pack(object)?.encode();
        Ok(Self { object: object.clone(), encoded })
    }

    /// # Errors
    /// Returns [`Error::InvalidRlp`] if `encoded` is not well-formed RLP or a field
    /// violates its kind.
    pub fn of_object_encoded(encoded: &[u8], profile: &Profile) -> Result<Self, Error> {
        let item =
            RlpItem::decode(encoded).map_err(|error| Error::rlp(profile.name, error.to_string()))?;
        let object = profile.unpack(&item)?;
        Ok(Self { object, encoded: Bytes::copy_from_slice(encoded) })
    }

    #[must_use]
    pub const fn object(&self) -> &Value {
        &self.object
    }

    #[must_use]
    pub fn into_object(self) -> Value {
        self.object
    }

    #[must_use]
    pub const fn encoded(&self) -> &Bytes {
        &self.encoded
    }
}

fn pack(kind: &Kind, value: &Value, context: &str) -> Result<RlpItem, Error> {
    match kind {
        Kind::Struct(fields) => {
            let object = value.as_object().ok_or_else(|| {
                Error::rlp(context, format!("expected object, got {}", value.type_name()))
            })?;
            fields
                .iter()
                .map(|field| {
                    let context = format!("{context}.{}", field.name);
                    let value = object.get(field.name).unwrap_or(&Value::Null);
                    pack(&field.kind, value, &context)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RlpItem::List)
        },
        Kind::ArrayOf(item_kind) => {
            let items = value.as_list().ok_or_else(|| {
                Error::rlp(context, format!("expected list, got {}", value.type_name()))
            })?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| pack(item_kind, item, &format!("{context}.#{index}")))
                .collect::<Result<Vec<_>, _>>()
                .map(RlpItem::List)
        },
        scalar => scalar.encode(value, context).map(RlpItem::Data),
    }
}

fn unpack(kind: &Kind, item: &RlpItem, context: &str) -> Result<Value, Error> {
    match (kind, item) {
        (Kind::Struct(fields), RlpItem::List(items)) => {
            if items.len() != fields.len() {
                return Err(Error::rlp(
                    context,
                    format!("expected {} items, but got {}", fields.len(), items.len()),
                ));
            }
            let mut object = Object::new();
            for (field, item) in fields.iter().zip(items) {
                let value = unpack(&field.kind, item, &format!("{context}.{}", field.name))?;
                object.insert(field.name, value);
            }
            Ok(Value::Object(object))
        },
        (Kind::ArrayOf(item_kind), RlpItem::List(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| unpack(item_kind, item, &format!("{context}.#{index}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (Kind::Struct(_) | Kind::ArrayOf(_), RlpItem::Data(_)) => {
            Err(Error::rlp(context, "expected a list"))
        },
        (_, RlpItem::List(_)) => Err(Error::rlp(context, "expected a string, got a list")),
        (scalar, RlpItem::Data(data)) => scalar.decode(data, context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hex;
    use hex_literal::hex;
    use primitive_types::U256;

    fn profile() -> Profile {
        Profile::with_fields(
            "item",
            vec![
                Field::new("id", Kind::Numeric(1)),
                Field::new(
                    "parts",
                    Kind::array_of(Kind::Struct(vec![
                        Field::new("owner", Kind::OptionalFixedHexBlob(2)),
                        Field::new("amount", Kind::Numeric(32)),
                    ])),
                ),
                Field::new("tags", Kind::array_of(Kind::Buffer)),
            ],
        )
    }

    fn part(owner: Option<[u8; 2]>, amount: u64) -> Value {
        Object::new()
            .with("owner", owner.map(Hex::of_bytes))
            .with("amount", U256::from(amount))
            .into()
    }

    #[test]
    fn encodes_nested_profiles() {
        let object: Value = Object::new()
            .with("id", 1u8)
            .with("parts", vec![part(Some([0xab, 0xcd]), 0x80), part(None, 0)])
            .with("tags", vec![Value::Bytes(Bytes::from_static(&[0x02]))])
            .into();

        let profiler = RlpProfiler::of_object(&object, &profile()).unwrap();
        let expected = hex!("cd01c9c582abcd8180c28000c102");
        assert_eq!(profiler.encoded(), &expected.to_vec());

        let decoded = RlpProfiler::of_object_encoded(&expected, &profile()).unwrap();
        assert_eq!(decoded.object(), &object);
    }

    #[test]
    fn errors_carry_the_field_path() {
        let object: Value = Object::new()
            .with("id", 1u8)
            .with("parts", vec![part(None, 0), part(Some([0xab, 0xcd]), 0)])
            .with("tags", Vec::<Value>::new())
            .into();
        let mut bad = object.as_object().cloned().unwrap();
        bad.insert("parts", vec![part(None, 0), Object::new().with("owner", Hex::of_bytes([1])).into()]);
        assert_eq!(
            RlpProfiler::of_object(&bad.into(), &profile()).unwrap_err(),
            Error::rlp("item.parts.#1.owner", "expected 2 bytes, got 1")
        );

        // second part carries a two byte amount with a leading zero
        let encoded = hex!("cb01c8c28000c480820001c0");
        assert_eq!(
            RlpProfiler::of_object_encoded(&encoded, &profile()).unwrap_err(),
            Error::rlp("item.parts.#1.amount", "number must not have leading zero bytes")
        );
    }

    #[test]
    fn rejects_wrong_arity_and_shape() {
        assert_eq!(
            RlpProfiler::of_object_encoded(&hex!("c201c0"), &profile()).unwrap_err(),
            Error::rlp("item", "expected 3 items, but got 2")
        );
        assert_eq!(
            RlpProfiler::of_object_encoded(&hex!("c30101c0"), &profile()).unwrap_err(),
            Error::rlp("item.parts", "expected a list")
        );
        assert_eq!(
            RlpProfiler::of_object_encoded(&hex!("c4c0c0c0c0"), &profile()).unwrap_err(),
            Error::rlp("item", "expected 3 items, but got 4")
        );
        assert_eq!(
            RlpProfiler::of_object_encoded(&hex!("c3c0c0c0"), &profile()).unwrap_err(),
            Error::rlp("item.id", "expected a string, got a list")
        );
        assert!(matches!(
            RlpProfiler::of_object_encoded(&hex!("c301c0c000"), &profile()),
            Err(Error::InvalidRlp { .. })
        ));
    }
}
