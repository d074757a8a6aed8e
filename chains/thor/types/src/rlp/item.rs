use rlp::{DecoderError, Rlp, RlpStream};

use crate::Bytes;

/// Model agnostic RLP tree: a byte string or a list of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RlpItem {
    Data(Bytes),
    List(Vec<RlpItem>),
}

impl RlpItem {
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut stream = RlpStream::new();
        self.append_to(&mut stream);
        stream.out().freeze().into()
    }

    fn append_to(&self, stream: &mut RlpStream) {
        match self {
            Self::Data(data) => {
                let data: &[u8] = data;
                stream.append(&data);
            },
            Self::List(items) => {
                stream.begin_list(items.len());
                for item in items {
                    item.append_to(stream);
                }
            },
        }
    }

    /// Parses exactly one RLP item spanning the whole of `encoded`.
    ///
    /// # Errors
    /// Returns a [`DecoderError`] for truncated input, trailing bytes, or
    /// non-canonical length prefixes.
    pub fn decode(encoded: &[u8]) -> Result<Self, DecoderError> {
        let rlp = Rlp::new(encoded);
        if rlp.payload_info()?.total() != encoded.len() {
            return Err(DecoderError::RlpInconsistentLengthAndData);
        }
        Self::decode_item(&rlp)
    }

    fn decode_item(rlp: &Rlp) -> Result<Self, DecoderError> {
        if rlp.is_list() {
            let count = rlp.item_count()?;
            let mut items = Vec::with_capacity(count);
            let mut consumed = 0;
            for index in 0..count {
                let item = rlp.at(index)?;
                consumed += item.as_raw().len();
                items.push(Self::decode_item(&item)?);
            }
            // item_count stops silently at the first malformed item
            if consumed != rlp.payload_info()?.value_len {
                return Err(DecoderError::RlpInconsistentLengthAndData);
            }
            return Ok(Self::List(items));
        }
        let raw = rlp.as_raw();
        if let [0x81, byte] = raw {
            if *byte < 0x80 {
                return Err(DecoderError::RlpInvalidIndirection);
            }
        }
        Ok(Self::Data(Bytes::copy_from_slice(rlp.data()?)))
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            Self::Data(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn encode_nested_lists() {
        let item = RlpItem::List(vec![
            RlpItem::Data(Bytes::from_static(&[0x01])),
            RlpItem::List(vec![RlpItem::Data(Bytes::from_static(&[0x02]))]),
            RlpItem::Data(Bytes::new()),
            RlpItem::List(Vec::new()),
        ]);
        let encoded = item.encode();
        assert_eq!(encoded, hex!("c501c10280c0").to_vec());
        assert_eq!(RlpItem::decode(&encoded).unwrap(), item);
    }

    #[test]
    fn single_bytes_are_self_encoded() {
        assert_eq!(RlpItem::Data(Bytes::from_static(&[0x00])).encode(), vec![0x00_u8]);
        assert_eq!(RlpItem::Data(Bytes::from_static(&[0x7f])).encode(), vec![0x7f_u8]);
        assert_eq!(RlpItem::Data(Bytes::from_static(&[0x80])).encode(), vec![0x81_u8, 0x80]);
    }

    #[test]
    fn rejects_malformed_input() {
        // empty input
        assert!(RlpItem::decode(&[]).is_err());
        // trailing byte after a complete item
        assert!(RlpItem::decode(&hex!("c10102")).is_err());
        // list claims more bytes than available
        assert!(RlpItem::decode(&hex!("c30102")).is_err());
        // nested item overruns its parent list
        assert!(RlpItem::decode(&hex!("c2820102")).is_err());
        // single byte below 0x80 wrapped in a string header
        assert!(RlpItem::decode(&hex!("8105")).is_err());
        assert!(RlpItem::decode(&hex!("c28105")).is_err());
    }
}
