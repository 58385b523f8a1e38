//! The field encoder: writes a measured [TxStarknet] into an [RlpSink].

use crate::{
    rlp::{header_len, put_header, put_string, put_u256, put_u64},
    size::{ADDRESS_LEN, RECIPIENT_LEN},
    BufSink, PayloadLengths, RlpSink, TxStarknet, STARKNET_TX_TYPE,
};
use alloc::vec::Vec;
use alloy_eips::eip2930::AccessListItem;
use alloy_rlp::{BufMut, Encodable, EMPTY_STRING_CODE};

/// The header of a present address, a 20 byte string.
const RECIPIENT_HEADER: u8 = EMPTY_STRING_CODE + ADDRESS_LEN as u8;

/// Encoded length of a storage key: header plus 32 bytes.
const STORAGE_KEY_LEN: usize = 33;

/// The header of a storage key, a 32 byte string.
const STORAGE_KEY_HEADER: u8 = EMPTY_STRING_CODE + 32;

impl TxStarknet {
    /// Writes the outer list header and every field, in wire order.
    ///
    /// `lengths` must have been computed from `self`. Stops at the sink's first error.
    pub(crate) fn encode_fields<S: RlpSink + ?Sized>(
        &self,
        lengths: &PayloadLengths,
        out: &mut S,
    ) -> Result<(), S::Error> {
        put_header(out, true, lengths.payload_len)?;

        put_u256(out, &self.chain_id)?;
        put_u64(out, self.nonce)?;
        put_u256(out, &self.tip)?;
        put_u256(out, &self.fee_cap)?;
        put_u64(out, self.gas)?;
        match &self.to {
            Some(to) => {
                out.put(&[RECIPIENT_HEADER])?;
                out.put(to.as_slice())?;
            }
            None => out.put(&[EMPTY_STRING_CODE])?,
        }
        put_u256(out, &self.value)?;
        put_string(out, &self.data)?;

        put_header(out, true, lengths.access_list_payload_len)?;
        for item in &self.access_list.0 {
            put_access_list_item(out, item)?;
        }

        put_u256(out, &self.v)?;
        put_u256(out, &self.r)?;
        put_u256(out, &self.s)
    }

    /// Writes the discriminator followed by the list form into `out`.
    pub(crate) fn encode_typed<S: RlpSink + ?Sized>(&self, out: &mut S) -> Result<(), S::Error> {
        let lengths = PayloadLengths::new(self);
        out.put(&[STARKNET_TX_TYPE])?;
        self.encode_fields(&lengths, out)
    }

    /// Encodes the transaction in its typed wire form: `0x03 || rlp([fields...])`.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        self.encode_typed(&mut BufSink(out)).unwrap_or_else(|never| match never {})
    }

    /// Encodes the transaction in its typed wire form into a new, exactly sized buffer.
    pub fn encode_2718_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encode_2718_len());
        self.encode_2718(&mut buf);
        buf
    }

    /// Streams the typed wire form into `writer` without buffering the record.
    ///
    /// The first write error is returned unchanged. Bytes written before the failure stay in
    /// the writer; the caller must discard the partial output.
    #[cfg(feature = "std")]
    pub fn write_2718<W: std::io::Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        self.encode_typed(&mut crate::IoSink(writer))
    }
}

/// Writes `item` as `[address, [storage_key, ...]]`, the same bytes as its [Encodable] impl.
fn put_access_list_item<S: RlpSink + ?Sized>(
    out: &mut S,
    item: &AccessListItem,
) -> Result<(), S::Error> {
    let keys_payload_len = item.storage_keys.len() * STORAGE_KEY_LEN;
    let payload_len = RECIPIENT_LEN + header_len(keys_payload_len) + keys_payload_len;

    put_header(out, true, payload_len)?;
    out.put(&[RECIPIENT_HEADER])?;
    out.put(item.address.as_slice())?;
    put_header(out, true, keys_payload_len)?;
    for key in &item.storage_keys {
        out.put(&[STORAGE_KEY_HEADER])?;
        out.put(key.as_slice())?;
    }
    Ok(())
}

impl Encodable for TxStarknet {
    /// Encodes the untyped list form, without the discriminator.
    fn encode(&self, out: &mut dyn BufMut) {
        let lengths = PayloadLengths::new(self);
        self.encode_fields(&lengths, &mut BufSink(out)).unwrap_or_else(|never| match never {})
    }

    fn length(&self) -> usize {
        PayloadLengths::new(self).list_len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::{sample_tx, scenario_tx, tx_strategy};
    use alloy_eips::eip2930::AccessList;
    use alloy_primitives::{address, b256, hex, Address, Bytes, B256, U256};
    use proptest::prelude::*;
    use std::io;

    const SCENARIO_RLP: [u8; 36] = hex!(
        "03e2010501028252089400000000000000000000000000000000000000008080c0808080"
    );

    #[test]
    fn test_encode_scenario() {
        let encoded = scenario_tx().encode_2718_vec();
        assert_eq!(encoded, SCENARIO_RLP);
        assert_eq!(encoded[0], STARKNET_TX_TYPE);
        // Short-form list header over a 34 byte payload.
        assert_eq!(encoded[1], 0xc0 + 34);
    }

    #[test]
    fn test_encode_contract_creation() {
        let tx = TxStarknet { to: None, ..scenario_tx() };
        let encoded = tx.encode_2718_vec();
        assert_eq!(encoded, hex!("03ce01050102825208808080c0808080"));
    }

    #[test]
    fn test_encode_single_byte_data_short_circuit() {
        let low = TxStarknet { data: Bytes::from_static(&[0x2a]), ..scenario_tx() };
        let encoded = low.encode_2718_vec();
        // The empty value sits at offset 30, data follows it.
        assert_eq!(&encoded[30..32], &hex!("802a"));

        let high = TxStarknet { data: Bytes::from_static(&[0xaa]), ..scenario_tx() };
        let encoded = high.encode_2718_vec();
        assert_eq!(&encoded[30..33], &hex!("8081aa"));
    }

    #[test]
    fn test_encode_long_payload_header() {
        let tx = TxStarknet { data: Bytes::from(vec![0x11; 60]), ..scenario_tx() };
        let encoded = tx.encode_2718_vec();
        // 34 - 1 (empty data) + 2 (long data header) + 60 = 95 payload bytes.
        assert_eq!(&encoded[..3], &hex!("03f85f"));
        assert_eq!(encoded.len(), 3 + 95);
    }

    #[test]
    fn test_encode_access_list_delegates() {
        let access_list = AccessList(vec![AccessListItem {
            address: address!("00000000000000000000000000000000000000aa"),
            storage_keys: vec![b256!(
                "0000000000000000000000000000000000000000000000000000000000000001"
            )],
        }]);
        let tx = TxStarknet { access_list: access_list.clone(), ..scenario_tx() };
        let encoded = tx.encode_2718_vec();

        let mut expected_list = Vec::new();
        access_list.encode(&mut expected_list);
        // Discriminator, two byte list header, then 30 bytes of fields before the access list.
        let start = 3 + 30;
        assert_eq!(&encoded[start..start + expected_list.len()], expected_list.as_slice());
    }

    #[test]
    fn test_access_list_items_match_alloy() {
        let key = b256!("00000000000000000000000000000000000000000000000000000000000000ff");
        for keys in [0, 1, 2, 7] {
            let item = AccessListItem {
                address: address!("00000000000000000000000000000000000000aa"),
                storage_keys: vec![key; keys],
            };
            let mut ours = Vec::new();
            put_access_list_item(&mut BufSink(&mut ours), &item).unwrap();
            assert_eq!(ours, alloy_rlp::encode(&item), "{keys} keys");
            assert_eq!(ours.len(), item.length());
        }
    }

    #[test]
    fn test_access_list_items_stream_without_buffering() {
        /// Records the size of every write.
        struct Writes(Vec<usize>);

        impl RlpSink for Writes {
            type Error = core::convert::Infallible;

            fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
                self.0.push(bytes.len());
                Ok(())
            }
        }

        let item = AccessListItem {
            address: Address::ZERO,
            storage_keys: vec![B256::ZERO; 4],
        };
        let mut writes = Writes(Vec::new());
        put_access_list_item(&mut writes, &item).unwrap();
        // No write spans more than one key or address.
        assert!(writes.0.iter().all(|len| *len <= 32), "{:?}", writes.0);
    }

    #[test]
    fn test_list_form_matches_typed_form() {
        let tx = sample_tx();
        let mut list = Vec::new();
        tx.encode(&mut list);
        assert_eq!(list.len(), tx.length());
        assert_eq!(&tx.encode_2718_vec()[1..], list.as_slice());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_write_2718_matches_buffer() {
        let tx = sample_tx();
        let mut written = Vec::new();
        tx.write_2718(&mut written).unwrap();
        assert_eq!(written, tx.encode_2718_vec());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_write_2718_fails_fast() {
        struct FailAfter(usize);

        impl io::Write for FailAfter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if buf.len() > self.0 {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
                }
                self.0 -= buf.len();
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = FailAfter(4);
        let err = sample_tx().write_2718(&mut writer).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_encode_large_signature_values() {
        let tx = TxStarknet {
            v: U256::from(1),
            r: U256::from_be_bytes([0xff; 32]),
            s: U256::from(0x80),
            ..scenario_tx()
        };
        let encoded = tx.encode_2718_vec();
        let tail = &encoded[encoded.len() - 36..];
        assert_eq!(tail[0], 0x01);
        assert_eq!(tail[1], 0xa0);
        assert_eq!(&tail[2..34], &[0xff; 32]);
        assert_eq!(&tail[34..], &hex!("8180"));
    }

    proptest! {
        #[test]
        fn test_list_form_agrees_with_alloy_header(tx in tx_strategy()) {
            let mut list = Vec::new();
            tx.encode(&mut list);
            let mut slice = list.as_slice();
            let header = alloy_rlp::Header::decode(&mut slice).unwrap();
            prop_assert!(header.list);
            prop_assert_eq!(header.payload_length, slice.len());
            prop_assert_eq!(header.payload_length, PayloadLengths::new(&tx).payload_len);
        }
    }
}
