//! Contains [PayloadLengths], the dry pass of the two-pass encoder.

use crate::{
    rlp::{header_len, string_len, u256_len, u64_len},
    TxStarknet,
};
use alloy_rlp::Encodable;

/// Byte length of an address.
pub(crate) const ADDRESS_LEN: usize = 20;

/// Encoded length of a present recipient: the `0x94` header plus the address bytes.
pub(crate) const RECIPIENT_LEN: usize = 1 + ADDRESS_LEN;

/// The exact encoded lengths of a [TxStarknet]'s fields.
///
/// The outer list header has to declare the payload length up front, so the encoder measures
/// the record with [PayloadLengths::new] before writing a single byte. All lengths include the
/// field's own header, except `access_list_payload_len` which covers only the list items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadLengths {
    /// Encoded length of the nonce.
    pub nonce_len: usize,
    /// Encoded length of the gas limit.
    pub gas_len: usize,
    /// Encoded length of the call data.
    pub data_len: usize,
    /// Length of the access list items, without the list header.
    pub access_list_payload_len: usize,
    /// Length of the whole field list, without the outer list header.
    pub payload_len: usize,
}

impl PayloadLengths {
    /// Measures `tx`.
    pub fn new(tx: &TxStarknet) -> Self {
        let nonce_len = u64_len(tx.nonce);
        let gas_len = u64_len(tx.gas);
        let data_len = string_len(&tx.data);
        let access_list_payload_len = tx.access_list.0.iter().map(Encodable::length).sum::<usize>();

        let payload_len = u256_len(&tx.chain_id) +
            nonce_len +
            u256_len(&tx.tip) +
            u256_len(&tx.fee_cap) +
            gas_len +
            tx.to.map_or(1, |_| RECIPIENT_LEN) +
            u256_len(&tx.value) +
            data_len +
            header_len(access_list_payload_len) +
            access_list_payload_len +
            u256_len(&tx.v) +
            u256_len(&tx.r) +
            u256_len(&tx.s);

        Self { nonce_len, gas_len, data_len, access_list_payload_len, payload_len }
    }

    /// Returns the length of the RLP list form: outer header plus payload.
    pub const fn list_len(&self) -> usize {
        header_len(self.payload_len) + self.payload_len
    }

    /// Returns the length of the typed form: discriminator, outer header and payload.
    pub const fn encoded_2718_len(&self) -> usize {
        1 + self.list_len()
    }
}

impl TxStarknet {
    /// Returns the number of bytes [TxStarknet::encode_2718] writes.
    pub fn encode_2718_len(&self) -> usize {
        PayloadLengths::new(self).encoded_2718_len()
    }
}
