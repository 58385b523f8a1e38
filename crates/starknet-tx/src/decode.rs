//! The streaming field decoder for [TxStarknet].

use crate::{
    size::ADDRESS_LEN, HashCache, TxError, TxField, TxResult, TxStarknet, STARKNET_TX_TYPE,
};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::{Decodable, Header};
use tracing::trace;

/// The maximum byte length of a decoded big-integer field.
const MAX_UINT_LEN: usize = 32;

impl TxStarknet {
    /// Decodes a typed transaction: the `0x03` discriminator followed by the field list.
    ///
    /// `buf` is only advanced on success.
    pub fn decode_2718(buf: &mut &[u8]) -> TxResult<Self> {
        let (&ty, mut rest) = buf.split_first().ok_or(TxError::EmptyInput)?;
        if ty != STARKNET_TX_TYPE {
            return Err(TxError::UnexpectedType(ty));
        }
        let tx = Self::decode_fields(&mut rest)?;
        *buf = rest;
        Ok(tx)
    }

    /// Decodes the field list of a transaction whose discriminator was already consumed.
    ///
    /// On success `buf` is advanced past the list. On failure `buf` is left untouched and the
    /// error names the field that failed.
    pub fn decode_fields(buf: &mut &[u8]) -> TxResult<Self> {
        let mut cursor = *buf;
        let header = Header::decode(&mut cursor).map_err(TxError::Header)?;
        if !header.list {
            return Err(TxError::MalformedStructure("expected a list"));
        }
        if header.payload_length > cursor.len() {
            return Err(TxError::MalformedStructure("list payload exceeds input"));
        }

        let (mut payload, rest) = cursor.split_at(header.payload_length);
        let tx = Self::decode_payload(&mut payload).inspect_err(|err| {
            trace!(target: "tx_codec", "Failed to decode starknet transaction: {err}");
        })?;
        if !payload.is_empty() {
            return Err(TxError::MalformedStructure("trailing bytes in list payload"));
        }

        *buf = rest;
        Ok(tx)
    }

    /// Decodes the fields in wire order from the list payload.
    fn decode_payload(buf: &mut &[u8]) -> TxResult<Self> {
        Ok(Self {
            chain_id: decode_uint(buf, TxField::ChainId)?,
            nonce: decode_u64(buf, TxField::Nonce)?,
            tip: decode_uint(buf, TxField::Tip)?,
            fee_cap: decode_uint(buf, TxField::FeeCap)?,
            gas: decode_u64(buf, TxField::Gas)?,
            to: decode_recipient(buf)?,
            value: decode_uint(buf, TxField::Value)?,
            data: Bytes::copy_from_slice(decode_string(buf, TxField::Data)?),
            access_list: AccessList::decode(buf)
                .map_err(|error| TxError::Field { field: TxField::AccessList, error })?,
            v: decode_uint(buf, TxField::V)?,
            r: decode_uint(buf, TxField::R)?,
            s: decode_uint(buf, TxField::S)?,
            creation_time: 0,
            cached_hash: HashCache::default(),
        })
    }
}

impl Decodable for TxStarknet {
    /// Decodes the untyped list form.
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::decode_fields(buf).map_err(Into::into)
    }
}

/// Reads a byte string item.
fn decode_string<'a>(buf: &mut &'a [u8], field: TxField) -> TxResult<&'a [u8]> {
    Header::decode_bytes(buf, false).map_err(|error| TxError::Field { field, error })
}

/// Reads a big-integer field of at most 32 bytes. Leading zero bytes are accepted.
fn decode_uint(buf: &mut &[u8], field: TxField) -> TxResult<U256> {
    let bytes = decode_string(buf, field)?;
    if bytes.len() > MAX_UINT_LEN {
        return Err(TxError::FieldSizeViolation { field, len: bytes.len() });
    }
    Ok(U256::from_be_slice(bytes))
}

/// Reads a canonical `u64` field.
fn decode_u64(buf: &mut &[u8], field: TxField) -> TxResult<u64> {
    u64::decode(buf).map_err(|error| TxError::Field { field, error })
}

/// Reads the recipient: empty for a contract creation, otherwise exactly 20 bytes.
fn decode_recipient(buf: &mut &[u8]) -> TxResult<Option<Address>> {
    match decode_string(buf, TxField::To)? {
        [] => Ok(None),
        bytes if bytes.len() == ADDRESS_LEN => Ok(Some(Address::from_slice(bytes))),
        bytes => Err(TxError::FieldSizeViolation { field: TxField::To, len: bytes.len() }),
    }
}
