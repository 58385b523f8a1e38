//! Canonical integer and length-prefix primitives.
//!
//! Every helper comes as a pair: a `*_len` function that reports the exact number of bytes the
//! matching `put_*` function writes. The size calculator and the field encoder are built on
//! these pairs, so a length mismatch can only come from the callers disagreeing on field order.

use crate::RlpSink;
use alloy_primitives::U256;
use alloy_rlp::{EMPTY_LIST_CODE, EMPTY_STRING_CODE};

/// Payloads shorter than this are prefixed with a single header byte.
const SHORT_PAYLOAD_LIMIT: usize = 56;

/// Offset between a short-form code and its long-form counterpart.
const LONG_FORM_OFFSET: u8 = 55;

/// Returns `be` without its leading zero bytes.
pub const fn trim_leading_zeros(mut be: &[u8]) -> &[u8] {
    while let [0, rest @ ..] = be {
        be = rest;
    }
    be
}

/// Returns the length of the header that prefixes a payload of `payload_length` bytes.
pub const fn header_len(payload_length: usize) -> usize {
    alloy_rlp::length_of_length(payload_length)
}

/// Writes a string (`list = false`) or list (`list = true`) header for a payload of
/// `payload_length` bytes.
pub fn put_header<S: RlpSink + ?Sized>(
    out: &mut S,
    list: bool,
    payload_length: usize,
) -> Result<(), S::Error> {
    let code = if list { EMPTY_LIST_CODE } else { EMPTY_STRING_CODE };
    if payload_length < SHORT_PAYLOAD_LIMIT {
        return out.put(&[code + payload_length as u8]);
    }

    let be = payload_length.to_be_bytes();
    let len = trim_leading_zeros(&be);
    let mut header = [0u8; 1 + core::mem::size_of::<usize>()];
    header[0] = code + LONG_FORM_OFFSET + len.len() as u8;
    header[1..=len.len()].copy_from_slice(len);
    out.put(&header[..=len.len()])
}

/// Returns the encoded length of the byte string `bytes`, header included.
pub const fn string_len(bytes: &[u8]) -> usize {
    match bytes {
        [b] if *b < EMPTY_STRING_CODE => 1,
        _ => header_len(bytes.len()) + bytes.len(),
    }
}

/// Writes `bytes` as a byte string. A single byte below `0x80` is its own encoding.
pub fn put_string<S: RlpSink + ?Sized>(out: &mut S, bytes: &[u8]) -> Result<(), S::Error> {
    match bytes {
        [b] if *b < EMPTY_STRING_CODE => out.put(&[*b]),
        _ => {
            put_header(out, false, bytes.len())?;
            out.put(bytes)
        }
    }
}

/// Returns the canonical encoded length of the big-endian unsigned integer `be`.
pub const fn uint_len(be: &[u8]) -> usize {
    string_len(trim_leading_zeros(be))
}

/// Writes the big-endian unsigned integer `be` in canonical form: no leading zero bytes, zero
/// as the empty string, `1..=0x7f` as a single byte.
pub fn put_uint<S: RlpSink + ?Sized>(out: &mut S, be: &[u8]) -> Result<(), S::Error> {
    put_string(out, trim_leading_zeros(be))
}

/// Returns the canonical encoded length of `value`.
pub const fn u64_len(value: u64) -> usize {
    uint_len(&value.to_be_bytes())
}

/// Writes `value` in canonical form.
pub fn put_u64<S: RlpSink + ?Sized>(out: &mut S, value: u64) -> Result<(), S::Error> {
    put_uint(out, &value.to_be_bytes())
}

/// Returns the canonical encoded length of `value`.
pub fn u256_len(value: &U256) -> usize {
    uint_len(&value.to_be_bytes::<32>())
}

/// Writes `value` in canonical form.
pub fn put_u256<S: RlpSink + ?Sized>(out: &mut S, value: &U256) -> Result<(), S::Error> {
    put_uint(out, &value.to_be_bytes::<32>())
}
