//! Block bodies as stored, and the readers that resolve their transactions.

use crate::{canonical_transactions, ChainStore};
use alloc::vec::Vec;
use alloy_consensus::Header;
use alloy_primitives::B256;
use alloy_rlp::{RlpDecodable, RlpEncodable};
use starknet_tx::TypedTransaction;
use tracing::error;

/// A block body as it is stored: the transactions are referenced by a run of IDs instead of
/// being stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct BodyForStorage {
    /// The ID of the block's first transaction.
    pub base_tx_id: u64,
    /// The number of transactions in the block.
    pub tx_amount: u32,
    /// The block's uncle headers.
    pub uncles: Vec<Header>,
}

/// A block body with its transactions resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    /// The block's transactions, in order.
    pub transactions: Vec<TypedTransaction>,
    /// The block's uncle headers.
    pub uncles: Vec<Header>,
}

/// A header and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block header.
    pub header: Header,
    /// The block body.
    pub body: Body,
}

/// Reads the stored body of the block with `hash` at `number`.
///
/// Returns `None` for a missing body. Store failures and undecodable bodies are logged and
/// also read as `None`.
pub fn read_body<S: ChainStore>(store: &S, hash: B256, number: u64) -> Option<BodyForStorage> {
    let raw = match store.raw_body(hash, number) {
        Ok(raw) => raw?,
        Err(err) => {
            error!(target: "block_body", "Failed to read body of block {number} ({hash}): {err}");
            return None;
        }
    };
    if raw.is_empty() {
        return None;
    }

    alloy_rlp::decode_exact(&raw)
        .inspect_err(|err| {
            error!(target: "block_body", "Invalid body of block {number} ({hash}): {err}");
        })
        .ok()
}

/// Reads the body of the block with `hash` at `number` along with its transactions.
///
/// Returns `None` if the body is missing or invalid, or if its transactions cannot be read.
pub fn read_body_with_transactions<S: ChainStore>(
    store: &S,
    hash: B256,
    number: u64,
) -> Option<Body> {
    let BodyForStorage { base_tx_id, tx_amount, uncles } = read_body(store, hash, number)?;
    let transactions = canonical_transactions(store, base_tx_id, tx_amount)
        .inspect_err(|err| {
            error!(
                target: "block_body",
                "Failed to read transactions of block {number} ({hash}): {err}"
            );
        })
        .ok()?;
    Some(Body { transactions, uncles })
}
