//! Storage traits consumed by the readers in this crate.

use alloy_consensus::Header;
use alloy_primitives::{Bytes, B256, U256};
use core::fmt::Display;

/// Serves raw transaction records keyed by their sequential ID.
pub trait RawTransactionProvider {
    /// The store's error type.
    type Error: Display;

    /// Returns the typed wire form of the transaction with `id`, or `None` if there is none.
    fn raw_transaction(&self, id: u64) -> Result<Option<Bytes>, Self::Error>;
}

/// Serves headers, block bodies and chain metadata.
///
/// Block bodies reference their transactions by ID, so a chain store also serves the raw
/// transaction records.
pub trait ChainStore: RawTransactionProvider {
    /// Returns the hash of the current head header.
    fn head_header_hash(&self) -> Result<Option<B256>, Self::Error>;

    /// Returns the number of the header with `hash`.
    fn header_number(&self, hash: B256) -> Result<Option<u64>, Self::Error>;

    /// Returns the header with `hash` at `number`.
    fn header(&self, hash: B256, number: u64) -> Result<Option<Header>, Self::Error>;

    /// Returns the RLP encoded [BodyForStorage] of the block with `hash` at `number`.
    ///
    /// [BodyForStorage]: crate::BodyForStorage
    fn raw_body(&self, hash: B256, number: u64) -> Result<Option<Bytes>, Self::Error>;

    /// Returns the canonical block hash at `number`.
    fn canonical_hash(&self, number: u64) -> Result<Option<B256>, Self::Error>;

    /// Returns the total difficulty of the chain up to the block with `hash` at `number`.
    fn total_difficulty(&self, hash: B256, number: u64) -> Result<Option<U256>, Self::Error>;

    /// Returns `true` if the body of the block with `hash` at `number` is stored.
    fn has_block(&self, hash: B256, number: u64) -> Result<bool, Self::Error>;
}
