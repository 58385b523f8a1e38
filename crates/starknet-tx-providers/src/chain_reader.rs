//! Contains the [ChainReader], a read-through view of a [ChainStore].

use crate::{read_body_with_transactions, Block, ChainStore};
use alloy_consensus::Header;
use alloy_primitives::{B256, U256};
use tracing::error;

/// Serves chain headers, blocks and metadata from a [ChainStore], alongside the chain
/// configuration `C` the caller reads it under.
///
/// Lookups return `None` both for missing entries and for store failures. Failures are logged.
#[derive(Debug, Clone)]
pub struct ChainReader<C, S> {
    config: C,
    store: S,
}

impl<C, S: ChainStore> ChainReader<C, S> {
    /// Creates a new [ChainReader] over `store`.
    pub const fn new(config: C, store: S) -> Self {
        Self { config, store }
    }

    /// Returns the chain configuration.
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Returns a reference to the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current head header.
    pub fn current_header(&self) -> Option<Header> {
        let hash = self.read("head header hash", self.store.head_header_hash())??;
        self.header_by_hash(hash)
    }

    /// Returns the header with `hash` at `number`.
    pub fn header(&self, hash: B256, number: u64) -> Option<Header> {
        self.read("header", self.store.header(hash, number))?
    }

    /// Returns the canonical header at `number`.
    pub fn header_by_number(&self, number: u64) -> Option<Header> {
        let hash = self.read("canonical hash", self.store.canonical_hash(number))??;
        self.header(hash, number)
    }

    /// Returns the header with `hash`.
    pub fn header_by_hash(&self, hash: B256) -> Option<Header> {
        let number = self.read("header number", self.store.header_number(hash))??;
        self.header(hash, number)
    }

    /// Returns the block with `hash` at `number`, with its transactions.
    ///
    /// Returns `None` if either the header or the body is missing or cannot be read.
    pub fn block(&self, hash: B256, number: u64) -> Option<Block> {
        let header = self.header(hash, number)?;
        let body = read_body_with_transactions(&self.store, hash, number)?;
        Some(Block { header, body })
    }

    /// Returns `true` if the block with `hash` at `number` is stored.
    pub fn has_block(&self, hash: B256, number: u64) -> bool {
        self.read("block presence", self.store.has_block(hash, number)).unwrap_or_default()
    }

    /// Returns the total difficulty of the chain up to the block with `hash` at `number`.
    pub fn total_difficulty(&self, hash: B256, number: u64) -> Option<U256> {
        self.read("total difficulty", self.store.total_difficulty(hash, number))?
    }

    fn read<T>(&self, what: &str, result: Result<T, S::Error>) -> Option<T> {
        result
            .inspect_err(|err| error!(target: "chain_reader", "Failed to read {what}: {err}"))
            .ok()
    }
}
