//! In-memory implementations of the storage traits for testing.

use crate::{BodyForStorage, ChainStore, RawTransactionProvider};
use alloc::{collections::BTreeMap, string::String};
use alloy_consensus::Header;
use alloy_primitives::{Bytes, B256, U256};
use starknet_tx::TxStarknet;
use thiserror::Error;

/// The error returned by a store configured to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// An in-memory [RawTransactionProvider].
#[derive(Debug, Clone, Default)]
pub struct MemoryTxStore {
    /// Raw transaction records by ID.
    pub records: BTreeMap<u64, Bytes>,
    /// If set, every read fails with this error.
    pub failure: Option<StoreError>,
}

impl MemoryTxStore {
    /// Stores the typed wire form of `tx` under `id`.
    pub fn insert_tx(&mut self, id: u64, tx: &TxStarknet) {
        self.records.insert(id, tx.encode_2718_vec().into());
    }

    /// Stores `raw` under `id` as is.
    pub fn insert_raw(&mut self, id: u64, raw: Bytes) {
        self.records.insert(id, raw);
    }

    /// Makes every subsequent read fail with `err`.
    pub fn with_failure(mut self, err: StoreError) -> Self {
        self.failure = Some(err);
        self
    }
}

impl RawTransactionProvider for MemoryTxStore {
    type Error = StoreError;

    fn raw_transaction(&self, id: u64) -> Result<Option<Bytes>, Self::Error> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.records.get(&id).cloned())
    }
}

/// An in-memory [ChainStore].
#[derive(Debug, Clone, Default)]
pub struct MemoryChainStore {
    /// Headers by hash and number.
    pub headers: BTreeMap<(B256, u64), Header>,
    /// Header numbers by hash.
    pub numbers: BTreeMap<B256, u64>,
    /// Canonical hashes by number.
    pub canonical: BTreeMap<u64, B256>,
    /// Total difficulties by hash and number.
    pub total_difficulties: BTreeMap<(B256, u64), U256>,
    /// RLP encoded bodies by hash and number.
    pub bodies: BTreeMap<(B256, u64), Bytes>,
    /// The transactions referenced by the stored bodies.
    pub transactions: MemoryTxStore,
    /// The head header hash.
    pub head: Option<B256>,
    /// If set, every read fails with this error.
    pub failure: Option<StoreError>,
}

impl MemoryChainStore {
    /// Inserts a header without a body or canonical mapping.
    pub fn insert_header(&mut self, header: Header) {
        let hash = header.hash_slow();
        self.numbers.insert(hash, header.number);
        self.headers.insert((hash, header.number), header);
    }

    /// Stores `body` for the block with `hash` at `number`.
    pub fn insert_body(&mut self, hash: B256, number: u64, body: &BodyForStorage) {
        self.bodies.insert((hash, number), alloy_rlp::encode(body).into());
    }

    /// Inserts a header with an empty body and its total difficulty, makes it canonical at its
    /// number and moves the head to it.
    pub fn insert_canonical(&mut self, header: Header, total_difficulty: U256) {
        let hash = header.hash_slow();
        let number = header.number;
        self.insert_header(header);
        self.canonical.insert(number, hash);
        self.total_difficulties.insert((hash, number), total_difficulty);
        self.insert_body(hash, number, &BodyForStorage::default());
        self.head = Some(hash);
    }

    /// Makes every subsequent read fail with `err`.
    pub fn with_failure(mut self, err: StoreError) -> Self {
        self.failure = Some(err);
        self
    }

    fn check(&self) -> Result<(), StoreError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

impl RawTransactionProvider for MemoryChainStore {
    type Error = StoreError;

    fn raw_transaction(&self, id: u64) -> Result<Option<Bytes>, Self::Error> {
        self.check()?;
        self.transactions.raw_transaction(id)
    }
}

impl ChainStore for MemoryChainStore {
    fn head_header_hash(&self) -> Result<Option<B256>, Self::Error> {
        self.check()?;
        Ok(self.head)
    }

    fn header_number(&self, hash: B256) -> Result<Option<u64>, Self::Error> {
        self.check()?;
        Ok(self.numbers.get(&hash).copied())
    }

    fn header(&self, hash: B256, number: u64) -> Result<Option<Header>, Self::Error> {
        self.check()?;
        Ok(self.headers.get(&(hash, number)).cloned())
    }

    fn raw_body(&self, hash: B256, number: u64) -> Result<Option<Bytes>, Self::Error> {
        self.check()?;
        Ok(self.bodies.get(&(hash, number)).cloned())
    }

    fn canonical_hash(&self, number: u64) -> Result<Option<B256>, Self::Error> {
        self.check()?;
        Ok(self.canonical.get(&number).copied())
    }

    fn total_difficulty(&self, hash: B256, number: u64) -> Result<Option<U256>, Self::Error> {
        self.check()?;
        Ok(self.total_difficulties.get(&(hash, number)).copied())
    }

    fn has_block(&self, hash: B256, number: u64) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.bodies.contains_key(&(hash, number)))
    }
}
