//! Identity hashing and the per-instance [HashCache].

use crate::{PayloadLengths, TxStarknet, TxType};
use alloy_primitives::{Keccak256, B256};
use core::fmt;

/// The discriminator prefixed to the field list when computing the identity hash.
///
/// StarkNet transactions are identified under the dynamic-fee envelope type rather than their
/// own wire discriminator.
pub const IDENTITY_HASH_PREFIX: u8 = TxType::Eip1559 as u8;

/// A single-assignment cell holding a transaction's identity hash.
///
/// Racing first readers all wait on one initializer and then observe the same published value.
/// Once set, reads do not lock.
#[derive(Default)]
pub struct HashCache(spin::Once<B256>);

impl HashCache {
    /// Returns the cached hash, if it has been computed.
    pub fn get(&self) -> Option<&B256> {
        self.0.get()
    }

    /// Returns the cached hash, computing and publishing it with `compute` on first use.
    pub(crate) fn get_or_init(&self, compute: impl FnOnce() -> B256) -> B256 {
        *self.0.call_once(compute)
    }
}

impl fmt::Debug for HashCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashCache").field(&self.get()).finish()
    }
}

impl TxStarknet {
    /// Returns the transaction's identity hash,
    /// `keccak256(0x02 || rlp([chain_id, nonce, tip, fee_cap, gas, to, value, data,
    /// access_list, v, r, s]))`.
    ///
    /// Computed once per instance; subsequent calls return the cached value.
    pub fn hash(&self) -> B256 {
        self.cached_hash.get_or_init(|| self.compute_hash())
    }

    fn compute_hash(&self) -> B256 {
        let lengths = PayloadLengths::new(self);
        let mut hasher = Keccak256::new();
        hasher.update([IDENTITY_HASH_PREFIX]);
        self.encode_fields(&lengths, &mut hasher).unwrap_or_else(|never| match never {});
        hasher.finalize()
    }
}
