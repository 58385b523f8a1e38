//! Contains the [TxStarknet] transaction record.

use crate::{HashCache, Signer, TxResult};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, U256};

/// The EIP-2718 type discriminator of a [TxStarknet].
pub const STARKNET_TX_TYPE: u8 = 0x03;

/// A StarkNet-typed execution transaction.
///
/// The wire fields mirror a dynamic-fee transaction. `creation_time` and the hash cache are
/// node-local and never encoded.
///
/// Equality only compares wire fields. Instances are read-mostly: once [TxStarknet::hash] has
/// been called, mutate a clone rather than the instance, since the cached hash is never
/// invalidated.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxStarknet {
    /// The chain this transaction is bound to.
    pub chain_id: U256,
    /// The sender's nonce.
    pub nonce: u64,
    /// Max priority fee per gas.
    pub tip: U256,
    /// Max fee per gas.
    pub fee_cap: U256,
    /// The gas limit.
    pub gas: u64,
    /// The recipient, or `None` for a contract creation.
    pub to: Option<Address>,
    /// The value transferred to the recipient.
    pub value: U256,
    /// The call data.
    pub data: Bytes,
    /// Addresses and storage keys the transaction pre-declares.
    pub access_list: AccessList,
    /// The signature's `v` value.
    pub v: U256,
    /// The signature's `r` value.
    pub r: U256,
    /// The signature's `s` value.
    pub s: U256,
    /// Unix timestamp, in seconds, at which the node first saw the transaction.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    pub creation_time: u64,
    /// The memoized identity hash.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cached_hash: HashCache,
}

impl TxStarknet {
    /// Returns the EIP-2718 type discriminator.
    pub const fn tx_type(&self) -> u8 {
        STARKNET_TX_TYPE
    }

    /// Returns `true`; StarkNet transactions are routed to the StarkNet executor.
    pub const fn is_starknet(&self) -> bool {
        true
    }

    /// Returns `true` if the transaction deploys a contract.
    pub const fn is_create(&self) -> bool {
        self.to.is_none()
    }

    /// Sets the creation timestamp.
    pub fn with_creation_time(mut self, creation_time: u64) -> Self {
        self.creation_time = creation_time;
        self
    }

    /// Returns a signed copy of the transaction.
    ///
    /// The copy carries the `(v, r, s)` values the signer derives from `sig` and the signer's
    /// chain ID. `self` is left untouched.
    pub fn with_signature<S: Signer + ?Sized>(&self, signer: &S, sig: &[u8]) -> TxResult<Self> {
        let mut signed = self.clone();
        let values = signer.signature_values(self, sig)?;
        signed.r = values.r;
        signed.s = values.s;
        signed.v = values.v;
        signed.chain_id = signer.chain_id();
        Ok(signed)
    }
}

impl Clone for TxStarknet {
    /// Deep-copies every field. The clone starts with an empty hash cache.
    fn clone(&self) -> Self {
        Self {
            chain_id: self.chain_id,
            nonce: self.nonce,
            tip: self.tip,
            fee_cap: self.fee_cap,
            gas: self.gas,
            to: self.to,
            value: self.value,
            data: Bytes::copy_from_slice(&self.data),
            access_list: AccessList(self.access_list.0.to_vec()),
            v: self.v,
            r: self.r,
            s: self.s,
            creation_time: self.creation_time,
            cached_hash: HashCache::default(),
        }
    }
}

impl PartialEq for TxStarknet {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id &&
            self.nonce == other.nonce &&
            self.tip == other.tip &&
            self.fee_cap == other.fee_cap &&
            self.gas == other.gas &&
            self.to == other.to &&
            self.value == other.value &&
            self.data == other.data &&
            self.access_list == other.access_list &&
            self.v == other.v &&
            self.r == other.r &&
            self.s == other.s
    }
}

impl Eq for TxStarknet {}
