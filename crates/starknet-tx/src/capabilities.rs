//! The [Transaction] capability surface shared by all transaction variants.

use crate::{SignatureValues, Signer, TxError, TxResult, TxStarknet, TxType};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, B256, U256};
use core::fmt;

/// An optional member of the [Transaction] capability set.
///
/// Variants advertise what they support through [Transaction::supports]. Calling an
/// unsupported capability fails with [TxError::NotImplemented].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// [Transaction::price]
    EffectivePrice,
    /// [Transaction::tip]
    Tip,
    /// [Transaction::effective_tip]
    EffectiveTip,
    /// [Transaction::fee_cap]
    FeeCap,
    /// [Transaction::cost]
    Cost,
    /// [Transaction::as_message]
    AsMessage,
    /// [Transaction::signing_hash]
    SigningHash,
    /// [Transaction::size]
    Size,
    /// [Transaction::access_list]
    AccessList,
    /// [Transaction::raw_signature_values]
    RawSignatureValues,
    /// [Transaction::sender]
    Sender,
    /// [Transaction::fake_sign]
    FakeSign,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EffectivePrice => "effective price",
            Self::Tip => "tip",
            Self::EffectiveTip => "effective tip",
            Self::FeeCap => "fee cap",
            Self::Cost => "cost",
            Self::AsMessage => "message conversion",
            Self::SigningHash => "signing hash",
            Self::Size => "size",
            Self::AccessList => "access list",
            Self::RawSignatureValues => "raw signature values",
            Self::Sender => "sender recovery",
            Self::FakeSign => "fake signing",
        };
        f.write_str(name)
    }
}

/// The capabilities a [TxStarknet] does not implement. Fee and signature semantics for the
/// StarkNet type are not defined yet.
pub const UNSUPPORTED_CAPABILITIES: [Capability; 11] = [
    Capability::EffectivePrice,
    Capability::EffectiveTip,
    Capability::FeeCap,
    Capability::Cost,
    Capability::AsMessage,
    Capability::SigningHash,
    Capability::Size,
    Capability::AccessList,
    Capability::RawSignatureValues,
    Capability::Sender,
    Capability::FakeSign,
];

/// A transaction converted into the form the state transition consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The recovered sender.
    pub from: Address,
    /// The recipient, or `None` for a contract creation.
    pub to: Option<Address>,
    /// The sender's nonce.
    pub nonce: u64,
    /// The gas limit.
    pub gas_limit: u64,
    /// The effective gas price.
    pub gas_price: U256,
    /// Max fee per gas.
    pub fee_cap: U256,
    /// Max priority fee per gas.
    pub tip: U256,
    /// The transferred value.
    pub value: U256,
    /// The call data.
    pub data: Bytes,
    /// The access list.
    pub access_list: AccessList,
    /// Whether the nonce must be checked against state.
    pub check_nonce: bool,
}

/// The capability set of an execution transaction.
///
/// The accessors above the fallible members are supported by every variant. The fallible
/// members are optional: check [Transaction::supports] before relying on them.
pub trait Transaction: fmt::Debug + Send + Sync {
    /// Returns the envelope type.
    fn tx_type(&self) -> TxType;

    /// Returns `true` if this variant implements `capability`.
    fn supports(&self, capability: Capability) -> bool;

    /// Returns the chain ID.
    fn chain_id(&self) -> U256;

    /// Returns the sender nonce.
    fn nonce(&self) -> u64;

    /// Returns the gas limit.
    fn gas_limit(&self) -> u64;

    /// Returns the recipient, or `None` for a contract creation.
    fn to(&self) -> Option<Address>;

    /// Returns the transferred value.
    fn value(&self) -> U256;

    /// Returns the call data.
    fn input(&self) -> &[u8];

    /// Returns the identity hash.
    fn hash(&self) -> B256;

    /// Returns `true` for StarkNet-typed transactions.
    fn is_starknet(&self) -> bool {
        false
    }

    /// Returns the gas price.
    fn price(&self) -> TxResult<U256>;

    /// Returns the max priority fee per gas.
    fn tip(&self) -> TxResult<U256>;

    /// Returns the priority fee paid per gas under `base_fee`.
    fn effective_tip(&self, base_fee: U256) -> TxResult<U256>;

    /// Returns the max fee per gas.
    fn fee_cap(&self) -> TxResult<U256>;

    /// Returns `gas * fee_cap + value`.
    fn cost(&self) -> TxResult<U256>;

    /// Converts the transaction into a [Message] for execution.
    fn as_message(&self, signer: &dyn Signer, base_fee: Option<U256>) -> TxResult<Message>;

    /// Returns the hash the sender signs for `chain_id`.
    fn signing_hash(&self, chain_id: U256) -> TxResult<B256>;

    /// Returns the encoded size in bytes.
    fn size(&self) -> TxResult<usize>;

    /// Returns the access list.
    fn access_list(&self) -> TxResult<&AccessList>;

    /// Returns the raw `(v, r, s)` values.
    fn raw_signature_values(&self) -> TxResult<SignatureValues>;

    /// Recovers the sender address.
    fn sender(&self, signer: &dyn Signer) -> TxResult<Address>;

    /// Returns a copy that reports `address` as its sender without a real signature.
    fn fake_sign(&self, address: Address) -> TxResult<Self>
    where
        Self: Sized;
}

impl Transaction for TxStarknet {
    fn tx_type(&self) -> TxType {
        TxType::Starknet
    }

    fn supports(&self, capability: Capability) -> bool {
        !UNSUPPORTED_CAPABILITIES.contains(&capability)
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn gas_limit(&self) -> u64 {
        self.gas
    }

    fn to(&self) -> Option<Address> {
        self.to
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> &[u8] {
        &self.data
    }

    fn hash(&self) -> B256 {
        Self::hash(self)
    }

    fn is_starknet(&self) -> bool {
        true
    }

    fn price(&self) -> TxResult<U256> {
        Err(TxError::NotImplemented(Capability::EffectivePrice))
    }

    fn tip(&self) -> TxResult<U256> {
        Ok(self.tip)
    }

    fn effective_tip(&self, _base_fee: U256) -> TxResult<U256> {
        Err(TxError::NotImplemented(Capability::EffectiveTip))
    }

    fn fee_cap(&self) -> TxResult<U256> {
        Err(TxError::NotImplemented(Capability::FeeCap))
    }

    fn cost(&self) -> TxResult<U256> {
        Err(TxError::NotImplemented(Capability::Cost))
    }

    fn as_message(&self, _signer: &dyn Signer, _base_fee: Option<U256>) -> TxResult<Message> {
        Err(TxError::NotImplemented(Capability::AsMessage))
    }

    fn signing_hash(&self, _chain_id: U256) -> TxResult<B256> {
        Err(TxError::NotImplemented(Capability::SigningHash))
    }

    fn size(&self) -> TxResult<usize> {
        Err(TxError::NotImplemented(Capability::Size))
    }

    fn access_list(&self) -> TxResult<&AccessList> {
        Err(TxError::NotImplemented(Capability::AccessList))
    }

    fn raw_signature_values(&self) -> TxResult<SignatureValues> {
        Err(TxError::NotImplemented(Capability::RawSignatureValues))
    }

    fn sender(&self, _signer: &dyn Signer) -> TxResult<Address> {
        Err(TxError::NotImplemented(Capability::Sender))
    }

    fn fake_sign(&self, _address: Address) -> TxResult<Self> {
        Err(TxError::NotImplemented(Capability::FakeSign))
    }
}
