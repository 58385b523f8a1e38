//! The typed transaction envelope and its type dispatch.

use crate::{Transaction, TxError, TxResult, TxStarknet, STARKNET_TX_TYPE};
use alloc::vec::Vec;
use alloy_primitives::B256;
use alloy_rlp::BufMut;
use core::fmt;
use tracing::debug;

/// The EIP-2718 transaction types known to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    /// Legacy transaction, untyped on the wire.
    Legacy = 0x00,
    /// Access list transaction.
    Eip2930 = 0x01,
    /// Dynamic-fee transaction.
    Eip1559 = 0x02,
    /// StarkNet transaction.
    Starknet = STARKNET_TX_TYPE,
}

impl TryFrom<u8> for TxType {
    type Error = TxError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Legacy),
            0x01 => Ok(Self::Eip2930),
            0x02 => Ok(Self::Eip1559),
            STARKNET_TX_TYPE => Ok(Self::Starknet),
            ty => Err(TxError::UnexpectedType(ty)),
        }
    }
}

impl From<TxType> for u8 {
    fn from(ty: TxType) -> Self {
        ty as Self
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Eip2930 => write!(f, "eip2930"),
            Self::Eip1559 => write!(f, "eip1559"),
            Self::Starknet => write!(f, "starknet"),
        }
    }
}

/// A decoded typed transaction.
///
/// Only the StarkNet variant is decoded here; the other [TxType]s are handled by the regular
/// execution transaction codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedTransaction {
    /// A StarkNet transaction.
    Starknet(TxStarknet),
}

impl TypedTransaction {
    /// Returns the envelope type.
    pub const fn tx_type(&self) -> TxType {
        match self {
            Self::Starknet(_) => TxType::Starknet,
        }
    }

    /// Returns the identity hash.
    pub fn hash(&self) -> B256 {
        match self {
            Self::Starknet(tx) => tx.hash(),
        }
    }

    /// Encodes the typed wire form into `out`.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        match self {
            Self::Starknet(tx) => tx.encode_2718(out),
        }
    }

    /// Encodes the typed wire form into a new buffer.
    pub fn encode_2718_vec(&self) -> Vec<u8> {
        match self {
            Self::Starknet(tx) => tx.encode_2718_vec(),
        }
    }

    /// Returns the transaction behind the capability surface.
    pub fn as_transaction(&self) -> &dyn Transaction {
        match self {
            Self::Starknet(tx) => tx,
        }
    }

    /// Returns the StarkNet transaction, if this is one.
    pub const fn as_starknet(&self) -> Option<&TxStarknet> {
        match self {
            Self::Starknet(tx) => Some(tx),
        }
    }
}

impl From<TxStarknet> for TypedTransaction {
    fn from(tx: TxStarknet) -> Self {
        Self::Starknet(tx)
    }
}

/// Decodes a typed transaction record, dispatching on its leading type byte.
///
/// Records of any type other than [TxType::Starknet] are rejected with
/// [TxError::UnexpectedType].
pub fn decode_transaction(buf: &mut &[u8]) -> TxResult<TypedTransaction> {
    let ty = *buf.first().ok_or(TxError::EmptyInput)?;
    match TxType::try_from(ty) {
        Ok(TxType::Starknet) => TxStarknet::decode_2718(buf).map(TypedTransaction::Starknet),
        Ok(other) => {
            debug!(target: "tx_codec", "Unsupported transaction type in this codec: {other}");
            Err(TxError::UnexpectedType(ty))
        }
        Err(err) => {
            debug!(target: "tx_codec", "Unknown transaction type: {ty:#04x}");
            Err(err)
        }
    }
}
