//! Error types for the `starknet-tx` crate.

use crate::Capability;
use alloc::string::String;
use core::fmt;
use thiserror::Error;

/// A [Result] type alias where the error is [TxError].
pub type TxResult<T> = Result<T, TxError>;

/// The wire fields of a [TxStarknet], in encoding order.
///
/// [TxStarknet]: crate::TxStarknet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxField {
    /// The chain ID.
    ChainId,
    /// The sender nonce.
    Nonce,
    /// The max priority fee per gas.
    Tip,
    /// The max fee per gas.
    FeeCap,
    /// The gas limit.
    Gas,
    /// The recipient address.
    To,
    /// The transferred value.
    Value,
    /// The call data.
    Data,
    /// The access list.
    AccessList,
    /// The signature's `v` value.
    V,
    /// The signature's `r` value.
    R,
    /// The signature's `s` value.
    S,
}

impl TxField {
    /// Returns the field's name as it appears in diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ChainId => "chain_id",
            Self::Nonce => "nonce",
            Self::Tip => "tip",
            Self::FeeCap => "fee_cap",
            Self::Gas => "gas",
            Self::To => "to",
            Self::Value => "value",
            Self::Data => "data",
            Self::AccessList => "access_list",
            Self::V => "v",
            Self::R => "r",
            Self::S => "s",
        }
    }
}

impl fmt::Display for TxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error type for [TxStarknet] decoding and capability calls.
///
/// Encoding into a buffer is infallible. Encoding into an I/O sink returns the sink's own
/// error unchanged, see [TxStarknet::write_2718].
///
/// [TxStarknet]: crate::TxStarknet
/// [TxStarknet::write_2718]: crate::TxStarknet::write_2718
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxError {
    /// A decoded field is longer than the field allows.
    #[error("Wrong size for {field}: {len}")]
    FieldSizeViolation {
        /// The offending field.
        field: TxField,
        /// The decoded byte length.
        len: usize,
    },
    /// The RLP item of a field could not be decoded.
    #[error("Failed to decode {field}: {error}")]
    Field {
        /// The field being decoded.
        field: TxField,
        /// The underlying RLP error.
        error: alloy_rlp::Error,
    },
    /// The record's list structure is malformed.
    #[error("Malformed transaction structure: {0}")]
    MalformedStructure(&'static str),
    /// The record's list header could not be decoded.
    #[error("Failed to decode transaction header: {0}")]
    Header(alloy_rlp::Error),
    /// The input was empty where a typed transaction was expected.
    #[error("Empty transaction input")]
    EmptyInput,
    /// The type discriminator does not select this decoder.
    #[error("Unexpected transaction type: {0:#04x}")]
    UnexpectedType(u8),
    /// The capability is not implemented by this transaction variant.
    #[error("{0} is not implemented for this transaction type")]
    NotImplemented(Capability),
    /// The signer failed to produce signature values.
    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),
}

impl From<TxError> for alloy_rlp::Error {
    fn from(err: TxError) -> Self {
        match err {
            TxError::Field { error, .. } | TxError::Header(error) => error,
            TxError::FieldSizeViolation { .. } => Self::Custom("field exceeds maximum length"),
            TxError::MalformedStructure(reason) => Self::Custom(reason),
            TxError::EmptyInput => Self::InputTooShort,
            TxError::UnexpectedType(_) => Self::Custom("unexpected transaction type"),
            TxError::NotImplemented(_) | TxError::Signer(_) => {
                Self::Custom("transaction capability error")
            }
        }
    }
}

/// An error type for [Signer] implementations.
///
/// [Signer]: crate::Signer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// The raw signature does not have the expected `r || s || v` length.
    #[error("Invalid signature length: expected 65, got {0}")]
    InvalidSignatureLength(usize),
    /// The signer is bound to a different chain than the transaction.
    #[error("Chain ID mismatch")]
    ChainIdMismatch,
    /// Any other signer failure.
    #[error("Signer failure: {0}")]
    Custom(String),
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_field_size_violation_names_field() {
        let err = TxError::FieldSizeViolation { field: TxField::FeeCap, len: 33 };
        assert_eq!(err.to_string(), "Wrong size for fee_cap: 33");
    }

    #[test]
    fn test_unexpected_type_display() {
        assert_eq!(TxError::UnexpectedType(2).to_string(), "Unexpected transaction type: 0x02");
    }

    #[test]
    fn test_into_rlp_error_keeps_field_source() {
        let err = TxError::Field { field: TxField::Nonce, error: alloy_rlp::Error::LeadingZero };
        assert_eq!(alloy_rlp::Error::from(err), alloy_rlp::Error::LeadingZero);
    }
}
