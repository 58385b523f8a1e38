//! Error types for the `starknet-tx-providers` crate.

use starknet_tx::TxError;
use thiserror::Error;

/// An error type for reads through a storage provider.
///
/// Generic over the error type of the underlying store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError<E> {
    /// The store failed to serve a record.
    #[error("Store error: {0}")]
    Store(E),
    /// A stored transaction record could not be decoded.
    #[error("Failed to decode transaction {id}: {source}")]
    Decode {
        /// The ID of the record.
        id: u64,
        /// The decode error.
        source: TxError,
    },
}

/// A [Result] alias for the [ProviderError] type.
pub type ProviderResult<T, E> = Result<T, ProviderError<E>>;
