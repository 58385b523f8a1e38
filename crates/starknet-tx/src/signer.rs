//! The [Signer] seam used by [TxStarknet::with_signature](crate::TxStarknet::with_signature).

use crate::{SignerError, Transaction};
use alloy_primitives::U256;

/// The raw signature values carried by a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureValues {
    /// The `r` value.
    pub r: U256,
    /// The `s` value.
    pub s: U256,
    /// The recovery value `v`.
    pub v: U256,
}

/// Derives signature values for a transaction under a signing scheme.
pub trait Signer {
    /// Splits the raw signature `sig` over `tx` into its `(r, s, v)` values.
    fn signature_values(
        &self,
        tx: &dyn Transaction,
        sig: &[u8],
    ) -> Result<SignatureValues, SignerError>;

    /// Returns the chain ID this signer signs for.
    fn chain_id(&self) -> U256;
}
