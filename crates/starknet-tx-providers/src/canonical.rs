//! Reads runs of canonical transactions from a [RawTransactionProvider].

use crate::{ProviderError, ProviderResult, RawTransactionProvider};
use alloc::vec::Vec;
use starknet_tx::{decode_transaction, TypedTransaction};
use tracing::{debug, error};

/// The most transactions [canonical_transactions] reserves space for up front.
const MAX_PREALLOCATED_TXS: u32 = 1024;

/// Reads and decodes up to `amount` transactions with sequential IDs starting at `base_id`.
///
/// The store may hold fewer records than requested: reading stops at the first missing ID and
/// the transactions found so far are returned. Store and decode failures abort the read.
///
/// Records are looked up by ID, so a gap in the ID range ends the run. A cursor over the
/// underlying table would instead skip the gap and continue with the next existing records.
pub fn canonical_transactions<P: RawTransactionProvider>(
    provider: &P,
    base_id: u64,
    amount: u32,
) -> ProviderResult<Vec<TypedTransaction>, P::Error> {
    if amount == 0 {
        return Ok(Vec::new());
    }

    let mut txs = Vec::with_capacity(amount.min(MAX_PREALLOCATED_TXS) as usize);
    for id in (base_id..).take(amount as usize) {
        let raw = match provider.raw_transaction(id) {
            Ok(Some(raw)) => raw,
            Ok(None) => break,
            Err(err) => {
                error!(target: "canonical_txs", "Failed to read transaction {id}: {err}");
                return Err(ProviderError::Store(err));
            }
        };

        let tx = decode_transaction(&mut &raw[..])
            .map_err(|source| ProviderError::Decode { id, source })?;
        txs.push(tx);
    }

    if txs.len() < amount as usize {
        debug!(
            target: "canonical_txs",
            "Requested {amount} transactions from {base_id}, found {}",
            txs.len()
        );
    }
    Ok(txs)
}
