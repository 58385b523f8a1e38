//! `sntx` decodes, hashes and encodes StarkNet-typed transactions.

use alloy_primitives::{hex, B256};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use starknet_tx::{decode_transaction, TxStarknet, TypedTransaction};
use tracing::{debug, Level};

mod cli;
use cli::{Cli, Command};

/// The output of the `decode` command.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Decoded<'a> {
    hash: B256,
    #[serde(rename = "type")]
    tx_type: u8,
    transaction: &'a TxStarknet,
}

fn main() -> Result<()> {
    let Cli { v, command } = Cli::parse();
    init_tracing_subscriber(v)?;

    match command {
        Command::Decode(input) => {
            let tx = decode(&input.read()?)?;
            let TypedTransaction::Starknet(inner) = &tx;
            let decoded =
                Decoded { hash: tx.hash(), tx_type: tx.tx_type().into(), transaction: inner };
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
        Command::Hash(input) => {
            let tx = decode(&input.read()?)?;
            println!("{}", tx.hash());
        }
        Command::Encode(input) => {
            let tx: TxStarknet =
                serde_json::from_str(&input.read()?).context("Invalid transaction JSON")?;
            debug!(target: "sntx", "Encoding {} bytes", tx.encode_2718_len());
            println!("{}", hex::encode_prefixed(tx.encode_2718_vec()));
        }
    }

    Ok(())
}

fn decode(raw: &[u8]) -> Result<TypedTransaction> {
    let mut buf = raw;
    let tx = decode_transaction(&mut buf).context("Invalid transaction")?;
    if !buf.is_empty() {
        return Err(anyhow!("{} trailing bytes after transaction", buf.len()));
    }
    debug!(target: "sntx", "Decoded {} transaction {}", tx.tx_type(), tx.hash());
    Ok(tx)
}

/// Initializes the tracing subscriber
///
/// # Arguments
/// * `verbosity_level` - The verbosity level (0-4)
///
/// # Returns
/// * `Result<()>` - Ok if successful, Err otherwise.
fn init_tracing_subscriber(verbosity_level: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match verbosity_level {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))
}
