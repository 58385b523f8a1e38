//! The `sntx` command line interface.

use alloy_primitives::{hex, Bytes};
use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::{fs, path::PathBuf};

/// Inspect, hash and encode StarkNet-typed transactions.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0 [error] - 4 [trace])", action = ArgAction::Count)]
    pub v: u8,
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The `sntx` subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a raw transaction and print its fields and identity hash as JSON.
    Decode(RawInput),
    /// Print the identity hash of a raw transaction.
    Hash(RawInput),
    /// Encode a transaction given as JSON into its raw typed form.
    Encode(JsonInput),
}

/// A raw, hex encoded transaction, given inline or read from a file.
#[derive(Args, Debug)]
pub struct RawInput {
    /// The hex encoded transaction.
    #[arg(value_parser = parse_bytes, required_unless_present = "file")]
    pub raw: Option<Bytes>,
    /// Path to a file holding the hex encoded transaction.
    #[arg(long, env = "SNTX_RAW_FILE", conflicts_with = "raw")]
    pub file: Option<PathBuf>,
}

impl RawInput {
    /// Returns the raw transaction bytes.
    pub fn read(&self) -> Result<Bytes> {
        match (&self.raw, &self.file) {
            (Some(raw), _) => Ok(raw.clone()),
            (None, Some(path)) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_bytes(contents.trim()).map_err(|e| anyhow!(e))
            }
            (None, None) => Err(anyhow!("No transaction given")),
        }
    }
}

/// A JSON encoded transaction, given inline or read from a file.
#[derive(Args, Debug)]
pub struct JsonInput {
    /// The JSON encoded transaction.
    #[arg(required_unless_present = "file")]
    pub json: Option<String>,
    /// Path to a file holding the JSON encoded transaction.
    #[arg(long, env = "SNTX_JSON_FILE", conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

impl JsonInput {
    /// Returns the JSON text.
    pub fn read(&self) -> Result<String> {
        match (&self.json, &self.file) {
            (Some(json), _) => Ok(json.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => Err(anyhow!("No transaction given")),
        }
    }
}

/// Parse a string slice into [Bytes].
pub fn parse_bytes(s: &str) -> Result<Bytes, String> {
    hex::decode(s).map_err(|e| format!("Invalid hex string: {}", e)).map(Bytes::from)
}
