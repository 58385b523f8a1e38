#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod errors;
pub use errors::{SignerError, TxError, TxField, TxResult};

pub mod rlp;

mod sink;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{BufSink, RlpSink};

mod size;
pub use size::PayloadLengths;

mod transaction;
pub use transaction::{TxStarknet, STARKNET_TX_TYPE};

mod encode;

mod decode;

mod hash;
pub use hash::{HashCache, IDENTITY_HASH_PREFIX};

mod capabilities;
pub use capabilities::{Capability, Message, Transaction, UNSUPPORTED_CAPABILITIES};

mod signer;
pub use signer::{SignatureValues, Signer};

mod envelope;
pub use envelope::{decode_transaction, TxType, TypedTransaction};

#[cfg(test)]
mod test_util;
