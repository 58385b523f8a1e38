#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod errors;
pub use errors::{ProviderError, ProviderResult};

mod traits;
pub use traits::{ChainStore, RawTransactionProvider};

mod canonical;
pub use canonical::canonical_transactions;

mod body;
pub use body::{read_body, read_body_with_transactions, Block, Body, BodyForStorage};

mod chain_reader;
pub use chain_reader::ChainReader;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::{MemoryChainStore, MemoryTxStore, StoreError};
