//! Test fixtures for the `starknet-tx` crate.

use crate::TxStarknet;
use alloy_eips::eip2930::{AccessList, AccessListItem};
use alloy_primitives::{address, b256, bytes, Address, Bytes, B256, U256};
use proptest::{collection::vec, prelude::*};

/// A call to the zero address with every optional field empty.
pub(crate) fn scenario_tx() -> TxStarknet {
    TxStarknet {
        chain_id: U256::from(1),
        nonce: 5,
        tip: U256::from(1),
        fee_cap: U256::from(2),
        gas: 21_000,
        to: Some(Address::ZERO),
        ..Default::default()
    }
}

/// A fully populated, signed transaction.
pub(crate) fn sample_tx() -> TxStarknet {
    TxStarknet {
        chain_id: U256::from(0x2a),
        nonce: 0x1d,
        tip: U256::from(1_000_000_000u64),
        fee_cap: U256::from(30_000_000_000u64),
        gas: 90_000,
        to: Some(address!("7a250d5630b4cf539739df2c5dacb4c659f2488d")),
        value: U256::from(10u64).pow(U256::from(18)),
        data: bytes!("a9059cbb000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045"),
        access_list: AccessList(vec![AccessListItem {
            address: address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            storage_keys: vec![
                b256!("0000000000000000000000000000000000000000000000000000000000000003"),
                b256!("0000000000000000000000000000000000000000000000000000000000000008"),
            ],
        }]),
        v: U256::from(1),
        r: U256::from_be_bytes(b256!(
            "840cfc572845f5786e702984c2a582528cad4b49b2a10b9db1be7fca90058565"
        ).0),
        s: U256::from_be_bytes(b256!(
            "25e7109ceb98168d95b09b18bbf6b685130e0562f233877d492b94eee0c5b6d1"
        ).0),
        creation_time: 0,
        cached_hash: Default::default(),
    }
}

fn uint_strategy() -> impl Strategy<Value = U256> {
    prop_oneof![
        Just(U256::ZERO),
        any::<u64>().prop_map(U256::from),
        any::<[u8; 32]>().prop_map(U256::from_be_bytes),
    ]
}

fn access_list_strategy() -> impl Strategy<Value = AccessList> {
    vec(
        (any::<[u8; 20]>(), vec(any::<[u8; 32]>(), 0..4)).prop_map(|(address, keys)| {
            AccessListItem {
                address: Address::from(address),
                storage_keys: keys.into_iter().map(B256::from).collect(),
            }
        }),
        0..3,
    )
    .prop_map(AccessList)
}

/// Generates arbitrary well-formed transactions.
pub(crate) fn tx_strategy() -> impl Strategy<Value = TxStarknet> {
    (
        (uint_strategy(), any::<u64>(), uint_strategy(), uint_strategy(), any::<u64>()),
        (any::<Option<[u8; 20]>>(), uint_strategy(), vec(any::<u8>(), 0..200)),
        access_list_strategy(),
        (uint_strategy(), uint_strategy(), uint_strategy()),
    )
        .prop_map(|(head, (to, value, data), access_list, (v, r, s))| {
            let (chain_id, nonce, tip, fee_cap, gas) = head;
            TxStarknet {
                chain_id,
                nonce,
                tip,
                fee_cap,
                gas,
                to: to.map(Address::from),
                value,
                data: Bytes::from(data),
                access_list,
                v,
                r,
                s,
                ..Default::default()
            }
        })
}
