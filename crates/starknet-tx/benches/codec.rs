#![allow(missing_docs)]
//! Contains benchmarks for the [TxStarknet] codec.

use alloy_eips::eip2930::{AccessList, AccessListItem};
use alloy_primitives::{Address, Bytes, B256, U256};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use rand::{rngs::StdRng, Rng, SeedableRng};
use starknet_tx::TxStarknet;

fn random_tx(rng: &mut StdRng, data_len: usize, access_list_len: usize) -> TxStarknet {
    let mut data = vec![0u8; data_len];
    rng.fill(data.as_mut_slice());

    let access_list = (0..access_list_len)
        .map(|_| AccessListItem {
            address: Address::from(rng.gen::<[u8; 20]>()),
            storage_keys: (0..4).map(|_| B256::from(rng.gen::<[u8; 32]>())).collect(),
        })
        .collect();

    TxStarknet {
        chain_id: U256::from(rng.gen::<u64>()),
        nonce: rng.gen(),
        tip: U256::from(rng.gen::<u64>()),
        fee_cap: U256::from(rng.gen::<u64>()),
        gas: rng.gen(),
        to: Some(Address::from(rng.gen::<[u8; 20]>())),
        value: U256::from_be_bytes(rng.gen::<[u8; 32]>()),
        data: Bytes::from(data),
        access_list: AccessList(access_list),
        v: U256::from(rng.gen::<bool>() as u8),
        r: U256::from_be_bytes(rng.gen::<[u8; 32]>()),
        s: U256::from_be_bytes(rng.gen::<[u8; 32]>()),
        ..Default::default()
    }
}

fn codec(c: &mut Criterion) {
    let mut g = c.benchmark_group("codec");

    // Use pseudo-randomness for reproducibility
    let mut rng = StdRng::seed_from_u64(42);
    let small = random_tx(&mut rng, 68, 0);
    let large = random_tx(&mut rng, 1 << 16, 32);

    for (name, tx) in [("small", &small), ("large", &large)] {
        let raw = tx.encode_2718_vec();

        g.bench_function(format!("Encode - {name}"), |b| {
            b.iter(|| tx.encode_2718_vec());
        });

        g.bench_function(format!("Decode - {name}"), |b| {
            b.iter(|| TxStarknet::decode_2718(&mut raw.as_slice()).unwrap());
        });

        g.bench_function(format!("Hash (uncached) - {name}"), |b| {
            b.iter_batched(|| tx.clone(), |tx| tx.hash(), BatchSize::SmallInput);
        });
    }
}

criterion_group! {
    name = codec_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = codec
}
criterion_main!(codec_benches);
