use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key};
use aes_engine::{AesEngine, CipherKey, CryptoEngine, KeySize, KeySpec, Mode};

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut group = c.benchmark_group("block");
    for size in KeySize::ALL {
        let mut key = vec![0u8; size.key_bytes()];
        rng.fill_bytes(&mut key);
        let round_keys = expand_key(&key).expect("supported key");
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);

        group.bench_function(BenchmarkId::new("expand_key", size), |b| {
            b.iter(|| expand_key(&key));
        });
        group.bench_function(BenchmarkId::new("encrypt_block", size), |b| {
            b.iter(|| encrypt_block(&block, &round_keys));
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut data = vec![0u8; 4096];
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for mode in [Mode::Ecb, Mode::Cbc] {
        let key = CipherKey::generate(KeySpec::new(KeySize::Aes256, mode), &mut rng)
            .expect("seeded rng");
        let engine = AesEngine::new(key).expect("valid engine");
        let ciphertext = engine.encrypt_to_vec(&data).expect("encrypt");
        let mut out = vec![0u8; engine.output_text_size(data.len())];

        group.bench_function(BenchmarkId::new("encrypt_4k", mode), |b| {
            b.iter(|| engine.encrypt(&data, &mut out));
        });
        group.bench_function(BenchmarkId::new("decrypt_4k", mode), |b| {
            b.iter(|| engine.decrypt_to_vec(&ciphertext));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_engine);
criterion_main!(benches);
