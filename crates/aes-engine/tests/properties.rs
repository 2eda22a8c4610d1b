//! Behavioural properties of the buffer engine.

use aes_core::{encrypt_block, expand_key};
use aes_engine::{AesEngine, CipherError, CipherKey, CryptoEngine, KeySize, KeySpec, Mode};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn engine(rng: &mut ChaCha20Rng, size: KeySize, mode: Mode) -> AesEngine {
    let key = CipherKey::generate(KeySpec::new(size, mode), rng).expect("seeded rng");
    AesEngine::new(key).expect("valid engine")
}

fn lengths() -> impl Iterator<Item = usize> {
    (0..=256).chain((257..10_000).step_by(331)).chain([10_000])
}

#[test]
fn round_trip_all_sizes_modes_and_lengths() {
    let mut rng = ChaCha20Rng::from_seed([40u8; 32]);
    let mut data = vec![0u8; 10_000];
    rng.fill_bytes(&mut data);

    for size in KeySize::ALL {
        for mode in [Mode::Ecb, Mode::Cbc] {
            let engine = engine(&mut rng, size, mode);
            for len in lengths() {
                let plain = &data[..len];
                let ct = engine.encrypt_to_vec(plain).expect("encrypt");
                assert_eq!(ct.len(), engine.output_text_size(len));
                assert_eq!(ct.len() % 16, 0);
                assert!(ct.len() > len);
                let pt = engine.decrypt_to_vec(&ct).expect("decrypt");
                assert_eq!(pt, plain, "{} len {len}", engine.spec());
            }
        }
    }
}

// Every length up to 10000 for every size and mode; slow in debug builds.
// Run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn full_length_round_trip() {
    let mut rng = ChaCha20Rng::from_seed([47u8; 32]);
    let mut data = vec![0u8; 10_000];
    rng.fill_bytes(&mut data);

    for size in KeySize::ALL {
        for mode in [Mode::Ecb, Mode::Cbc] {
            let engine = engine(&mut rng, size, mode);
            for len in 0..=10_000 {
                let plain = &data[..len];
                let ct = engine.encrypt_to_vec(plain).expect("encrypt");
                let pt = engine.decrypt_to_vec(&ct).expect("decrypt");
                assert_eq!(pt, plain, "{} len {len}", engine.spec());
            }
        }
    }
}

#[test]
fn ecb_single_bit_flip_changes_about_half_the_block() {
    let mut rng = ChaCha20Rng::from_seed([48u8; 32]);
    for size in KeySize::ALL {
        let engine = engine(&mut rng, size, Mode::Ecb);
        let trials = 200u32;
        let mut flipped = 0u32;
        for _ in 0..trials {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let mut other = block;
            let bit = (rng.next_u32() % 128) as usize;
            other[bit / 8] ^= 1 << (bit % 8);

            let a = engine.encrypt_to_vec(&block).expect("encrypt");
            let b = engine.encrypt_to_vec(&other).expect("encrypt");
            assert_eq!(a, engine.encrypt_to_vec(&block).expect("encrypt"));
            flipped += a[..16]
                .iter()
                .zip(&b[..16])
                .map(|(x, y)| (x ^ y).count_ones())
                .sum::<u32>();
        }
        let mean = f64::from(flipped) / f64::from(trials);
        assert!((56.0..=72.0).contains(&mean), "{size}: mean flipped bits {mean}");
    }
}

#[test]
fn output_size_examples() {
    let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
    let engine = engine(&mut rng, KeySize::Aes128, Mode::Ecb);
    assert_eq!(engine.output_text_size(0), 16);
    assert_eq!(engine.output_text_size(16), 32);
    assert_eq!(engine.output_text_size(31), 32);
    assert_eq!(engine.output_text_size(32), 48);
}

#[test]
fn ecb_repeats_identical_blocks() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let engine = engine(&mut rng, KeySize::Aes256, Mode::Ecb);
    let plain = b"0123456789abcdef".repeat(2);
    let ct = engine.encrypt_to_vec(&plain).expect("encrypt");
    assert_eq!(ct[..16], ct[16..32]);
}

#[test]
fn cbc_hides_identical_blocks() {
    let mut rng = ChaCha20Rng::from_seed([43u8; 32]);
    let engine = engine(&mut rng, KeySize::Aes256, Mode::Cbc);
    let plain = [0x61u8; 32];
    let ct = engine.encrypt_to_vec(&plain).expect("encrypt");
    assert_ne!(ct[..16], ct[16..32]);
}

#[test]
fn cbc_change_in_first_block_propagates() {
    let mut rng = ChaCha20Rng::from_seed([44u8; 32]);
    let engine = engine(&mut rng, KeySize::Aes128, Mode::Cbc);
    let mut a = vec![0u8; 64];
    rng.fill_bytes(&mut a);
    let mut b = a.clone();
    b[3] ^= 0x01;

    let ca = engine.encrypt_to_vec(&a).expect("encrypt");
    let cb = engine.encrypt_to_vec(&b).expect("encrypt");
    for (block_a, block_b) in ca.chunks(16).zip(cb.chunks(16)) {
        assert_ne!(block_a, block_b);
    }
}

#[test]
fn misaligned_ciphertext_is_rejected() {
    let mut rng = ChaCha20Rng::from_seed([45u8; 32]);
    for mode in [Mode::Ecb, Mode::Cbc] {
        let engine = engine(&mut rng, KeySize::Aes192, mode);
        for len in [0, 1, 15, 17, 33] {
            assert_eq!(
                engine.decrypt_to_vec(&vec![0u8; len]),
                Err(CipherError::InvalidCiphertextLength { len })
            );
        }
    }
}

/// Encrypts a single raw block so the decrypted padding is chosen by the test.
fn forged_ciphertext(key: &[u8], last_block: [u8; 16]) -> Vec<u8> {
    let rks = expand_key(key).expect("supported key");
    encrypt_block(&last_block, &rks).to_vec()
}

#[test]
fn bad_padding_is_rejected() {
    let material = [0x17u8; 16];
    let key = CipherKey::from_bytes(KeySpec::new(KeySize::Aes128, Mode::Ecb), &material)
        .expect("16 bytes");
    let engine = AesEngine::new(key).expect("valid engine");

    let mut zero_pad = [0x41u8; 16];
    zero_pad[15] = 0;
    let mut too_long = [0x41u8; 16];
    too_long[15] = 17;
    let mut inconsistent = [0x41u8; 16];
    inconsistent[13..].copy_from_slice(&[3, 4, 3]);

    for block in [zero_pad, too_long, inconsistent] {
        let ct = forged_ciphertext(&material, block);
        assert_eq!(engine.decrypt_to_vec(&ct), Err(CipherError::Padding));
    }

    let mut good = [0x41u8; 16];
    good[13..].copy_from_slice(&[3, 3, 3]);
    let ct = forged_ciphertext(&material, good);
    assert_eq!(engine.decrypt_to_vec(&ct).expect("valid padding"), vec![0x41u8; 13]);
}

#[test]
fn wrong_key_is_caught_or_garbles() {
    let mut rng = ChaCha20Rng::from_seed([46u8; 32]);
    let sender = engine(&mut rng, KeySize::Aes128, Mode::Cbc);
    let receiver = engine(&mut rng, KeySize::Aes128, Mode::Cbc);
    let plain = b"a secret that should stay secret";
    let ct = sender.encrypt_to_vec(plain).expect("encrypt");
    match receiver.decrypt_to_vec(&ct) {
        Err(err) => assert_eq!(err, CipherError::Padding),
        Ok(garbled) => assert_ne!(garbled, plain),
    }
}

#[test]
fn deterministic_for_fixed_key_and_iv() {
    let spec = KeySpec::new(KeySize::Aes192, Mode::Cbc);
    let make = || {
        let key = CipherKey::with_iv(spec, &[0x33; 24], &[0x44; 16]).expect("valid");
        AesEngine::new(key).expect("valid engine")
    };
    let a = make().encrypt_to_vec(b"repeatable").expect("encrypt");
    let b = make().encrypt_to_vec(b"repeatable").expect("encrypt");
    assert_eq!(a, b);
}
