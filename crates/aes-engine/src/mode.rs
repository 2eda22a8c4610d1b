//! ECB and CBC block combination over block-aligned buffers.

use aes_core::{decrypt_block, encrypt_block, xor_in_place, Block, RoundKeys, BLOCK_BYTES};

use crate::spec::Mode;

fn load(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_BYTES];
    block.copy_from_slice(chunk);
    block
}

/// Encrypts `buf` in place. `buf.len()` must be a multiple of the block size.
pub(crate) fn encrypt_blocks(mode: Mode, round_keys: &RoundKeys, iv: &Block, buf: &mut [u8]) {
    debug_assert_eq!(buf.len() % BLOCK_BYTES, 0);
    match mode {
        Mode::Ecb => {
            for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
                let ct = encrypt_block(&load(chunk), round_keys);
                chunk.copy_from_slice(&ct);
            }
        }
        Mode::Cbc => {
            let mut prev = *iv;
            for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
                let mut block = load(chunk);
                xor_in_place(&mut block, &prev);
                prev = encrypt_block(&block, round_keys);
                chunk.copy_from_slice(&prev);
            }
        }
    }
}

/// Decrypts `buf` in place. `buf.len()` must be a multiple of the block size.
pub(crate) fn decrypt_blocks(mode: Mode, round_keys: &RoundKeys, iv: &Block, buf: &mut [u8]) {
    debug_assert_eq!(buf.len() % BLOCK_BYTES, 0);
    match mode {
        Mode::Ecb => {
            for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
                let pt = decrypt_block(&load(chunk), round_keys);
                chunk.copy_from_slice(&pt);
            }
        }
        Mode::Cbc => {
            let mut prev = *iv;
            for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
                let ct = load(chunk);
                let mut pt = decrypt_block(&ct, round_keys);
                xor_in_place(&mut pt, &prev);
                chunk.copy_from_slice(&pt);
                prev = ct;
            }
        }
    }
}
