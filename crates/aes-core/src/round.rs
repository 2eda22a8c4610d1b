//! AES round transformations over a column-major 16-byte state.
//!
//! Byte `i` of the state sits at row `i % 4`, column `i / 4`, which is the
//! input order FIPS-197 uses, so blocks can be fed in directly.

use crate::block::{xor_in_place, Block, BLOCK_BYTES};
use crate::sbox::{inv_sbox, sbox};

// Source index for each destination byte after ShiftRows (row r rotates left by r).
const SHIFT_ROWS: [usize; BLOCK_BYTES] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

// Source index for each destination byte after InvShiftRows.
const INV_SHIFT_ROWS: [usize; BLOCK_BYTES] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|byte| *byte = sbox(*byte));
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|byte| *byte = inv_sbox(*byte));
}

#[inline]
fn permute(state: &mut Block, table: &[usize; BLOCK_BYTES]) {
    let src = *state;
    for (dst, &from) in state.iter_mut().zip(table.iter()) {
        *dst = src[from];
    }
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut Block) {
    permute(state, &SHIFT_ROWS);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    permute(state, &INV_SHIFT_ROWS);
}

/// Multiplies by `x` in GF(2^8) modulo the AES polynomial.
#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (((byte >> 7) & 1) * 0x1b)
}

/// General GF(2^8) multiplication.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn mix_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    let all = a0 ^ a1 ^ a2 ^ a3;
    col[0] = a0 ^ all ^ xtime(a0 ^ a1);
    col[1] = a1 ^ all ^ xtime(a1 ^ a2);
    col[2] = a2 ^ all ^ xtime(a2 ^ a3);
    col[3] = a3 ^ all ^ xtime(a3 ^ a0);
}

fn inv_mix_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    state.chunks_exact_mut(4).for_each(mix_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    state.chunks_exact_mut(4).for_each(inv_mix_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
