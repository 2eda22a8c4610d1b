//! PKCS#7 block padding.
//!
//! At least one pad byte is always appended, so block-aligned input grows by a
//! full block. Every pad byte holds the pad length.

use aes_core::BLOCK_BYTES;
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{CipherError, Result};

/// Padded length for `len` bytes of input: the next multiple of the block size
/// strictly greater than `len`.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    (len / BLOCK_BYTES + 1) * BLOCK_BYTES
}

/// Writes pad bytes into `buf[data_len..]`.
///
/// `buf.len()` must equal `padded_len(data_len)`.
pub(crate) fn pad_in_place(buf: &mut [u8], data_len: usize) {
    debug_assert_eq!(buf.len(), padded_len(data_len));
    let pad = (buf.len() - data_len) as u8;
    buf[data_len..].fill(pad);
}

/// Validates the padding at the end of `buf` and returns the unpadded length.
///
/// The final block is inspected in full regardless of where it goes wrong.
pub(crate) fn unpadded_len(buf: &[u8]) -> Result<usize> {
    if buf.len() < BLOCK_BYTES || buf.len() % BLOCK_BYTES != 0 {
        return Err(CipherError::Padding);
    }
    let tail = &buf[buf.len() - BLOCK_BYTES..];
    let pad = tail[BLOCK_BYTES - 1];

    let mut valid: Choice = pad.ct_gt(&0) & !pad.ct_gt(&(BLOCK_BYTES as u8));
    for (offset, byte) in tail.iter().rev().enumerate() {
        let in_pad = (offset as u8).ct_lt(&pad);
        valid &= !in_pad | byte.ct_eq(&pad);
    }

    if bool::from(valid) {
        Ok(buf.len() - usize::from(pad))
    } else {
        Err(CipherError::Padding)
    }
}
