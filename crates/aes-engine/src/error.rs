//! Error taxonomy for key handling and buffer encryption.

use thiserror::Error;

/// Errors raised by key construction and by the cipher engine.
///
/// Every error is reported at the offending call; the engine keeps no state
/// that an error could corrupt, so it remains usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The requested key length is not 128, 192 or 256 bits.
    #[error("unsupported AES key size: {bits} bits")]
    InvalidKeySize {
        /// Requested size in bits.
        bits: u32,
    },

    /// Caller-supplied key material is shorter than the key size requires.
    #[error("key material too short: expected {expected} bytes, got {actual}")]
    KeyLengthMismatch {
        /// Bytes required by the key size.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// Caller-supplied initialization vector is not one block long.
    #[error("initialization vector must be {expected} bytes, got {actual}")]
    IvLengthMismatch {
        /// Always the block size.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// Ciphertext is empty or not a multiple of the block size.
    #[error("ciphertext length {len} is not a positive multiple of 16")]
    InvalidCiphertextLength {
        /// Length of the rejected ciphertext.
        len: usize,
    },

    /// Padding did not validate after decryption. Usually a wrong key, a
    /// corrupted ciphertext, or tampering.
    #[error("invalid padding")]
    Padding,

    /// Output buffer cannot hold the result.
    #[error("output buffer too small: need {needed} bytes, have {actual}")]
    BufferTooSmall {
        /// Bytes the operation will write.
        needed: usize,
        /// Bytes available.
        actual: usize,
    },

    /// The random source could not produce bytes.
    #[error("random source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, CipherError>;
