//! AES buffer engine: padding, block segmentation and mode combination.

use aes_core::{expand_key, RoundKeys, BLOCK_BYTES};
use zeroize::Zeroizing;

use crate::crypto::CryptoEngine;
use crate::error::{CipherError, Result};
use crate::key::CipherKey;
use crate::mode::{decrypt_blocks, encrypt_blocks};
use crate::padding::{pad_in_place, padded_len, unpadded_len};
use crate::spec::KeySpec;

/// AES engine owning exactly one [`CipherKey`].
///
/// The round-key schedule is derived once at construction and only read
/// afterwards, so a shared `&AesEngine` can encrypt and decrypt from several
/// threads at once.
#[derive(Debug)]
pub struct AesEngine {
    key: CipherKey,
    round_keys: RoundKeys,
}

impl AesEngine {
    /// Takes ownership of `key` and derives its round-key schedule.
    pub fn new(key: CipherKey) -> Result<Self> {
        let spec = key.key_type();
        let round_keys = expand_key(key.key()).ok_or(CipherError::KeyLengthMismatch {
            expected: spec.key_bytes(),
            actual: key.key_length(),
        })?;
        log::debug!(
            "derived {} round keys for {spec}",
            round_keys.rounds() + 1
        );
        Ok(Self { key, round_keys })
    }

    /// The owned key.
    pub fn key(&self) -> &CipherKey {
        &self.key
    }

    /// Key size and mode in use.
    pub fn spec(&self) -> KeySpec {
        self.key.key_type()
    }

    /// Replaces the IV used by chaining modes. The round keys are unaffected.
    pub fn set_init_vector(&mut self, iv: &[u8]) -> Result<()> {
        self.key.set_init_vector(iv)
    }

    /// Gives the key back, dropping the schedule.
    pub fn into_key(self) -> CipherKey {
        self.key
    }
}

impl CryptoEngine for AesEngine {
    fn output_text_size(&self, plain_text_size: usize) -> usize {
        padded_len(plain_text_size)
    }

    fn encrypt(&self, plain_text: &[u8], cipher_text: &mut [u8]) -> Result<usize> {
        let needed = self.output_text_size(plain_text.len());
        let actual = cipher_text.len();
        let out = cipher_text
            .get_mut(..needed)
            .ok_or(CipherError::BufferTooSmall { needed, actual })?;

        out[..plain_text.len()].copy_from_slice(plain_text);
        pad_in_place(out, plain_text.len());
        encrypt_blocks(
            self.spec().mode(),
            &self.round_keys,
            self.key.init_vector(),
            out,
        );
        Ok(needed)
    }

    fn decrypt(&self, cipher_text: &[u8], plain_text: &mut [u8]) -> Result<usize> {
        let len = cipher_text.len();
        if len == 0 || len % BLOCK_BYTES != 0 {
            log::debug!("rejecting ciphertext of {len} bytes");
            return Err(CipherError::InvalidCiphertextLength { len });
        }

        let mut scratch = Zeroizing::new(cipher_text.to_vec());
        decrypt_blocks(
            self.spec().mode(),
            &self.round_keys,
            self.key.init_vector(),
            &mut scratch,
        );
        let recovered = unpadded_len(&scratch).map_err(|err| {
            log::debug!("padding check failed after {} decryption", self.spec());
            err
        })?;

        let actual = plain_text.len();
        let out = plain_text
            .get_mut(..recovered)
            .ok_or(CipherError::BufferTooSmall {
                needed: recovered,
                actual,
            })?;
        out.copy_from_slice(&scratch[..recovered]);
        Ok(recovered)
    }
}
