//! Key material and initialization vector bound to a [`KeySpec`].

use core::fmt;

use aes_core::{Block, BLOCK_BYTES};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CipherError, Result};
use crate::random::RandomSource;
use crate::spec::KeySpec;

/// AES key plus the one-block IV used by chaining modes.
///
/// The key length always equals `spec.key_bytes()`; the IV is always one block
/// (16 bytes) regardless of key size. `Clone` makes a deep copy of both. Key
/// material and IV are wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey {
    #[zeroize(skip)]
    spec: KeySpec,
    key: Vec<u8>,
    iv: Block,
}

impl CipherKey {
    /// Draws fresh key material and IV from `rng`.
    pub fn generate<R: RandomSource + ?Sized>(spec: KeySpec, rng: &mut R) -> Result<Self> {
        // Unsupported sizes must fail here, never fall through to a zero key.
        let spec = KeySpec::from_bits(spec.bits(), spec.mode())?;

        let mut key = vec![0u8; spec.key_bytes()];
        let mut iv = [0u8; BLOCK_BYTES];
        rng.fill(&mut key)?;
        rng.fill(&mut iv)?;
        log::debug!("generated fresh {spec} key");
        Ok(Self { spec, key, iv })
    }

    /// Copies key material from `bytes` with an all-zero IV.
    ///
    /// Exactly `spec.key_bytes()` bytes are taken from the front of `bytes`;
    /// a shorter buffer is rejected. The zero IV is fine for ECB, which never
    /// reads it, but CBC callers must follow up with
    /// [`CipherKey::set_init_vector`] or build the key with
    /// [`CipherKey::with_iv`] instead.
    pub fn from_bytes(spec: KeySpec, bytes: &[u8]) -> Result<Self> {
        let expected = spec.key_bytes();
        let key = bytes
            .get(..expected)
            .ok_or(CipherError::KeyLengthMismatch {
                expected,
                actual: bytes.len(),
            })?
            .to_vec();
        Ok(Self {
            spec,
            key,
            iv: [0u8; BLOCK_BYTES],
        })
    }

    /// Copies key material and IV from caller-supplied buffers.
    pub fn with_iv(spec: KeySpec, key: &[u8], iv: &[u8]) -> Result<Self> {
        let mut out = Self::from_bytes(spec, key)?;
        out.set_init_vector(iv)?;
        Ok(out)
    }

    /// Replaces the IV. Key material is left untouched.
    pub fn set_init_vector(&mut self, iv: &[u8]) -> Result<()> {
        self.iv = iv.try_into().map_err(|_| CipherError::IvLengthMismatch {
            expected: BLOCK_BYTES,
            actual: iv.len(),
        })?;
        Ok(())
    }

    /// Key length in bytes.
    pub fn key_length(&self) -> usize {
        self.key.len()
    }

    /// Key size and mode this key was built for.
    pub fn key_type(&self) -> KeySpec {
        self.spec
    }

    /// Read-only view of the key material.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Current initialization vector.
    pub fn init_vector(&self) -> &Block {
        &self.iv
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("spec", &self.spec)
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}
