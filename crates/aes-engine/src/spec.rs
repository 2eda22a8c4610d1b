//! Key specification: key size plus mode of operation.

use core::fmt;
use core::str::FromStr;

use aes_core::{KeySize, BLOCK_BYTES};

use crate::error::{CipherError, Result};

/// Block-cipher mode of operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook: every block is encrypted on its own.
    ///
    /// Identical plaintext blocks produce identical ciphertext blocks under the
    /// same key. Pick [`Mode::Cbc`] when patterns in the data must not show.
    #[default]
    Ecb,
    /// Cipher block chaining: each block is XORed with the previous ciphertext
    /// block (the IV for the first one) before encryption.
    Cbc,
}

impl Mode {
    /// Whether the mode consumes the key's initialization vector.
    pub const fn needs_iv(self) -> bool {
        matches!(self, Mode::Cbc)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            other => Err(format!("unknown mode `{other}` (expected ecb or cbc)")),
        }
    }
}

/// Key size and mode chosen for a key. Immutable once a key is built from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeySpec {
    size: KeySize,
    mode: Mode,
}

impl KeySpec {
    /// Builds a spec from a known key size.
    pub const fn new(size: KeySize, mode: Mode) -> Self {
        Self { size, mode }
    }

    /// Builds a spec from a bit length, rejecting anything but 128, 192 or 256.
    pub fn from_bits(bits: u32, mode: Mode) -> Result<Self> {
        KeySize::from_bits(bits)
            .map(|size| Self::new(size, mode))
            .ok_or(CipherError::InvalidKeySize { bits })
    }

    /// Key size variant.
    pub const fn size(&self) -> KeySize {
        self.size
    }

    /// Mode of operation.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Key length in bits.
    pub const fn bits(&self) -> u32 {
        self.size.bits()
    }

    /// Key length in bytes: 16, 24 or 32.
    pub const fn key_bytes(&self) -> usize {
        self.size.key_bytes()
    }

    /// Block length in bytes. Always 16, whatever the key size.
    pub const fn block_bytes(&self) -> usize {
        BLOCK_BYTES
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.size, self.mode)
    }
}
