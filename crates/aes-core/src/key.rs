//! Key sizes and expanded round keys.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;

/// Largest schedule: AES-256 uses 14 rounds, so 15 round keys.
pub(crate) const MAX_ROUND_KEYS: usize = 15;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    #[default]
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All supported sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Key length in bits.
    pub const fn bits(self) -> u32 {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    /// Key length in bytes (16, 24 or 32).
    pub const fn key_bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Number of 32-bit words in the key (`Nk`).
    pub const fn key_words(self) -> usize {
        self.key_bytes() / 4
    }

    /// Number of cipher rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.key_words() + 6
    }

    /// Maps a bit length to a key size.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            128 => Some(KeySize::Aes128),
            192 => Some(KeySize::Aes192),
            256 => Some(KeySize::Aes256),
            _ => None,
        }
    }

    /// Maps a key length in bytes to a key size.
    pub const fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(KeySize::Aes128),
            24 => Some(KeySize::Aes192),
            32 => Some(KeySize::Aes256),
            _ => None,
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Expanded round keys for one AES key.
///
/// Only the first `rounds() + 1` entries are meaningful. The material is wiped
/// on drop and never shown by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    #[zeroize(skip)]
    size: KeySize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUND_KEYS], size: KeySize) -> Self {
        Self { keys, size }
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        debug_assert!(round <= self.rounds());
        &self.keys[round]
    }

    /// Number of cipher rounds this schedule drives.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Key size the schedule was expanded from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .field("keys", &"<redacted>")
            .finish()
    }
}
