//! AES encryption of arbitrary-length byte buffers.
//!
//! Build a [`KeySpec`], create a [`CipherKey`] from caller bytes or a
//! [`RandomSource`], hand it to an [`AesEngine`], then use the
//! [`CryptoEngine`] methods:
//!
//! ```
//! use aes_engine::{AesEngine, CipherKey, CryptoEngine, KeySize, KeySpec, Mode};
//! use rand::rngs::OsRng;
//!
//! let spec = KeySpec::new(KeySize::Aes256, Mode::Cbc);
//! let key = CipherKey::generate(spec, &mut OsRng)?;
//! let engine = AesEngine::new(key)?;
//!
//! let ct = engine.encrypt_to_vec(b"attack at dawn")?;
//! assert_eq!(ct.len(), engine.output_text_size(14));
//! assert_eq!(engine.decrypt_to_vec(&ct)?, b"attack at dawn");
//! # Ok::<(), aes_engine::CipherError>(())
//! ```
//!
//! Padding is PKCS#7 and always adds at least one byte. ECB leaks equal
//! plaintext blocks as equal ciphertext blocks; prefer CBC unless that is
//! acceptable. Neither mode authenticates the ciphertext.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod crypto;
mod engine;
mod error;
mod key;
mod mode;
mod padding;
mod random;
mod selftest;
mod spec;

pub use aes_core::{KeySize, BLOCK_BYTES};

pub use crate::crypto::CryptoEngine;
pub use crate::engine::AesEngine;
pub use crate::error::{CipherError, Result};
pub use crate::key::CipherKey;
pub use crate::padding::padded_len;
pub use crate::random::RandomSource;
pub use crate::selftest::{self_test, SelfTestFailure};
pub use crate::spec::{KeySpec, Mode};
