//! Reference AES implementation following FIPS-197.
//!
//! This crate provides:
//! - Key expansion for 128, 192 and 256-bit keys.
//! - Single-block encryption and decryption.
//!
//! All functions are pure: they take a schedule and a block and return a block,
//! so they can be called from any number of threads without coordination.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_BYTES};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::key::{KeySize, RoundKeys};
