//! Source of unpredictable bytes for key and IV generation.

use rand::{CryptoRng, RngCore};

use crate::error::{CipherError, Result};

/// Fills buffers with cryptographically unpredictable bytes.
///
/// Implementations must fail rather than hand back predictable output when no
/// entropy is available. Sharing a source between threads is the source's own
/// concern; the engine only ever borrows it mutably for the duration of a call.
pub trait RandomSource {
    /// Overwrites all of `buf` with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(buf)
            .map_err(|err| CipherError::EntropyUnavailable(err.to_string()))
    }
}
