//! Capability interface shared by buffer ciphers.

use crate::error::Result;

/// A cipher that turns arbitrary-length plaintext into ciphertext and back.
///
/// Callers should program against this trait (for example through
/// `Box<dyn CryptoEngine>`) rather than against a concrete cipher.
pub trait CryptoEngine {
    /// Bytes `encrypt` writes for a plaintext of `plain_text_size` bytes.
    fn output_text_size(&self, plain_text_size: usize) -> usize;

    /// Encrypts `plain_text` into the front of `cipher_text` and returns the
    /// number of bytes written.
    ///
    /// `cipher_text` must hold at least `output_text_size(plain_text.len())`
    /// bytes.
    fn encrypt(&self, plain_text: &[u8], cipher_text: &mut [u8]) -> Result<usize>;

    /// Decrypts `cipher_text` into the front of `plain_text` and returns the
    /// recovered length.
    fn decrypt(&self, cipher_text: &[u8], plain_text: &mut [u8]) -> Result<usize>;

    /// Allocating form of [`CryptoEngine::encrypt`].
    fn encrypt_to_vec(&self, plain_text: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.output_text_size(plain_text.len())];
        let written = self.encrypt(plain_text, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    /// Allocating form of [`CryptoEngine::decrypt`].
    fn decrypt_to_vec(&self, cipher_text: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; cipher_text.len()];
        let written = self.decrypt(cipher_text, &mut out)?;
        out.truncate(written);
        Ok(out)
    }
}
