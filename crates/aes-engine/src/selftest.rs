//! Known-answer checks against published AES vectors.

use aes_core::KeySize;
use thiserror::Error;

use crate::crypto::CryptoEngine;
use crate::engine::AesEngine;
use crate::key::CipherKey;
use crate::spec::{KeySpec, Mode};

/// A known-answer test did not reproduce its published output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("known-answer test failed for {spec}: {stage}")]
pub struct SelfTestFailure {
    /// Key size and mode under test.
    pub spec: KeySpec,
    /// Which step went wrong.
    pub stage: &'static str,
}

struct Vector {
    spec: KeySpec,
    key: &'static [u8],
    iv: [u8; 16],
    plain: [u8; 16],
    cipher: [u8; 16],
}

const FIPS_PLAIN: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

const SEQ_KEY_128: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

const SEQ_KEY_192: [u8; 24] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17,
];

const SEQ_KEY_256: [u8; 32] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
];

// FIPS-197 Appendix C and SP 800-38A F.2.1 (first block).
const VECTORS: [Vector; 4] = [
    Vector {
        spec: KeySpec::new(KeySize::Aes128, Mode::Ecb),
        key: &SEQ_KEY_128,
        iv: [0u8; 16],
        plain: FIPS_PLAIN,
        cipher: [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
            0xc5, 0x5a,
        ],
    },
    Vector {
        spec: KeySpec::new(KeySize::Aes192, Mode::Ecb),
        key: &SEQ_KEY_192,
        iv: [0u8; 16],
        plain: FIPS_PLAIN,
        cipher: [
            0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d,
            0x71, 0x91,
        ],
    },
    Vector {
        spec: KeySpec::new(KeySize::Aes256, Mode::Ecb),
        key: &SEQ_KEY_256,
        iv: [0u8; 16],
        plain: FIPS_PLAIN,
        cipher: [
            0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49,
            0x60, 0x89,
        ],
    },
    Vector {
        spec: KeySpec::new(KeySize::Aes128, Mode::Cbc),
        key: &[
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ],
        iv: [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ],
        plain: [
            0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93,
            0x17, 0x2a,
        ],
        cipher: [
            0x76, 0x49, 0xab, 0xac, 0x81, 0x19, 0xb2, 0x46, 0xce, 0xe9, 0x8e, 0x9b, 0x12, 0xe9,
            0x19, 0x7d,
        ],
    },
];

fn check(vector: &Vector) -> Result<(), SelfTestFailure> {
    let fail = |stage| SelfTestFailure {
        spec: vector.spec,
        stage,
    };
    let key = CipherKey::with_iv(vector.spec, vector.key, &vector.iv)
        .map_err(|_| fail("key construction"))?;
    let engine = AesEngine::new(key).map_err(|_| fail("key expansion"))?;

    let ct = engine
        .encrypt_to_vec(&vector.plain)
        .map_err(|_| fail("encrypt"))?;
    if ct.get(..16) != Some(&vector.cipher[..]) {
        return Err(fail("ciphertext mismatch"));
    }
    let pt = engine.decrypt_to_vec(&ct).map_err(|_| fail("decrypt"))?;
    if pt != vector.plain {
        return Err(fail("round trip mismatch"));
    }
    Ok(())
}

/// Runs the built-in known-answer tests for every key size and both modes.
pub fn self_test() -> Result<(), SelfTestFailure> {
    for vector in &VECTORS {
        check(vector)?;
        log::debug!("known-answer test passed for {}", vector.spec);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_vectors_pass() {
        assert_eq!(self_test(), Ok(()));
    }

    #[test]
    fn tampered_vector_is_reported() {
        let mut vector = Vector {
            spec: VECTORS[0].spec,
            key: VECTORS[0].key,
            iv: VECTORS[0].iv,
            plain: VECTORS[0].plain,
            cipher: VECTORS[0].cipher,
        };
        vector.cipher[0] ^= 1;
        let err = check(&vector).unwrap_err();
        assert_eq!(err.stage, "ciphertext mismatch");
        assert_eq!(err.spec.size(), KeySize::Aes128);
    }
}
