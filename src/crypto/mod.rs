// src/crypto/mod.rs
//! Symmetric encryption of stored secrets: no file I/O, no store access
//!
//! Every secret is sealed into an AES Crypt v3 container. The 32-byte master
//! key is hex-encoded and used as the container password; the container runs
//! PBKDF2 over it and authenticates the payload with an HMAC, so a wrong key
//! normally surfaces as `VaultError::Decryption` rather than garbage.
mod decrypt;
mod encrypt;

pub use decrypt::decrypt_to_string;
pub use encrypt::encrypt_to_vec;

use crate::consts::DEFAULT_KDF_ITERATIONS;
use crate::error::Result;
use crate::key_ops::Key;

/// Encrypt/decrypt strings under a derived key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    kdf_iterations: u32,
}

impl Cipher {
    /// Cipher whose containers are stretched with `kdf_iterations` rounds of PBKDF2
    pub fn with_iterations(kdf_iterations: u32) -> Self {
        Self { kdf_iterations }
    }

    pub fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations
    }

    pub fn encrypt(&self, key: &Key, plaintext: &str) -> Result<Vec<u8>> {
        encrypt_to_vec(key, plaintext, self.kdf_iterations)
    }

    /// Decrypt a container; the iteration count is read from its header
    pub fn decrypt(&self, key: &Key, ciphertext: &[u8]) -> Result<String> {
        decrypt_to_string(key, ciphertext)
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::with_iterations(DEFAULT_KDF_ITERATIONS)
    }
}

/// Check whether a stored secret looks like an AES Crypt v3 container
pub fn is_v3_container(data: &[u8]) -> bool {
    data.starts_with(crate::consts::AESCRYPT_V3_HEADER)
}
