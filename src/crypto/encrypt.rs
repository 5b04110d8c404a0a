// src/crypto/encrypt.rs
use aescrypt_rs::aliases::Password;
use aescrypt_rs::encrypt;
use std::io::Cursor;

use crate::error::{Result, VaultError};
use crate::key_ops::{key_to_hex, Key};

/// Encrypt a plaintext string → AES-Crypt v3 ciphertext (in-memory)
pub fn encrypt_to_vec(key: &Key, plaintext: &str, kdf_iterations: u32) -> Result<Vec<u8>> {
    let password = Password::new(key_to_hex(key));
    let mut out = Vec::new();
    encrypt(
        Cursor::new(plaintext.as_bytes()),
        &mut out,
        &password,
        kdf_iterations,
    )
    .map_err(|e| VaultError::Encryption(e.to_string()))?;
    Ok(out)
}
