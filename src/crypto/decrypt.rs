// src/crypto/decrypt.rs
use aescrypt_rs::aliases::Password;
use aescrypt_rs::decrypt;
use std::io::Cursor;

use crate::error::{Result, VaultError};
use crate::key_ops::{key_to_hex, Key};

/// Decrypt AES-Crypt ciphertext → plaintext string (in-memory)
///
/// Fails with `VaultError::Decryption` on a wrong key, a damaged container,
/// or a payload that is not UTF-8.
pub fn decrypt_to_string(key: &Key, ciphertext: &[u8]) -> Result<String> {
    let password = Password::new(key_to_hex(key));
    let mut out = Vec::new();
    decrypt(Cursor::new(ciphertext), &mut out, &password)?;
    String::from_utf8(out).map_err(|_| VaultError::Decryption("payload is not UTF-8".into()))
}
