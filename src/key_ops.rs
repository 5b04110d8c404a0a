// src/key_ops.rs
//! Master key derivation
//!
//! The passphrase is right-padded with `KEY_PAD_BYTE` to exactly `KEY_LEN`
//! bytes. This is a deterministic stretch, not a password hash: the same
//! passphrase always yields the same key. Resistance against guessing comes
//! from the PBKDF2 layer of the cipher container (see `crate::crypto`).

use crate::aliases::DerivedKey32;
use crate::consts::{KEY_LEN, KEY_PAD_BYTE};
use crate::error::{Result, VaultError};

pub type Key = DerivedKey32;

/// Derive the 32-byte master key from a passphrase
pub fn derive_key(passphrase: &str) -> Result<Key> {
    let bytes = passphrase.as_bytes();
    if bytes.len() > KEY_LEN {
        return Err(VaultError::KeyTooLong {
            len: bytes.len(),
            max: KEY_LEN,
        });
    }

    let mut padded = [KEY_PAD_BYTE; KEY_LEN];
    padded[..bytes.len()].copy_from_slice(bytes);
    Ok(Key::new(padded))
}

/// Hex form of a key, as handed to the AES Crypt container
pub(crate) fn key_to_hex(key: &Key) -> String {
    hex::encode(key.expose_secret())
}
