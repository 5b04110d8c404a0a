// src/error.rs
//! Public error type for the entire crate
//!
//! Messages are shown to the user verbatim and must never carry secret material.

use aescrypt_rs::AescryptError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("entry already exists: {0}")]
    EntryAlreadyExists(String),

    #[error("invalid entry name: {0:?}")]
    InvalidName(String),

    #[error("entry {0} is reserved for the master password")]
    ReservedEntry(String),

    #[error("password can be max {max} bytes but is {len} bytes")]
    KeyTooLong { len: usize, max: usize },

    #[error("passwords do not match")]
    PassphraseMismatch,

    #[error("empty password not allowed")]
    EmptyPassphrase,

    #[error("wrong master password")]
    WrongMasterPassword,

    #[error("password store is corrupt: {0}")]
    CorruptStore(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("failed to read input: {0}")]
    Prompt(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AescryptError> for VaultError {
    fn from(err: AescryptError) -> Self {
        VaultError::Decryption(err.to_string())
    }
}

impl From<toml::de::Error> for VaultError {
    fn from(err: toml::de::Error) -> Self {
        VaultError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
