// src/lib.rs
//! pwstore — a local, single-user password store
//!
//! Features:
//! - Master key derived from the master password, never persisted
//! - Every secret sealed in an AES Crypt v3 container
//! - Self-verifying unlock against a reserved `self` record
//! - Atomic store replacement on save
//! - secure-gate secret types for keys and passphrases

pub mod aliases;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod key_ops;
pub mod prompt;
pub mod record;
pub mod store;
pub mod verify;

#[cfg(feature = "cli")]
pub mod cli;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{DerivedKey32, Passphrase};
pub use config::load as load_config;
pub use crypto::Cipher;
pub use error::{Result, VaultError};
pub use key_ops::derive_key;
pub use record::Record;
pub use store::RecordStore;
pub use verify::{FlowState, Session, VerificationFlow};
