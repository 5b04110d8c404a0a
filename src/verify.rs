// src/verify.rs
//! Master password bootstrap and unlock
//!
//! The store carries a reserved `self` record whose secret is the master
//! passphrase encrypted under the key derived from itself. Unlocking means
//! deriving a candidate key from the typed passphrase, decrypting `self`
//! with it and comparing the result to what was typed. This comparison is
//! the only authentication the vault has, so record secrets are reachable
//! exclusively through a [`Session`], which only a `Ready` flow hands out.
//!
//! ```text
//! Uninitialized ─bootstrap─▶ Bootstrapping ─▶ Ready
//! Uninitialized ─unlock───▶ Unlocking ─────▶ Ready | Rejected
//! ```

use tracing::{debug, info, warn};

use crate::aliases::Passphrase;
use crate::consts::SELF_RECORD;
use crate::crypto::{is_v3_container, Cipher};
use crate::error::{Result, VaultError};
use crate::key_ops::{derive_key, Key};
use crate::prompt::Prompter;
use crate::record::Record;
use crate::store::RecordStore;

pub const NEW_PASSPHRASE_PROMPT: &str = "New password for password store: ";
pub const CONFIRM_PASSPHRASE_PROMPT: &str = "Again: ";
pub const MASTER_PASSPHRASE_PROMPT: &str = "Master password: ";

/// Observable state of a [`VerificationFlow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Uninitialized,
    Bootstrapping,
    Unlocking,
    Ready,
    Rejected,
}

pub struct VerificationFlow {
    cipher: Cipher,
    state: FlowState,
    key: Option<Key>,
}

impl std::fmt::Debug for VerificationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationFlow")
            .field("cipher", &self.cipher)
            .field("state", &self.state)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl VerificationFlow {
    pub fn new(cipher: Cipher) -> Self {
        Self {
            cipher,
            state: FlowState::Uninitialized,
            key: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == FlowState::Ready
    }

    /// First run: ask for a new master passphrase twice and write the `self` record
    ///
    /// The caller persists the store afterwards.
    pub fn bootstrap(&mut self, store: &mut RecordStore, prompter: &mut dyn Prompter) -> Result<()> {
        self.begin(FlowState::Bootstrapping)?;
        let outcome = self.run_bootstrap(store, prompter);
        self.finish(outcome)
    }

    /// Later runs: check a freshly typed passphrase against the `self` record
    pub fn unlock(&mut self, store: &RecordStore, prompter: &mut dyn Prompter) -> Result<()> {
        self.begin(FlowState::Unlocking)?;
        let outcome = self.run_unlock(store, prompter);
        if let Err(err) = &outcome {
            warn!(error = %err, "unlock rejected");
        }
        self.finish(outcome)
    }

    /// Access to record secrets; `None` unless the flow is `Ready`
    pub fn session(&self) -> Option<Session<'_>> {
        match (self.state, &self.key) {
            (FlowState::Ready, Some(key)) => Some(Session {
                key,
                cipher: &self.cipher,
            }),
            _ => None,
        }
    }

    fn begin(&mut self, next: FlowState) -> Result<()> {
        // Rejected is terminal for the invocation
        if self.state == FlowState::Rejected {
            return Err(VaultError::WrongMasterPassword);
        }
        self.state = next;
        Ok(())
    }

    fn finish(&mut self, outcome: Result<Key>) -> Result<()> {
        match outcome {
            Ok(key) => {
                self.key = Some(key);
                self.state = FlowState::Ready;
                Ok(())
            }
            Err(err) => {
                self.key = None;
                self.state = FlowState::Rejected;
                Err(err)
            }
        }
    }

    fn run_bootstrap(&self, store: &mut RecordStore, prompter: &mut dyn Prompter) -> Result<Key> {
        let first = Passphrase::new(prompter.prompt_secret(NEW_PASSPHRASE_PROMPT)?);
        let second = Passphrase::new(prompter.prompt_secret(CONFIRM_PASSPHRASE_PROMPT)?);
        if first.expose_secret() != second.expose_secret() {
            return Err(VaultError::PassphraseMismatch);
        }
        if first.expose_secret().is_empty() {
            return Err(VaultError::EmptyPassphrase);
        }

        let key = derive_key(first.expose_secret())?;
        let sealed = self.cipher.encrypt(&key, first.expose_secret())?;
        store.set(SELF_RECORD, Record::self_record(sealed))?;

        info!("created master password record");
        Ok(key)
    }

    fn run_unlock(&self, store: &RecordStore, prompter: &mut dyn Prompter) -> Result<Key> {
        let anchor = store
            .get(SELF_RECORD)
            .map_err(|_| VaultError::CorruptStore("missing master password record".into()))?;
        if !is_v3_container(&anchor.secret) {
            return Err(VaultError::CorruptStore(
                "master password record is not an AES Crypt v3 container".into(),
            ));
        }

        let entered = Passphrase::new(prompter.prompt_secret(MASTER_PASSPHRASE_PROMPT)?);
        let key = derive_key(entered.expose_secret())?;

        let stored = match self.cipher.decrypt(&key, &anchor.secret) {
            Ok(plain) => Passphrase::new(plain),
            Err(err) => {
                debug!(error = %err, "master password record did not decrypt");
                return Err(VaultError::WrongMasterPassword);
            }
        };
        if stored.expose_secret().as_bytes() != entered.expose_secret().as_bytes() {
            return Err(VaultError::WrongMasterPassword);
        }

        debug!("master password verified");
        Ok(key)
    }
}

/// Capability to seal and reveal record secrets under the verified key
#[derive(Clone, Copy)]
pub struct Session<'a> {
    key: &'a Key,
    cipher: &'a Cipher,
}

impl Session<'_> {
    /// Build a record whose secret is `password` encrypted under the master key
    pub fn seal(&self, name: &str, user: &str, password: &str) -> Result<Record> {
        let secret = self.cipher.encrypt(self.key, password)?;
        Ok(Record::new(name, user, secret))
    }

    /// Decrypt a record's secret
    pub fn reveal(&self, record: &Record) -> Result<String> {
        self.cipher.decrypt(self.key, &record.secret)
    }
}
