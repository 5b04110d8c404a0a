// tests/support.rs
//! Test doubles for the prompt and clipboard, plus temp store helpers

use std::collections::VecDeque;
use std::path::PathBuf;

use pwstore::clipboard::ClipboardSink;
use pwstore::prompt::Prompter;
use pwstore::{Cipher, RecordStore, VaultError, VerificationFlow};
use tempfile::TempDir;

/// One PBKDF2 round keeps the AES Crypt containers fast in tests
#[allow(dead_code)]
pub fn test_cipher() -> Cipher {
    Cipher::with_iterations(1)
}

/// Answers prompts from a fixed script, in order, and records the labels it saw
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub labels: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            labels: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, label: &str) -> pwstore::Result<String> {
        self.labels.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| VaultError::Prompt("script exhausted".into()))
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_secret(&mut self, label: &str) -> pwstore::Result<String> {
        self.next(label)
    }

    fn prompt_line(&mut self, label: &str) -> pwstore::Result<String> {
        self.next(label)
    }
}

#[allow(dead_code)]
/// Clipboard that remembers what was written
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> pwstore::Result<()> {
        if self.fail {
            return Err(VaultError::Clipboard("no display".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A temp directory holding a (not yet existing) store file
#[allow(dead_code)]
pub struct TestStore {
    pub dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("Store");
        Self { dir, path }
    }

    /// Create the store with `passphrase` and return it with a ready flow
    pub fn bootstrap(&self, passphrase: &str) -> (RecordStore, VerificationFlow) {
        let mut flow = VerificationFlow::new(test_cipher());
        let mut prompter = ScriptedPrompter::new(&[passphrase, passphrase]);
        let store = RecordStore::load(&self.path, &mut flow, &mut prompter).expect("bootstrap");
        (store, flow)
    }

    /// Reopen the existing store and unlock it with `passphrase`
    pub fn reopen(&self, passphrase: &str) -> (RecordStore, VerificationFlow, pwstore::Result<()>) {
        let mut flow = VerificationFlow::new(test_cipher());
        let mut prompter = ScriptedPrompter::new(&[passphrase]);
        let store = RecordStore::load(&self.path, &mut flow, &mut prompter).expect("load");
        let unlocked = flow.unlock(&store, &mut prompter);
        (store, flow, unlocked)
    }
}
