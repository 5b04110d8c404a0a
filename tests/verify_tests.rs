// tests/verify_tests.rs
mod common;
mod support;

use pwstore::consts::SELF_RECORD;
use pwstore::verify::{CONFIRM_PASSPHRASE_PROMPT, MASTER_PASSPHRASE_PROMPT, NEW_PASSPHRASE_PROMPT};
use pwstore::{FlowState, Record, RecordStore, VaultError, VerificationFlow};
use support::{test_cipher, ScriptedPrompter, TestStore};

#[test]
fn test_bootstrap_creates_store_with_only_self_record() {
    common::setup();
    let ts = TestStore::new();
    let mut flow = VerificationFlow::new(test_cipher());
    let mut prompter = ScriptedPrompter::new(&["hunter2", "hunter2"]);

    let store = RecordStore::load(&ts.path, &mut flow, &mut prompter).unwrap();

    assert_eq!(flow.state(), FlowState::Ready);
    assert_eq!(store.list(), vec![SELF_RECORD]);
    assert_eq!(store.get(SELF_RECORD).unwrap().user, "");
    assert_eq!(
        prompter.labels,
        vec![NEW_PASSPHRASE_PROMPT, CONFIRM_PASSPHRASE_PROMPT]
    );

    // persisted immediately
    let on_disk = RecordStore::read_from(&ts.path).unwrap();
    assert_eq!(on_disk.list(), vec![SELF_RECORD]);
}

#[test]
fn test_self_record_holds_passphrase_encrypted_under_its_own_key() {
    let ts = TestStore::new();
    let (store, flow) = ts.bootstrap("hunter2");
    let session = flow.session().unwrap();

    let anchor = store.get(SELF_RECORD).unwrap();
    assert!(!anchor.secret.windows(7).any(|w| w == b"hunter2"));
    assert_eq!(session.reveal(anchor).unwrap(), "hunter2");
}

#[test]
fn test_reopen_with_correct_passphrase_unlocks() {
    let ts = TestStore::new();
    ts.bootstrap("hunter2");

    let (_store, flow, unlocked) = ts.reopen("hunter2");
    unlocked.unwrap();
    assert_eq!(flow.state(), FlowState::Ready);
    assert!(flow.session().is_some());
}

#[test]
fn test_reopen_with_wrong_passphrase_is_rejected() {
    let ts = TestStore::new();
    ts.bootstrap("hunter2");

    let (_store, flow, unlocked) = ts.reopen("wrong");
    assert!(matches!(unlocked, Err(VaultError::WrongMasterPassword)));
    assert_eq!(flow.state(), FlowState::Rejected);
    assert!(flow.session().is_none());
}

#[test]
fn test_padding_equivalent_passphrase_still_fails_the_self_check() {
    // "hunter2a" derives the same key as "hunter2" but is not the stored passphrase
    let ts = TestStore::new();
    ts.bootstrap("hunter2");

    let (_store, flow, unlocked) = ts.reopen("hunter2a");
    assert!(matches!(unlocked, Err(VaultError::WrongMasterPassword)));
    assert!(flow.session().is_none());
}

#[test]
fn test_rejected_flow_stays_rejected() {
    let ts = TestStore::new();
    ts.bootstrap("hunter2");

    let (store, mut flow, _) = ts.reopen("wrong");
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);
    let retry = flow.unlock(&store, &mut prompter);

    assert!(matches!(retry, Err(VaultError::WrongMasterPassword)));
    assert_eq!(prompter.remaining(), 1, "no prompt after rejection");
    assert!(flow.session().is_none());
}

#[test]
fn test_mismatched_confirmation_fails_and_creates_no_file() {
    let ts = TestStore::new();
    let mut flow = VerificationFlow::new(test_cipher());
    let mut prompter = ScriptedPrompter::new(&["a", "b"]);

    let result = RecordStore::load(&ts.path, &mut flow, &mut prompter);

    assert!(matches!(result, Err(VaultError::PassphraseMismatch)));
    assert!(!ts.path.exists());
    assert_eq!(flow.state(), FlowState::Rejected);
}

#[test]
fn test_too_long_master_passphrase_fails_bootstrap() {
    let ts = TestStore::new();
    let long = "p".repeat(40);
    let mut flow = VerificationFlow::new(test_cipher());
    let mut prompter = ScriptedPrompter::new(&[long.as_str(), long.as_str()]);

    let result = RecordStore::load(&ts.path, &mut flow, &mut prompter);

    assert!(matches!(result, Err(VaultError::KeyTooLong { len: 40, .. })));
    assert!(!ts.path.exists());
}

#[test]
fn test_empty_master_passphrase_fails_bootstrap() {
    let ts = TestStore::new();
    let mut flow = VerificationFlow::new(test_cipher());
    let mut prompter = ScriptedPrompter::new(&["", ""]);

    let result = RecordStore::load(&ts.path, &mut flow, &mut prompter);
    assert!(matches!(result, Err(VaultError::EmptyPassphrase)));
    assert!(!ts.path.exists());
}

#[test]
fn test_existing_store_load_does_not_prompt() {
    let ts = TestStore::new();
    ts.bootstrap("hunter2");

    let mut flow = VerificationFlow::new(test_cipher());
    let mut prompter = ScriptedPrompter::new(&[]);
    RecordStore::load(&ts.path, &mut flow, &mut prompter).unwrap();

    assert_eq!(flow.state(), FlowState::Uninitialized);
    assert!(prompter.labels.is_empty());
}

#[test]
fn test_unlock_prompts_once_for_master_passphrase() {
    let ts = TestStore::new();
    ts.bootstrap("hunter2");

    let store = RecordStore::read_from(&ts.path).unwrap();
    let mut flow = VerificationFlow::new(test_cipher());
    let mut prompter = ScriptedPrompter::new(&["hunter2"]);
    flow.unlock(&store, &mut prompter).unwrap();

    assert_eq!(prompter.labels, vec![MASTER_PASSPHRASE_PROMPT]);
}

#[test]
fn test_unlock_without_self_record_is_corrupt_store() {
    let ts = TestStore::new();
    let (mut store, _) = ts.bootstrap("hunter2");
    store.delete(SELF_RECORD).unwrap();
    store.save(&ts.path).unwrap();

    let (_store, flow, unlocked) = ts.reopen("hunter2");
    assert!(matches!(unlocked, Err(VaultError::CorruptStore(_))));
    assert!(flow.session().is_none());
}

#[test]
fn test_unlock_with_damaged_self_record_is_rejected() {
    let ts = TestStore::new();
    let (mut store, _) = ts.bootstrap("hunter2");
    let mut anchor = store.delete(SELF_RECORD).unwrap();
    let last = anchor.secret.len() - 1;
    anchor.secret[last] ^= 0xff;
    store.set(SELF_RECORD, anchor).unwrap();
    store.save(&ts.path).unwrap();

    let (_store, _flow, unlocked) = ts.reopen("hunter2");
    assert!(matches!(unlocked, Err(VaultError::WrongMasterPassword)));
}

#[test]
fn test_unlock_with_plaintext_self_record_is_corrupt_store() {
    let ts = TestStore::new();
    let (mut store, _) = ts.bootstrap("hunter2");
    store.delete(SELF_RECORD).unwrap();
    store
        .set(SELF_RECORD, Record::self_record(b"hunter2".to_vec()))
        .unwrap();
    store.save(&ts.path).unwrap();

    let (_store, flow, unlocked) = ts.reopen("hunter2");
    assert!(matches!(unlocked, Err(VaultError::CorruptStore(_))));
    assert!(flow.session().is_none());
}

#[test]
fn test_unlocked_session_reads_what_bootstrap_session_sealed() {
    let ts = TestStore::new();
    let (_, boot_flow) = ts.bootstrap("hunter2");
    let sealed = boot_flow
        .session()
        .unwrap()
        .seal("mail", "alice", "s3cret")
        .unwrap();

    let (_, flow, unlocked) = ts.reopen("hunter2");
    unlocked.unwrap();
    assert_eq!(flow.session().unwrap().reveal(&sealed).unwrap(), "s3cret");
}

#[test]
fn test_flow_debug_redacts_key() {
    let ts = TestStore::new();
    let (_, flow) = ts.bootstrap("hunter2");
    let shown = format!("{flow:?}");
    assert!(shown.contains("[REDACTED]"));
    assert!(!shown.contains("hunter2"));
}
