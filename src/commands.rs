// src/commands.rs
//! What one invocation does once the master password has been verified
//!
//! This is the policy layer between the command line and the store: it owns
//! the rule that the `self` record can never be deleted or replaced, and
//! that revealed passwords go to the clipboard and never to `out`.

use std::io::Write;

use tracing::info;

use crate::aliases::Passphrase;
use crate::clipboard::ClipboardSink;
use crate::consts::SELF_RECORD;
use crate::error::{Result, VaultError};
use crate::prompt::Prompter;
use crate::record::Record;
use crate::store::RecordStore;
use crate::verify::Session;

pub const USER_PROMPT: &str = "User: ";
pub const PASSWORD_PROMPT: &str = "Password: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Get(String),
    Add(String),
    Delete(String),
    Update(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed(usize),
    Copied,
    Added,
    /// `Add` on a name that is already taken; nothing changed
    AlreadyExists,
    Deleted,
    Updated,
}

/// Everything an action may touch besides the store
pub struct Io<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub clipboard: &'a mut dyn ClipboardSink,
    pub out: &'a mut dyn Write,
}

pub fn execute(
    action: &Action,
    store: &mut RecordStore,
    session: Session<'_>,
    io: &mut Io<'_>,
) -> Result<Outcome> {
    match action {
        Action::List => list(store, io),
        Action::Get(name) => get(name, store, session, io),
        Action::Add(name) => add(name, store, session, io),
        Action::Delete(name) => delete(name, store),
        Action::Update(name) => update(name, store, session, io),
    }
}

fn list(store: &RecordStore, io: &mut Io<'_>) -> Result<Outcome> {
    let names = store.list();
    for (i, name) in names.iter().enumerate() {
        writeln!(io.out, "[{i}]: {name}")?;
    }
    Ok(Outcome::Listed(names.len()))
}

fn get(name: &str, store: &RecordStore, session: Session<'_>, io: &mut Io<'_>) -> Result<Outcome> {
    let record = store.get(name)?;
    let password = Passphrase::new(session.reveal(record)?);
    io.clipboard.write_text(password.expose_secret())?;
    writeln!(io.out, "Username for {name} is {}", record.user)?;
    writeln!(io.out, "Password copied to clipboard")?;
    Ok(Outcome::Copied)
}

fn add(name: &str, store: &mut RecordStore, session: Session<'_>, io: &mut Io<'_>) -> Result<Outcome> {
    if store.exists(name) {
        writeln!(io.out, "Entry {name} already exists!")?;
        return Ok(Outcome::AlreadyExists);
    }
    let record = read_record(name, session, io)?;
    store.set(name, record)?;
    info!(entry = name, "added entry");
    Ok(Outcome::Added)
}

fn delete(name: &str, store: &mut RecordStore) -> Result<Outcome> {
    guard_reserved(name)?;
    store.delete(name)?;
    info!(entry = name, "deleted entry");
    Ok(Outcome::Deleted)
}

fn update(name: &str, store: &mut RecordStore, session: Session<'_>, io: &mut Io<'_>) -> Result<Outcome> {
    guard_reserved(name)?;
    if !store.exists(name) {
        return Err(VaultError::EntryNotFound(name.to_string()));
    }
    // Prompt before touching the store so a failed prompt keeps the old entry
    let record = read_record(name, session, io)?;
    store.delete(name)?;
    store.set(name, record)?;
    info!(entry = name, "updated entry");
    Ok(Outcome::Updated)
}

fn read_record(name: &str, session: Session<'_>, io: &mut Io<'_>) -> Result<Record> {
    let user = io.prompter.prompt_line(USER_PROMPT)?;
    let password = Passphrase::new(io.prompter.prompt_secret(PASSWORD_PROMPT)?);
    session.seal(name, &user, password.expose_secret())
}

fn guard_reserved(name: &str) -> Result<()> {
    if name == SELF_RECORD {
        return Err(VaultError::ReservedEntry(name.to_string()));
    }
    Ok(())
}
