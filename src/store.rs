// src/store.rs
//! In-memory record store with point-in-time persistence
//!
//! The store is the only owner of record values for the lifetime of a
//! process. On disk it is a stream of JSON records, one per line; loading
//! re-inserts each record through [`RecordStore::set`], so a file with a
//! duplicated name fails instead of silently keeping one of them.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, VaultError};
use crate::prompt::Prompter;
use crate::record::Record;
use crate::verify::VerificationFlow;

#[derive(Debug, Default)]
pub struct RecordStore {
    entries: BTreeMap<String, Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store at `path`, bootstrapping a new one if the file is absent
    ///
    /// A fresh store is persisted right after bootstrap; `flow` is left in
    /// `Ready` in that case. If bootstrap fails nothing is written.
    pub fn load<P: AsRef<Path>>(
        path: P,
        flow: &mut VerificationFlow,
        prompter: &mut dyn Prompter,
    ) -> Result<Self> {
        let path = path.as_ref();
        if !path.try_exists()? {
            info!(path = %path.display(), "password store does not exist, creating one");
            let mut store = Self::new();
            flow.bootstrap(&mut store, prompter)?;
            store.save(path)?;
            return Ok(store);
        }
        Self::read_from(path)
    }

    /// Decode an existing store file
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let mut store = Self::new();
        for record in serde_json::Deserializer::from_reader(reader).into_iter::<Record>() {
            let record = record.map_err(|e| match e.classify() {
                serde_json::error::Category::Io => VaultError::Io(e.into()),
                _ => VaultError::CorruptStore(e.to_string()),
            })?;
            store.set(record.name.clone(), record)?;
        }

        debug!(path = %path.display(), records = store.len(), "loaded password store");
        Ok(store)
    }

    /// Serialize every record to `path`, replacing the previous file atomically
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // Same directory as the target so the final rename stays on one filesystem
        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            for record in self.entries.values() {
                serde_json::to_writer(&mut writer, record)
                    .map_err(|e| VaultError::Io(e.into()))?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| VaultError::Io(e.error))?;

        debug!(path = %path.display(), records = self.len(), "saved password store");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Record> {
        self.entries
            .get(name)
            .ok_or_else(|| VaultError::EntryNotFound(name.to_string()))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert a new record. Never overwrites: update means `delete` then `set`.
    ///
    /// `name` must equal `record.name`, since `save` only writes records and
    /// loading keys them by their own name.
    pub fn set(&mut self, name: impl Into<String>, record: Record) -> Result<()> {
        let name = name.into();
        if name.is_empty() || name != record.name {
            return Err(VaultError::InvalidName(name));
        }
        if self.exists(&name) {
            return Err(VaultError::EntryAlreadyExists(name));
        }
        self.entries.insert(name, record);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.entries
            .remove(name)
            .ok_or_else(|| VaultError::EntryNotFound(name.to_string()))
    }

    /// All record names, in ascending order
    pub fn list(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
