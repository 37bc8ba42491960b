//! In-memory container of fixed-size records keyed by normalized serial.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use menu_dat_core::{Role, SerialKey};

use crate::backup::backup_file;
use crate::error::{ContainerError, FormatError};
use crate::format::{
    ContainerHeader, HEADER_SIZE, INDEX_ENTRY_SIZE, IndexRecord, data_offset, index_end,
    starting_slot,
};
use crate::kind::{Artwork, Icon, Metadata, RecordKind};

/// BOX.DAT
pub type ArtworkStore = Container<Artwork>;
/// ICON.DAT
pub type IconStore = Container<Icon>;
/// META.DAT
pub type MetadataStore = Container<Metadata>;

/// Lifecycle of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerState {
    /// Nothing usable in memory. `error` holds the reason the last load failed.
    Unloaded { error: Option<String> },
    /// Entries are in memory. `dirty` is set by any mutation and cleared by a save.
    Loaded { dirty: bool },
}

/// One stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: SerialKey,
    slot: u32,
    payload: Vec<u8>,
}

impl Entry {
    pub fn key(&self) -> &SerialKey {
        &self.key
    }

    /// Slot assigned when the entry was last loaded or saved (0 for new entries).
    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// A boot-menu container of role `K`.
///
/// Entries keep insertion order; saving rewrites the whole file with slots
/// reassigned contiguously in that order.
#[derive(Debug, Clone)]
pub struct Container<K: RecordKind> {
    entries: Vec<Entry>,
    state: ContainerState,
    _kind: PhantomData<K>,
}

impl<K: RecordKind> Default for Container<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RecordKind> Container<K> {
    /// An empty, loaded container with no unsaved changes.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            state: ContainerState::Loaded { dirty: false },
            _kind: PhantomData,
        }
    }

    /// Load a container from `path`, returning the error if it is rejected.
    pub fn open(path: &Path) -> Result<Self, ContainerError> {
        let mut container = Self::new();
        container.load(path)?;
        Ok(container)
    }

    pub fn role(&self) -> Role {
        K::ROLE
    }

    pub fn record_size(&self) -> usize {
        K::RECORD_SIZE
    }

    pub fn state(&self) -> &ContainerState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ContainerState::Loaded { .. })
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.state, ContainerState::Loaded { dirty: true })
    }

    /// Reason the most recent load failed, if it did.
    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            ContainerState::Unloaded { error } => error.as_deref(),
            ContainerState::Loaded { .. } => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the in-memory contents with the container at `path`.
    ///
    /// The whole file is validated before any entry is accepted. On failure
    /// the container is left empty and unloaded, with the reason recorded.
    ///
    /// Index names are normalized on the way in, so records whose names
    /// normalize alike (`T-1` and `t1`) collapse into one entry, the later
    /// record winning. The next save writes only that entry, under its
    /// normalized name.
    pub fn load(&mut self, path: &Path) -> Result<(), ContainerError> {
        self.entries.clear();
        match read_entries(path, K::ROLE, K::RECORD_SIZE) {
            Ok(entries) => {
                log::debug!(
                    "Loaded {} {} entries from {}",
                    entries.len(),
                    K::ROLE,
                    path.display()
                );
                self.entries = entries;
                self.state = ContainerState::Loaded { dirty: false };
                Ok(())
            }
            Err(e) => {
                log::debug!("Failed to load {}: {}", path.display(), e);
                self.state = ContainerState::Unloaded {
                    error: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// Write every entry to `path`, replacing the file.
    ///
    /// Slots are reassigned contiguously starting at the first slot past the
    /// index table. On success the container has no unsaved changes.
    pub fn save(&mut self, path: &Path) -> Result<(), ContainerError> {
        self.ensure_loaded()?;

        let first = starting_slot(self.entries.len(), K::RECORD_SIZE);
        let slots: Vec<u32> = (0..self.entries.len())
            .map(|i| first + i as u32)
            .collect();

        let mut out = BufWriter::new(File::create(path)?);
        let header = ContainerHeader {
            record_size: K::RECORD_SIZE as u32,
            entry_count: self.entries.len() as u32,
        };
        out.write_all(&header.to_bytes())?;
        for (entry, &slot) in self.entries.iter().zip(&slots) {
            let record = IndexRecord {
                key: entry.key.clone(),
                slot,
            };
            out.write_all(&record.to_bytes())?;
        }

        let padding = data_offset(K::RECORD_SIZE, first) - index_end(self.entries.len());
        std::io::copy(&mut std::io::repeat(0).take(padding), &mut out)?;

        for entry in &self.entries {
            out.write_all(&entry.payload)?;
        }
        out.flush()?;

        for (entry, slot) in self.entries.iter_mut().zip(slots) {
            entry.slot = slot;
        }

        log::debug!(
            "Saved {} {} entries to {}",
            self.entries.len(),
            K::ROLE,
            path.display()
        );
        self.state = ContainerState::Loaded { dirty: false };
        Ok(())
    }

    /// Copy the existing file at `path` into `backup_dir`, then save.
    ///
    /// Returns the backup path, or `None` when there was nothing to back up
    /// (or the backup failed and `proceed_without_backup` allowed saving anyway).
    pub fn backup_and_save(
        &mut self,
        path: &Path,
        backup_dir: &Path,
        proceed_without_backup: bool,
    ) -> Result<Option<PathBuf>, ContainerError> {
        self.ensure_loaded()?;

        let backup = if path.exists() {
            match backup_file(path, backup_dir) {
                Ok(dest) => {
                    log::debug!("Backed up {} to {}", path.display(), dest.display());
                    Some(dest)
                }
                Err(e) if proceed_without_backup => {
                    log::warn!(
                        "Backup of {} failed ({}), saving without one",
                        path.display(),
                        e
                    );
                    None
                }
                Err(e) => {
                    return Err(ContainerError::BackupFailed {
                        path: path.to_path_buf(),
                        source: e,
                    });
                }
            }
        } else {
            None
        };

        self.save(path)?;
        Ok(backup)
    }

    /// Write a valid container file with no entries.
    pub fn create_empty_file(path: &Path) -> Result<(), ContainerError> {
        let header = ContainerHeader {
            record_size: K::RECORD_SIZE as u32,
            entry_count: 0,
        };
        fs::write(path, header.to_bytes())?;
        Ok(())
    }

    pub fn has_entry(&self, serial: &str) -> bool {
        self.get(serial).is_some()
    }

    /// Payload stored under the normalized form of `serial`.
    pub fn get(&self, serial: &str) -> Option<&[u8]> {
        let key = SerialKey::new(serial);
        self.position(&key).map(|i| self.entries[i].payload.as_slice())
    }

    /// Insert or replace the payload for `serial`.
    ///
    /// A replaced entry keeps its position; a new entry is appended.
    pub fn set(&mut self, serial: &str, payload: Vec<u8>) -> Result<(), ContainerError> {
        self.ensure_loaded()?;
        let key = SerialKey::new(serial);
        if key.is_empty() {
            return Err(ContainerError::EmptyKey);
        }
        if payload.len() != K::RECORD_SIZE {
            return Err(ContainerError::PayloadSize {
                expected: K::RECORD_SIZE,
                actual: payload.len(),
            });
        }
        self.upsert(key, payload);
        self.mark_dirty();
        Ok(())
    }

    /// Remove the entry for `serial`. Returns whether one was removed.
    pub fn delete(&mut self, serial: &str) -> Result<bool, ContainerError> {
        self.ensure_loaded()?;
        let key = SerialKey::new(serial);
        match self.position(&key) {
            Some(i) => {
                self.entries.remove(i);
                self.mark_dirty();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Copy entries from `other` into this container.
    ///
    /// Keys already present are left alone unless `overwrite` is set.
    /// Returns the number of entries added or replaced.
    pub fn merge_from(&mut self, other: &Self, overwrite: bool) -> Result<usize, ContainerError> {
        self.ensure_loaded()?;
        other.ensure_loaded()?;

        let mut changed = 0;
        for entry in &other.entries {
            if !overwrite && self.position(&entry.key).is_some() {
                continue;
            }
            self.upsert(entry.key.clone(), entry.payload.clone());
            changed += 1;
        }
        if changed > 0 {
            self.mark_dirty();
        }
        Ok(changed)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &SerialKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// `(key, payload)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SerialKey, &[u8])> {
        self.entries.iter().map(|e| (&e.key, e.payload.as_slice()))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn position(&self, key: &SerialKey) -> Option<usize> {
        self.entries.iter().position(|e| &e.key == key)
    }

    fn upsert(&mut self, key: SerialKey, payload: Vec<u8>) {
        match self.position(&key) {
            Some(i) => self.entries[i].payload = payload,
            None => self.entries.push(Entry {
                key,
                slot: 0,
                payload,
            }),
        }
    }

    fn ensure_loaded(&self) -> Result<(), ContainerError> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(ContainerError::NotLoaded)
        }
    }

    fn mark_dirty(&mut self) {
        self.state = ContainerState::Loaded { dirty: true };
    }
}

/// Read and validate a container file.
///
/// Every index record is checked before any payload is read, so a corrupt
/// file never yields a partial entry list.
fn read_entries(path: &Path, role: Role, record_size: usize) -> Result<Vec<Entry>, ContainerError> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    if file_len < HEADER_SIZE as u64 {
        return Err(FormatError::TruncatedHeader { actual: file_len }.into());
    }
    let mut header_buf = [0u8; HEADER_SIZE];
    file.read_exact(&mut header_buf)?;
    let header = ContainerHeader::parse(&header_buf)?;

    if header.record_size as usize != record_size {
        return Err(FormatError::RecordSize {
            expected: record_size as u32,
            found: header.record_size,
        }
        .into());
    }

    let index_end = header.index_end();
    if file_len < index_end {
        return Err(FormatError::TruncatedIndex {
            entries: header.entry_count,
            needed: index_end,
            actual: file_len,
        }
        .into());
    }

    let mut index_buf = vec![0u8; header.entry_count as usize * INDEX_ENTRY_SIZE];
    file.read_exact(&mut index_buf)?;
    let records: Vec<IndexRecord> = index_buf
        .chunks_exact(INDEX_ENTRY_SIZE)
        .map(IndexRecord::parse)
        .filter(|r| !r.key.is_empty())
        .collect();

    for record in &records {
        let start = data_offset(record_size, record.slot);
        if start < index_end {
            return Err(FormatError::OverlapsIndex {
                key: record.key.to_string(),
                slot: record.slot,
            }
            .into());
        }
        let end = start + record_size as u64;
        if end > file_len {
            return Err(FormatError::OutOfBounds {
                key: record.key.to_string(),
                slot: record.slot,
                end,
                len: file_len,
            }
            .into());
        }
    }

    let mut entries: Vec<Entry> = Vec::with_capacity(records.len());
    for record in records {
        file.seek(SeekFrom::Start(data_offset(record_size, record.slot)))?;
        let mut payload = vec![0u8; record_size];
        file.read_exact(&mut payload)?;

        match entries.iter_mut().find(|e| e.key == record.key) {
            Some(existing) => {
                log::warn!(
                    "Duplicate {} entry '{}' in {}; keeping slot {}",
                    role,
                    record.key,
                    path.display(),
                    record.slot
                );
                existing.slot = record.slot;
                existing.payload = payload;
            }
            None => entries.push(Entry {
                key: record.key,
                slot: record.slot,
                payload,
            }),
        }
    }
    Ok(entries)
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
