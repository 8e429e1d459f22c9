//! JSON file-backed ledger store.
//!
//! Every group ledger lives in one JSON document: a map from group ID to
//! ledger. The document is read once when the store opens and rewritten
//! after every mutation, which keeps the on-disk state inspectable and
//! hand-editable. Documents edited to violate ledger rules are accepted
//! here; the balance calculator surfaces them as data-integrity errors.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use divvy_core::group::{ExpenseEntry, GroupLedger, NewEntry, Participant};
use divvy_core::store::{LedgerStore, StoreError};
use divvy_shared::types::{EntryId, GroupId};

/// Ledger store persisting all groups to a single JSON file.
///
/// Mutations take the write lock across the in-memory update and the file
/// rewrite, so the document on disk is never torn between two writers.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    groups: RwLock<HashMap<GroupId, GroupLedger>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading the document if it exists.
    ///
    /// A missing file reads as an empty store; the first mutation creates
    /// it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read,
    /// `StoreError::Serialization` if it cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let groups = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            groups: RwLock::new(groups),
        })
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, groups: &HashMap<GroupId, GroupLedger>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(groups)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl LedgerStore for JsonFileStore {
    fn roster(&self, group: GroupId) -> Result<Vec<Participant>, StoreError> {
        let groups = self.groups.read().unwrap_or_else(PoisonError::into_inner);
        Ok(groups
            .get(&group)
            .map(|ledger| ledger.roster().to_vec())
            .unwrap_or_default())
    }

    fn entries(&self, group: GroupId) -> Result<Vec<ExpenseEntry>, StoreError> {
        let groups = self.groups.read().unwrap_or_else(PoisonError::into_inner);
        Ok(groups
            .get(&group)
            .map(|ledger| ledger.entries().to_vec())
            .unwrap_or_default())
    }

    fn add_participant(&self, group: GroupId, participant: Participant) -> Result<(), StoreError> {
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        groups.entry(group).or_default().add_participant(participant)?;
        self.persist(&groups)
    }

    fn add_entry(&self, group: GroupId, entry: NewEntry) -> Result<EntryId, StoreError> {
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        let id = groups.entry(group).or_default().add_entry(entry)?;
        self.persist(&groups)?;
        Ok(id)
    }

    fn clear_group(&self, group: GroupId) -> Result<(), StoreError> {
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        if groups.remove(&group).is_some() {
            self.persist(&groups)?;
        }
        Ok(())
    }

    fn snapshot(&self, group: GroupId) -> Result<GroupLedger, StoreError> {
        let groups = self.groups.read().unwrap_or_else(PoisonError::into_inner);
        Ok(groups.get(&group).cloned().unwrap_or_default())
    }
}
