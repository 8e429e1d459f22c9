//! In-memory ledger store.

use dashmap::DashMap;

use divvy_core::group::{ExpenseEntry, GroupLedger, NewEntry, Participant};
use divvy_core::store::{LedgerStore, StoreError};
use divvy_shared::types::{EntryId, GroupId};

/// Process-local ledger store backed by a concurrent map.
///
/// Nothing survives the process; intended for tests and short-lived
/// embeddings. Mutations to one group are serialized by the map's
/// per-entry locking.
#[derive(Debug, Default)]
pub struct MemoryStore {
    groups: DashMap<GroupId, GroupLedger>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn roster(&self, group: GroupId) -> Result<Vec<Participant>, StoreError> {
        Ok(self
            .groups
            .get(&group)
            .map(|ledger| ledger.roster().to_vec())
            .unwrap_or_default())
    }

    fn entries(&self, group: GroupId) -> Result<Vec<ExpenseEntry>, StoreError> {
        Ok(self
            .groups
            .get(&group)
            .map(|ledger| ledger.entries().to_vec())
            .unwrap_or_default())
    }

    fn add_participant(&self, group: GroupId, participant: Participant) -> Result<(), StoreError> {
        let mut ledger = self.groups.entry(group).or_default();
        ledger.add_participant(participant)?;
        Ok(())
    }

    fn add_entry(&self, group: GroupId, entry: NewEntry) -> Result<EntryId, StoreError> {
        let mut ledger = self.groups.entry(group).or_default();
        let id = ledger.add_entry(entry)?;
        Ok(id)
    }

    fn clear_group(&self, group: GroupId) -> Result<(), StoreError> {
        self.groups.remove(&group);
        Ok(())
    }

    fn snapshot(&self, group: GroupId) -> Result<GroupLedger, StoreError> {
        // Single read under the entry lock, so roster and entries agree.
        Ok(self
            .groups
            .get(&group)
            .map(|ledger| ledger.clone())
            .unwrap_or_default())
    }
}
