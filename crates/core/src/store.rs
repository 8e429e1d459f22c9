//! Storage collaborator contract for group ledgers.
//!
//! The core defines the trait so reconciliation stays persistence-
//! agnostic; implementations live in the `divvy-store` crate.

use thiserror::Error;

use divvy_shared::types::{EntryId, GroupId};

use crate::group::{ExpenseEntry, GroupError, GroupLedger, NewEntry, Participant};

/// Errors surfaced by ledger stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation violated a group-ledger rule.
    #[error(transparent)]
    Group(#[from] GroupError),

    /// The backing file could not be read or written.
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be serialized or parsed.
    #[error("Store document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistent home of group ledgers.
///
/// Groups the store has never seen read as empty ledgers; the first
/// mutation creates them. Implementations serialize concurrent mutations
/// to the same group, and `snapshot` observes a single consistent state.
pub trait LedgerStore: Send + Sync {
    /// The group's roster in insertion order.
    fn roster(&self, group: GroupId) -> Result<Vec<Participant>, StoreError>;

    /// The group's expense entries in insertion order.
    fn entries(&self, group: GroupId) -> Result<Vec<ExpenseEntry>, StoreError>;

    /// Adds a participant to the group's roster.
    fn add_participant(&self, group: GroupId, participant: Participant) -> Result<(), StoreError>;

    /// Appends an expense entry and returns its assigned ID.
    fn add_entry(&self, group: GroupId, entry: NewEntry) -> Result<EntryId, StoreError>;

    /// Removes the group's roster and ledger entirely.
    fn clear_group(&self, group: GroupId) -> Result<(), StoreError>;

    /// A roster-plus-entries snapshot for one computation.
    ///
    /// The default composes the two reads; implementations that can do
    /// better should override it with a single atomic read.
    fn snapshot(&self, group: GroupId) -> Result<GroupLedger, StoreError> {
        Ok(GroupLedger::from_parts(
            self.roster(group)?,
            self.entries(group)?,
        ))
    }
}
