//! Reconciliation service: the read model presentation layers call.

use divvy_shared::types::GroupId;

use super::balance::BalanceCalculator;
use super::error::ReconcileError;
use super::planner::SettlementPlanner;
use super::types::ReconcileReport;
use crate::store::LedgerStore;

/// Computes settlement read models for groups held by a ledger store.
///
/// Stateless between calls: every `reconcile` derives a fresh report from
/// the latest snapshot, so an unchanged ledger yields an identical report.
pub struct ReconcileService<S> {
    store: S,
}

impl<S: LedgerStore> ReconcileService<S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Computes balances and the transfer plan for `group`.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::EmptyRoster` when the group has no
    /// participants, `ReconcileError::UnknownParticipant` when the stored
    /// ledger references a payer outside the roster,
    /// `ReconcileError::Imbalance` when the plan cannot discharge the
    /// balances, and `ReconcileError::Store` when the snapshot fails to
    /// load.
    pub fn reconcile(&self, group: GroupId) -> Result<ReconcileReport, ReconcileError> {
        let ledger = self.store.snapshot(group)?;
        let balances = BalanceCalculator::compute(ledger.roster(), ledger.entries())?;
        let transfers = SettlementPlanner::plan(&balances)?;
        Ok(ReconcileReport {
            balances,
            transfers,
        })
    }
}
