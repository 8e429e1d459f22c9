//! Error types for reconciliation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::group::Participant;
use crate::store::StoreError;

/// Errors that can occur while computing balances or planning settlement.
#[derive(Debug, Error)]
pub enum ReconcileError {
    // ========== Input Errors ==========
    /// The group has no participants, so an equal share is undefined.
    #[error("Group has no participants yet")]
    EmptyRoster,

    /// A ledger entry references a payer outside the current roster.
    ///
    /// This is a data-integrity fault in the stored ledger; it is never
    /// silently dropped or auto-corrected.
    #[error("Entry payer {payer} is not on the roster")]
    UnknownParticipant {
        /// The payer the stored ledger references.
        payer: Participant,
    },

    // ========== Invariant Errors ==========
    /// The transfer plan failed to discharge every balance.
    ///
    /// Indicates an upstream balance-calculation defect. The call fails
    /// rather than presenting a partial or wrong plan.
    #[error("Settlement left {residual} undischarged across {open} open position(s)")]
    Imbalance {
        /// Net amount left undischarged, signed.
        residual: Decimal,
        /// Number of participants still carrying a balance.
        open: usize,
    },

    // ========== Collaborator Errors ==========
    /// The ledger snapshot could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReconcileError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "EMPTY_ROSTER",
            Self::UnknownParticipant { .. } => "UNKNOWN_PARTICIPANT",
            Self::Imbalance { .. } => "IMBALANCE",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}
