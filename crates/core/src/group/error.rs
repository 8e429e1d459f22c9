//! Error types for group ledger mutations.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Participant;

/// Errors that can occur while mutating a group ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupError {
    // ========== Roster Errors ==========
    /// Participant names cannot be empty.
    #[error("Participant name cannot be empty")]
    EmptyParticipantName,

    /// The participant is already on the roster.
    #[error("Participant {0} is already on the roster")]
    DuplicateParticipant(Participant),

    // ========== Entry Errors ==========
    /// The payer is not a member of the group.
    #[error("Payer {0} is not on the roster")]
    UnknownPayer(Participant),

    /// Expense amounts cannot be negative.
    #[error("Expense amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}

impl GroupError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParticipantName => "EMPTY_PARTICIPANT_NAME",
            Self::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            Self::UnknownPayer(_) => "UNKNOWN_PAYER",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
        }
    }
}
