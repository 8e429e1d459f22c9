//! Derived reconciliation types: balance sheets and transfer plans.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::group::Participant;

/// A participant's net position against the equal split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantBalance {
    /// The participant.
    pub participant: Participant,
    /// Total amount this participant paid across all entries.
    pub paid: Decimal,
    /// Net position at cent precision. Positive means the participant
    /// overpaid and is owed money; negative means they underpaid and owe.
    pub balance: Decimal,
}

impl ParticipantBalance {
    /// Returns true if this participant is owed money.
    #[must_use]
    pub fn is_creditor(&self) -> bool {
        self.balance.is_sign_positive() && !self.balance.is_zero()
    }

    /// Returns true if this participant owes money.
    #[must_use]
    pub fn is_debtor(&self) -> bool {
        self.balance.is_sign_negative() && !self.balance.is_zero()
    }
}

/// Net positions for a whole group, in roster order.
///
/// Balances are settled to the cent and sum to exactly zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Per-participant positions, in roster insertion order.
    pub balances: Vec<ParticipantBalance>,
    /// Total shared spending across all entries, at full precision.
    pub grand_total: Decimal,
    /// Equal share per participant, rounded to the cent for display.
    /// Balances are derived from the full-precision share.
    pub fair_share: Decimal,
}

impl BalanceSheet {
    /// Looks up a participant's net balance.
    #[must_use]
    pub fn balance_of(&self, participant: &Participant) -> Option<Decimal> {
        self.balances
            .iter()
            .find(|b| &b.participant == participant)
            .map(|b| b.balance)
    }

    /// Number of participants carrying a nonzero balance.
    #[must_use]
    pub fn open_positions(&self) -> usize {
        self.balances.iter().filter(|b| !b.balance.is_zero()).count()
    }
}

/// A directed settlement instruction from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Who pays: a participant who underpaid their share.
    pub from: Participant,
    /// Who receives: a participant who overpaid their share.
    pub to: Participant,
    /// The amount to hand over. Always positive.
    pub amount: Decimal,
}

/// The full reconciliation read model for a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Net positions per participant.
    pub balances: BalanceSheet,
    /// Transfers that settle every balance, in planning order.
    pub transfers: Vec<Transfer>,
}
