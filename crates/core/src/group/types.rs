//! Domain types for group rosters and shared-expense ledgers.

use chrono::NaiveDate;
use divvy_shared::types::{CurrencyCode, EntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::GroupError;

/// An opaque participant handle, unique within a group.
///
/// Participants are keyed by display name. Roster insertion order is
/// significant: it is the deterministic tie-break wherever balances are
/// sorted or residual cents are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Creates a participant handle from a raw name, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::EmptyParticipantName` if the trimmed name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, GroupError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(GroupError::EmptyParticipantName);
        }
        Ok(Self(name))
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Participant {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A single shared-expense record.
///
/// Entries are immutable once recorded; they leave the ledger only through
/// a full group reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier for the entry.
    pub id: EntryId,
    /// The participant who fronted the money.
    pub payer: Participant,
    /// The amount paid. Never negative.
    pub amount: Decimal,
    /// Display currency tag; never a conversion unit.
    pub currency: CurrencyCode,
    /// Spending category label.
    pub category: String,
    /// The date the expense occurred.
    pub date: NaiveDate,
}

/// Input for appending an expense to a group ledger.
///
/// The entry ID is assigned by the ledger when the input is accepted.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// The participant who fronted the money.
    pub payer: Participant,
    /// The amount paid. Never negative.
    pub amount: Decimal,
    /// Display currency tag.
    pub currency: CurrencyCode,
    /// Spending category label.
    pub category: String,
    /// The date the expense occurred.
    pub date: NaiveDate,
}

/// A group's roster and expense ledger.
///
/// The roster is an ordered set: insertion order is preserved and
/// duplicates are rejected. Every accepted entry's payer is a roster
/// member at the time of the append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLedger {
    roster: Vec<Participant>,
    entries: Vec<ExpenseEntry>,
}

impl GroupLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a ledger from previously stored parts.
    ///
    /// Does not revalidate the payer-membership rule; the balance
    /// calculator re-checks it and surfaces violations as data-integrity
    /// errors.
    #[must_use]
    pub const fn from_parts(roster: Vec<Participant>, entries: Vec<ExpenseEntry>) -> Self {
        Self { roster, entries }
    }

    /// The roster in insertion order.
    #[must_use]
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    /// The expense entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Returns true if `participant` is on the roster.
    #[must_use]
    pub fn is_member(&self, participant: &Participant) -> bool {
        self.roster.contains(participant)
    }

    /// Adds a participant to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::DuplicateParticipant` if the participant is
    /// already on the roster.
    pub fn add_participant(&mut self, participant: Participant) -> Result<(), GroupError> {
        if self.is_member(&participant) {
            return Err(GroupError::DuplicateParticipant(participant));
        }
        self.roster.push(participant);
        Ok(())
    }

    /// Appends an expense entry and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::UnknownPayer` if the payer is not on the
    /// roster, `GroupError::NegativeAmount` if the amount is below zero.
    pub fn add_entry(&mut self, entry: NewEntry) -> Result<EntryId, GroupError> {
        if !self.is_member(&entry.payer) {
            return Err(GroupError::UnknownPayer(entry.payer));
        }
        if entry.amount.is_sign_negative() && !entry.amount.is_zero() {
            return Err(GroupError::NegativeAmount(entry.amount));
        }
        let id = EntryId::new();
        self.entries.push(ExpenseEntry {
            id,
            payer: entry.payer,
            amount: entry.amount,
            currency: entry.currency,
            category: entry.category,
            date: entry.date,
        });
        Ok(id)
    }

    /// Removes every participant and entry.
    pub fn clear(&mut self) {
        self.roster.clear();
        self.entries.clear();
    }
}
