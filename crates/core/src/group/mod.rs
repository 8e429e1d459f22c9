//! Group rosters and the shared-expense ledger model.
//!
//! This module implements the write side of expense sharing:
//! - Participants and their ordered roster
//! - Shared-expense entries and the group ledger aggregate
//! - Mutation rules (unique participants, known payers, non-negative amounts)
//! - Error types for group operations

pub mod error;
pub mod types;

pub use error::GroupError;
pub use types::{ExpenseEntry, GroupLedger, NewEntry, Participant};
