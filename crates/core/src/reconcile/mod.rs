//! Balance calculation and settlement planning.
//!
//! This module implements the reconciliation pipeline:
//! - Net balance calculation against an equal split of the group total
//! - Greedy settlement planning (who pays whom)
//! - The reconciliation service tying both to a ledger store
//! - Error types for reconciliation failures

pub mod balance;
pub mod error;
pub mod planner;
pub mod service;
pub mod types;

#[cfg(test)]
mod balance_props;
#[cfg(test)]
mod planner_props;

pub use balance::BalanceCalculator;
pub use error::ReconcileError;
pub use planner::SettlementPlanner;
pub use service::ReconcileService;
pub use types::{BalanceSheet, ParticipantBalance, ReconcileReport, Transfer};
