//! Core reconciliation logic for Divvy.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `group` - Group rosters and the shared-expense ledger model
//! - `reconcile` - Balance calculation and settlement planning
//! - `store` - Storage collaborator contract
//! - `summary` - Spending summaries by month and category

pub mod group;
pub mod reconcile;
pub mod store;
pub mod summary;
