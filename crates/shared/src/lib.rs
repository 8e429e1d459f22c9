//! Shared types and configuration for Divvy.
//!
//! This crate provides common types used across all other crates:
//! - Amount parsing and currency tags with decimal precision
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
