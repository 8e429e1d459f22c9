//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{AMOUNT_SCALE, CurrencyCode, MoneyParseError, parse_amount};
