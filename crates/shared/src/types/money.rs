//! Monetary amount parsing and currency tags with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end; this module holds the
//! boundary validation that turns raw input into trusted amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places amounts are settled at (cents).
pub const AMOUNT_SCALE: u32 = 2;

/// Errors produced while parsing monetary input at the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    /// The input is not a valid decimal number.
    #[error("not a valid decimal amount: {0:?}")]
    InvalidAmount(String),

    /// Expense amounts cannot be negative.
    #[error("amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// The currency tag is not three ASCII letters.
    #[error("not a valid currency tag: {0:?}")]
    InvalidCurrency(String),
}

/// ISO 4217-style currency tag (e.g., "USD", "EUR").
///
/// Divvy records the tag for display only and never converts between
/// currencies; any three-letter code is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Returns the tag as an uppercase three-letter string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.len() != 3 || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MoneyParseError::InvalidCurrency(s.to_string()));
        }
        Ok(Self(tag.to_ascii_uppercase()))
    }
}

/// Parses a raw amount string into a non-negative `Decimal`.
///
/// Used wherever amounts cross a trust boundary (CLI input, stored
/// documents produced by other tools).
///
/// # Errors
///
/// Returns `MoneyParseError::InvalidAmount` if the input is not a decimal
/// number, `MoneyParseError::NegativeAmount` if it is below zero.
pub fn parse_amount(raw: &str) -> Result<Decimal, MoneyParseError> {
    let amount: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| MoneyParseError::InvalidAmount(raw.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(MoneyParseError::NegativeAmount(amount));
    }
    Ok(amount)
}
