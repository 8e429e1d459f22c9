//! Property-based tests for BalanceCalculator.
//!
//! - Property 1: Zero-sum balances
//! - Property 2: Roster coverage and ordering
//! - Property 3: Determinism

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::balance::BalanceCalculator;
use crate::group::{ExpenseEntry, Participant};
use divvy_shared::types::{CurrencyCode, EntryId};

/// Strategy to generate roster sizes worth exercising.
fn roster_size() -> impl Strategy<Value = usize> {
    1usize..8
}

/// Strategy to generate non-negative cent amounts (0.00 to 1,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a roster plus entries paid by roster members.
///
/// Entries are given as (payer index, amount) pairs so every payer is
/// guaranteed to be on the roster.
fn roster_and_entries() -> impl Strategy<Value = (Vec<Participant>, Vec<ExpenseEntry>)> {
    roster_size().prop_flat_map(|size| {
        let raw_entries = prop::collection::vec((0..size, amount()), 0..32);
        raw_entries.prop_map(move |raw| {
            let roster: Vec<Participant> = (0..size)
                .map(|i| Participant::new(format!("p{i}")).unwrap())
                .collect();
            let entries = raw
                .into_iter()
                .map(|(payer, amount)| make_entry(&roster[payer], amount))
                .collect();
            (roster, entries)
        })
    })
}

/// Helper to create an expense entry.
fn make_entry(payer: &Participant, amount: Decimal) -> ExpenseEntry {
    ExpenseEntry {
        id: EntryId::new(),
        payer: payer.clone(),
        amount,
        currency: CurrencyCode::from_str("EUR").unwrap(),
        category: "general".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Zero-sum balances
    // =========================================================================

    /// Property 1.1: Balances sum to exactly zero.
    ///
    /// *For any* roster and entries, the per-participant balances SHALL
    /// sum to exactly zero, with no residual cent left anywhere.
    #[test]
    fn prop_balances_sum_to_zero(
        (roster, entries) in roster_and_entries(),
    ) {
        let sheet = BalanceCalculator::compute(&roster, &entries).unwrap();
        let total: Decimal = sheet.balances.iter().map(|b| b.balance).sum();
        prop_assert!(total.is_zero(), "Balances should sum to zero, got {total}");
    }

    /// Property 1.2: Balances are settled at cent precision.
    ///
    /// *For any* roster and entries, every balance SHALL carry at most
    /// two decimal places.
    #[test]
    fn prop_balances_are_cent_precise(
        (roster, entries) in roster_and_entries(),
    ) {
        let sheet = BalanceCalculator::compute(&roster, &entries).unwrap();
        for b in &sheet.balances {
            prop_assert_eq!(
                b.balance,
                b.balance.round_dp(2),
                "Balance should be cent-precise"
            );
        }
    }

    /// Property 1.3: Paid totals add up to the grand total.
    ///
    /// *For any* roster and entries, the per-participant paid totals
    /// SHALL sum to the grand total.
    #[test]
    fn prop_paid_totals_match_grand_total(
        (roster, entries) in roster_and_entries(),
    ) {
        let sheet = BalanceCalculator::compute(&roster, &entries).unwrap();
        let paid: Decimal = sheet.balances.iter().map(|b| b.paid).sum();
        prop_assert_eq!(paid, sheet.grand_total);
    }

    // =========================================================================
    // Property 2: Roster coverage and ordering
    // =========================================================================

    /// Property 2.1: Every roster member gets a balance, in roster order.
    ///
    /// *For any* roster and entries, the sheet SHALL hold exactly one
    /// balance per roster member, in roster insertion order, including
    /// members who never paid.
    #[test]
    fn prop_sheet_covers_roster_in_order(
        (roster, entries) in roster_and_entries(),
    ) {
        let sheet = BalanceCalculator::compute(&roster, &entries).unwrap();
        prop_assert_eq!(sheet.balances.len(), roster.len());
        for (member, balance) in roster.iter().zip(&sheet.balances) {
            prop_assert_eq!(member, &balance.participant);
        }
    }

    /// Property 2.2: A lone participant is always settled.
    ///
    /// *For any* entries paid by a single-member roster, that member's
    /// balance SHALL be zero.
    #[test]
    fn prop_singleton_roster_is_settled(
        amounts in prop::collection::vec(amount(), 0..16),
    ) {
        let roster = vec![Participant::new("solo").unwrap()];
        let entries: Vec<ExpenseEntry> =
            amounts.into_iter().map(|a| make_entry(&roster[0], a)).collect();
        let sheet = BalanceCalculator::compute(&roster, &entries).unwrap();
        prop_assert!(sheet.balances[0].balance.is_zero());
    }

    // =========================================================================
    // Property 3: Determinism
    // =========================================================================

    /// Property 3.1: The same inputs produce the same sheet.
    ///
    /// *For any* roster and entries, computing the sheet twice SHALL
    /// produce identical results.
    #[test]
    fn prop_computation_is_deterministic(
        (roster, entries) in roster_and_entries(),
    ) {
        let first = BalanceCalculator::compute(&roster, &entries).unwrap();
        let second = BalanceCalculator::compute(&roster, &entries).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property 3.2: Entry order within a payer does not change balances.
    ///
    /// *For any* roster and entries, reversing the entry list SHALL
    /// produce the same balances (addition is commutative; order only
    /// matters for residual assignment, which depends on totals alone).
    #[test]
    fn prop_entry_order_does_not_change_balances(
        (roster, entries) in roster_and_entries(),
    ) {
        let forward = BalanceCalculator::compute(&roster, &entries).unwrap();
        let mut reversed = entries;
        reversed.reverse();
        let backward = BalanceCalculator::compute(&roster, &reversed).unwrap();
        prop_assert_eq!(forward.balances, backward.balances);
    }
}
