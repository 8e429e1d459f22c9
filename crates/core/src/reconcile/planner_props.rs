//! Property-based tests for SettlementPlanner.
//!
//! - Property 4: Plans discharge every balance
//! - Property 5: Plan shape (bound, direction, positivity)
//! - Property 6: Full pipeline from raw entries

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use super::balance::BalanceCalculator;
use super::planner::SettlementPlanner;
use super::types::{BalanceSheet, ParticipantBalance, Transfer};
use crate::group::{ExpenseEntry, Participant};
use divvy_shared::types::{CurrencyCode, EntryId};

/// Strategy to generate signed cent amounts (-1,000.00 to 1,000.00).
fn signed_cents() -> impl Strategy<Value = i64> {
    -100_000i64..100_000i64
}

/// Strategy to generate a zero-sum balance sheet in cents.
///
/// The last participant absorbs the negated sum of the others, so the
/// sheet always nets to zero exactly.
fn zero_sum_sheet() -> impl Strategy<Value = BalanceSheet> {
    prop::collection::vec(signed_cents(), 1..8).prop_map(|mut cents| {
        let sum: i64 = cents.iter().sum();
        cents.push(-sum);
        let balances = cents
            .iter()
            .enumerate()
            .map(|(i, &c)| ParticipantBalance {
                participant: Participant::new(format!("p{i}")).unwrap(),
                paid: Decimal::ZERO,
                balance: Decimal::new(c, 2),
            })
            .collect();
        BalanceSheet {
            balances,
            grand_total: Decimal::ZERO,
            fair_share: Decimal::ZERO,
        }
    })
}

/// Strategy to generate a roster plus entries paid by roster members.
fn roster_and_entries() -> impl Strategy<Value = (Vec<Participant>, Vec<ExpenseEntry>)> {
    (1usize..8).prop_flat_map(|size| {
        let raw_entries = prop::collection::vec((0..size, 0i64..100_000i64), 0..32);
        raw_entries.prop_map(move |raw| {
            let roster: Vec<Participant> = (0..size)
                .map(|i| Participant::new(format!("p{i}")).unwrap())
                .collect();
            let entries = raw
                .into_iter()
                .map(|(payer, cents)| ExpenseEntry {
                    id: EntryId::new(),
                    payer: roster[payer].clone(),
                    amount: Decimal::new(cents, 2),
                    currency: CurrencyCode::from_str("EUR").unwrap(),
                    category: "general".to_string(),
                    date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                })
                .collect();
            (roster, entries)
        })
    })
}

/// Applies a transfer plan to a sheet and returns the resulting positions.
fn apply(sheet: &BalanceSheet, transfers: &[Transfer]) -> HashMap<Participant, Decimal> {
    let mut positions: HashMap<Participant, Decimal> = sheet
        .balances
        .iter()
        .map(|b| (b.participant.clone(), b.balance))
        .collect();
    for t in transfers {
        *positions.get_mut(&t.from).unwrap() += t.amount;
        *positions.get_mut(&t.to).unwrap() -= t.amount;
    }
    positions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 4: Plans discharge every balance
    // =========================================================================

    /// Property 4.1: Applying the plan settles everyone.
    ///
    /// *For any* zero-sum sheet, paying out every planned transfer SHALL
    /// bring each participant's position to exactly zero.
    #[test]
    fn prop_plan_discharges_every_balance(sheet in zero_sum_sheet()) {
        let transfers = SettlementPlanner::plan(&sheet).unwrap();
        let settled = apply(&sheet, &transfers);
        for (participant, position) in settled {
            prop_assert!(
                position.is_zero(),
                "{participant} left with {position} after settlement"
            );
        }
    }

    /// Property 4.2: The same sheet always yields the same plan.
    ///
    /// *For any* zero-sum sheet, planning twice SHALL produce identical
    /// transfer lists.
    #[test]
    fn prop_planning_is_deterministic(sheet in zero_sum_sheet()) {
        let first = SettlementPlanner::plan(&sheet).unwrap();
        let second = SettlementPlanner::plan(&sheet).unwrap();
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Property 5: Plan shape
    // =========================================================================

    /// Property 5.1: At most n - 1 transfers for n open positions.
    ///
    /// *For any* zero-sum sheet with n nonzero balances, the plan SHALL
    /// contain at most n - 1 transfers.
    #[test]
    fn prop_transfer_count_is_bounded(sheet in zero_sum_sheet()) {
        let transfers = SettlementPlanner::plan(&sheet).unwrap();
        let open = sheet.open_positions();
        prop_assert!(
            transfers.len() <= open.saturating_sub(1),
            "{} transfers for {open} open positions",
            transfers.len()
        );
    }

    /// Property 5.2: Transfers run from debtors to creditors.
    ///
    /// *For any* zero-sum sheet, every transfer's `from` SHALL be a
    /// participant who owed money and every `to` one who was owed.
    #[test]
    fn prop_transfers_run_debtor_to_creditor(sheet in zero_sum_sheet()) {
        let transfers = SettlementPlanner::plan(&sheet).unwrap();
        for t in &transfers {
            let from_balance = sheet.balance_of(&t.from).unwrap();
            let to_balance = sheet.balance_of(&t.to).unwrap();
            prop_assert!(from_balance < Decimal::ZERO, "{} was not a debtor", t.from);
            prop_assert!(to_balance > Decimal::ZERO, "{} was not a creditor", t.to);
        }
    }

    /// Property 5.3: Transfer amounts are positive and nobody pays themselves.
    ///
    /// *For any* zero-sum sheet, every planned amount SHALL be strictly
    /// positive and every transfer SHALL involve two distinct
    /// participants.
    #[test]
    fn prop_transfers_are_positive_and_pairwise(sheet in zero_sum_sheet()) {
        let transfers = SettlementPlanner::plan(&sheet).unwrap();
        for t in &transfers {
            prop_assert!(t.amount > Decimal::ZERO);
            prop_assert_ne!(&t.from, &t.to);
        }
    }

    /// Property 5.4: Nobody pays or receives more than their position.
    ///
    /// *For any* zero-sum sheet, the summed transfers per participant
    /// SHALL exactly match the magnitude of their opening balance.
    #[test]
    fn prop_transfers_match_positions_exactly(sheet in zero_sum_sheet()) {
        let transfers = SettlementPlanner::plan(&sheet).unwrap();
        for b in &sheet.balances {
            let outgoing: Decimal = transfers
                .iter()
                .filter(|t| t.from == b.participant)
                .map(|t| t.amount)
                .sum();
            let incoming: Decimal = transfers
                .iter()
                .filter(|t| t.to == b.participant)
                .map(|t| t.amount)
                .sum();
            prop_assert_eq!(incoming - outgoing, b.balance);
        }
    }

    // =========================================================================
    // Property 6: Full pipeline from raw entries
    // =========================================================================

    /// Property 6.1: Compute-then-plan settles any real ledger.
    ///
    /// *For any* roster and entries, planning the computed sheet SHALL
    /// succeed and fully discharge every participant.
    #[test]
    fn prop_pipeline_settles_real_ledgers(
        (roster, entries) in roster_and_entries(),
    ) {
        let sheet = BalanceCalculator::compute(&roster, &entries).unwrap();
        let transfers = SettlementPlanner::plan(&sheet).unwrap();
        let settled = apply(&sheet, &transfers);
        for position in settled.values() {
            prop_assert!(position.is_zero());
        }
    }
}
