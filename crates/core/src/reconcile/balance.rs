//! Net balance calculation against an equal split.
//!
//! Every participant's fair share is the group total divided by the
//! roster size, kept at full decimal precision. Net positions are rounded
//! to the cent with banker's rounding, and the leftover cent (if any) is
//! assigned deterministically so the sheet always sums to exactly zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use divvy_shared::types::AMOUNT_SCALE;

use super::error::ReconcileError;
use super::types::{BalanceSheet, ParticipantBalance};
use crate::group::{ExpenseEntry, Participant};

/// Computes per-participant net balances for a group.
///
/// Pure and stateless: every call derives a fresh sheet from its inputs.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes the balance sheet for `roster` and `entries`.
    ///
    /// Positive balance means the participant overpaid their share and is
    /// owed money; negative means they underpaid and owe. The balances
    /// sum to exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::EmptyRoster` if the roster is empty, and
    /// `ReconcileError::UnknownParticipant` if any entry's payer is not a
    /// roster member.
    pub fn compute(
        roster: &[Participant],
        entries: &[ExpenseEntry],
    ) -> Result<BalanceSheet, ReconcileError> {
        if roster.is_empty() {
            return Err(ReconcileError::EmptyRoster);
        }

        let mut paid = vec![Decimal::ZERO; roster.len()];
        let mut grand_total = Decimal::ZERO;
        for entry in entries {
            let position = roster
                .iter()
                .position(|p| p == &entry.payer)
                .ok_or_else(|| ReconcileError::UnknownParticipant {
                    payer: entry.payer.clone(),
                })?;
            paid[position] += entry.amount;
            grand_total += entry.amount;
        }

        // Full-precision share; each balance is rounded individually.
        let share = grand_total / Decimal::from(roster.len());

        let mut balances: Vec<ParticipantBalance> = roster
            .iter()
            .zip(&paid)
            .map(|(participant, total)| ParticipantBalance {
                participant: participant.clone(),
                paid: *total,
                balance: (*total - share)
                    .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven),
            })
            .collect();

        // Rounding can leave the sheet a cent or two off zero. Assign the
        // difference to the largest absolute position, earliest roster
        // position on ties, so the invariant holds exactly.
        let residual = Decimal::ZERO - balances.iter().map(|b| b.balance).sum::<Decimal>();
        if !residual.is_zero() {
            let target = Self::residual_target(&balances);
            balances[target].balance += residual;
        }

        Ok(BalanceSheet {
            balances,
            grand_total,
            fair_share: share
                .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven),
        })
    }

    /// Index of the balance with the largest magnitude; first wins on ties.
    fn residual_target(balances: &[ParticipantBalance]) -> usize {
        let mut target = 0;
        let mut largest = balances[0].balance.abs();
        for (index, candidate) in balances.iter().enumerate().skip(1) {
            let magnitude = candidate.balance.abs();
            if magnitude > largest {
                largest = magnitude;
                target = index;
            }
        }
        target
    }
}
