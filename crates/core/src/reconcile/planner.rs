//! Greedy settlement planning.
//!
//! Repeatedly matches the largest creditor with the largest debtor and
//! moves the smaller of the two open amounts between them. For n open
//! positions this produces at most n - 1 transfers. The plan is a bounded
//! heuristic, not a guaranteed-minimal transfer set (finding that is
//! NP-hard), and it never nets sub-cent noise into visible transfers.

use rust_decimal::Decimal;

use super::error::ReconcileError;
use super::types::{BalanceSheet, Transfer};
use crate::group::Participant;

/// Positions within half a cent of zero count as settled.
fn tolerance() -> Decimal {
    Decimal::new(5, 3)
}

/// An unsettled position being matched down to zero.
struct OpenPosition {
    participant: Participant,
    remaining: Decimal,
}

/// Plans pairwise transfers that discharge every balance in a sheet.
///
/// Pure and stateless: the same sheet always yields the same plan.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Produces the ordered transfer list that settles `sheet`.
    ///
    /// Transfers always run from a debtor to a creditor. Applying them
    /// all brings every participant's balance to zero.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::Imbalance` if the balances do not net to
    /// zero within tolerance. That means the sheet itself is wrong, so no
    /// partial plan is returned.
    pub fn plan(sheet: &BalanceSheet) -> Result<Vec<Transfer>, ReconcileError> {
        let tol = tolerance();

        // Split into open positions, both sides as positive magnitudes.
        // Roster order is preserved here and by the stable sorts below,
        // so equal balances always match in roster order.
        let mut creditors: Vec<OpenPosition> = sheet
            .balances
            .iter()
            .filter(|b| b.balance > tol)
            .map(|b| OpenPosition {
                participant: b.participant.clone(),
                remaining: b.balance,
            })
            .collect();
        let mut debtors: Vec<OpenPosition> = sheet
            .balances
            .iter()
            .filter(|b| b.balance < -tol)
            .map(|b| OpenPosition {
                participant: b.participant.clone(),
                remaining: -b.balance,
            })
            .collect();

        let mut transfers = Vec::new();
        while !creditors.is_empty() && !debtors.is_empty() {
            creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
            debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

            let amount = creditors[0].remaining.min(debtors[0].remaining);
            transfers.push(Transfer {
                from: debtors[0].participant.clone(),
                to: creditors[0].participant.clone(),
                amount,
            });

            creditors[0].remaining -= amount;
            debtors[0].remaining -= amount;
            creditors.retain(|p| p.remaining > tol);
            debtors.retain(|p| p.remaining > tol);
        }

        // Leftover on either side means the sheet never summed to zero.
        if !creditors.is_empty() || !debtors.is_empty() {
            let residual = creditors.iter().map(|p| p.remaining).sum::<Decimal>()
                - debtors.iter().map(|p| p.remaining).sum::<Decimal>();
            return Err(ReconcileError::Imbalance {
                residual,
                open: creditors.len() + debtors.len(),
            });
        }

        Ok(transfers)
    }
}
