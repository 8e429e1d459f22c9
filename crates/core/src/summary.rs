//! Spending summaries over a group's expense ledger.
//!
//! Aggregations for budget views: totals per calendar month and per
//! category tag. Pure functions over the entry list; amounts are summed
//! as recorded, without rounding.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::group::ExpenseEntry;

/// Total spending in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySpend {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Summed entry amounts for the month.
    pub total: Decimal,
}

/// Total spending under one category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// The category label as recorded on the entries.
    pub category: String,
    /// Summed entry amounts for the category.
    pub total: Decimal,
}

/// Computes spending summaries from entry lists.
pub struct SummaryService;

impl SummaryService {
    /// Sums entry amounts per calendar month, oldest month first.
    #[must_use]
    pub fn monthly_totals(entries: &[ExpenseEntry]) -> Vec<MonthlySpend> {
        let mut buckets: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
        for entry in entries {
            *buckets
                .entry((entry.date.year(), entry.date.month()))
                .or_default() += entry.amount;
        }
        buckets
            .into_iter()
            .map(|((year, month), total)| MonthlySpend { year, month, total })
            .collect()
    }

    /// Sums entry amounts per category, in first-appearance order.
    #[must_use]
    pub fn category_totals(entries: &[ExpenseEntry]) -> Vec<CategorySpend> {
        let mut totals: Vec<CategorySpend> = Vec::new();
        for entry in entries {
            match totals.iter_mut().find(|c| c.category == entry.category) {
                Some(bucket) => bucket.total += entry.amount,
                None => totals.push(CategorySpend {
                    category: entry.category.clone(),
                    total: entry.amount,
                }),
            }
        }
        totals
    }
}
