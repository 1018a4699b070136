//! Spending Report
//!
//! Totals household expenses by category, largest first.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::HouseholdResult;
use crate::models::{ExpenseCategory, HouseholdId, Money};
use crate::services::{BalanceService, HouseholdLedger};
use crate::storage::LedgerSource;

/// Spending breakdown for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingByCategory {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Share of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub household_name: String,
    /// Categories with spending, largest total first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Generate a spending report for one household
    pub fn generate<S: LedgerSource + ?Sized>(
        source: &S,
        household_id: HouseholdId,
    ) -> HouseholdResult<Self> {
        let ledger = BalanceService::new(source).load_ledger(household_id)?;
        Ok(Self::from_ledger(&ledger))
    }

    pub fn from_ledger(ledger: &HouseholdLedger) -> Self {
        let mut by_category: HashMap<ExpenseCategory, (Money, usize)> = HashMap::new();
        let mut total_spending = Money::zero();

        for expense in &ledger.expenses {
            let entry = by_category
                .entry(expense.category)
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount_total;
            entry.1 += 1;
            total_spending += expense.amount_total;
        }

        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category, (total, expense_count))| SpendingByCategory {
                category,
                total,
                expense_count,
                percentage: percentage_of(total, total_spending),
            })
            .collect();

        // Ties fall back to display order so output is stable
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            household_name: ledger.household.name.clone(),
            categories,
            total_spending,
            total_expenses: ledger.expenses.len(),
        }
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    }
}
