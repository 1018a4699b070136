//! Ledger Report
//!
//! Expenses and settlements of one household merged into a single
//! chronological list, with the filters the ledger page offers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::HouseholdResult;
use crate::models::{ExpenseCategory, HouseholdId, Money};
use crate::services::{BalanceService, HouseholdLedger};
use crate::storage::LedgerSource;

/// What kind of record a ledger row came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LedgerEntryKind {
    Expense {
        category: ExpenseCategory,
        payer_name: String,
    },
    Settlement {
        from_name: String,
        to_name: String,
    },
}

/// A single row in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    /// Record ID in display form
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    #[serde(flatten)]
    pub kind: LedgerEntryKind,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn is_expense(&self) -> bool {
        matches!(self.kind, LedgerEntryKind::Expense { .. })
    }

    pub fn category(&self) -> Option<ExpenseCategory> {
        match self.kind {
            LedgerEntryKind::Expense { category, .. } => Some(category),
            LedgerEntryKind::Settlement { .. } => None,
        }
    }

    /// The member names shown on this row
    fn names(&self) -> Vec<&str> {
        match &self.kind {
            LedgerEntryKind::Expense { payer_name, .. } => vec![payer_name.as_str()],
            LedgerEntryKind::Settlement { from_name, to_name } => {
                vec![from_name.as_str(), to_name.as_str()]
            }
        }
    }
}

/// Filter options for the ledger report
///
/// Category and member filters only narrow expenses; settlements pass
/// through them and are limited by search text and dates alone.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    /// Case-insensitive match on description or any member name
    pub search: Option<String>,
    pub category: Option<ExpenseCategory>,
    /// Payer display name (case-insensitive)
    pub member: Option<String>,
    /// Inclusive start date
    pub from: Option<NaiveDate>,
    /// Inclusive end date
    pub to: Option<NaiveDate>,
}

impl LedgerFilter {
    /// Check if an entry matches this filter
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        if let Some(ref query) = self.search {
            let query = query.to_lowercase();
            let hit = entry.description.to_lowercase().contains(&query)
                || entry
                    .names()
                    .iter()
                    .any(|name| name.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category {
            if entry.is_expense() && entry.category() != Some(category) {
                return false;
            }
        }

        if let Some(ref member) = self.member {
            if let LedgerEntryKind::Expense { ref payer_name, .. } = entry.kind {
                if !payer_name.eq_ignore_ascii_case(member.trim()) {
                    return false;
                }
            }
        }

        if let Some(from) = self.from {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.date > to {
                return false;
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.member.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }
}

/// Ledger Report
#[derive(Debug, Clone, Serialize)]
pub struct LedgerReport {
    pub household_name: String,
    /// Matching entries, newest date first
    pub entries: Vec<LedgerEntry>,
    /// Number of entries before filtering
    pub total_entries: usize,
}

impl LedgerReport {
    /// Generate the ledger for one household
    pub fn generate<S: LedgerSource + ?Sized>(
        source: &S,
        household_id: HouseholdId,
        filter: &LedgerFilter,
    ) -> HouseholdResult<Self> {
        let ledger = BalanceService::new(source).load_ledger(household_id)?;
        Ok(Self::from_ledger(&ledger, filter))
    }

    /// Build the ledger from an already loaded household
    pub fn from_ledger(ledger: &HouseholdLedger, filter: &LedgerFilter) -> Self {
        let expenses = ledger.expenses.iter().map(|e| LedgerEntry {
            id: e.id.to_string(),
            date: e.expense_date,
            description: e.description.clone(),
            amount: e.amount_total,
            kind: LedgerEntryKind::Expense {
                category: e.category,
                payer_name: ledger.member_name(e.payer_member_id).to_string(),
            },
            created_at: e.created_at,
        });

        let settlements = ledger.settlements.iter().map(|s| LedgerEntry {
            id: s.id.to_string(),
            date: s.date,
            description: s.description().to_string(),
            amount: s.amount,
            kind: LedgerEntryKind::Settlement {
                from_name: ledger.member_name(s.from_member_id).to_string(),
                to_name: ledger.member_name(s.to_member_id).to_string(),
            },
            created_at: s.created_at,
        });

        let mut entries: Vec<LedgerEntry> = expenses.chain(settlements).collect();
        // Stable sort: same-day rows keep expenses ahead of settlements
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        let total_entries = entries.len();

        entries.retain(|entry| filter.matches(entry));

        Self {
            household_name: ledger.household.name.clone(),
            entries,
            total_entries,
        }
    }

    pub fn total_amount(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }
}
