//! Household snapshot file format
//!
//! A snapshot bundles every record the balance engine reads. It is what the
//! managed backend would hand over after filtering, serialized as JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::models::{
    Expense, ExpenseId, ExpenseSplit, Household, HouseholdId, Member, MemberId, Settlement,
    SettlementId,
};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

/// All records for one or more households
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub households: Vec<Household>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub splits: Vec<ExpenseSplit>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

impl Default for HouseholdSnapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            households: Vec::new(),
            members: Vec::new(),
            expenses: Vec::new(),
            splits: Vec::new(),
            settlements: Vec::new(),
        }
    }
}

/// A referential inconsistency found in a snapshot
///
/// None of these stop the balance engine; they explain why some records do
/// not show up in a member's balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    UnknownHousehold { household_id: HouseholdId },
    UnknownPayer { expense_id: ExpenseId, member_id: MemberId },
    UnknownSplitMember { expense_id: ExpenseId, member_id: MemberId },
    OrphanSplit { expense_id: ExpenseId },
    UnknownSettlementMember { settlement_id: SettlementId, member_id: MemberId },
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHousehold { household_id } => {
                write!(f, "record references unknown household {}", household_id)
            }
            Self::UnknownPayer {
                expense_id,
                member_id,
            } => write!(f, "expense {} paid by unknown member {}", expense_id, member_id),
            Self::UnknownSplitMember {
                expense_id,
                member_id,
            } => write!(f, "split of {} owed by unknown member {}", expense_id, member_id),
            Self::OrphanSplit { expense_id } => {
                write!(f, "split references unknown expense {}", expense_id)
            }
            Self::UnknownSettlementMember {
                settlement_id,
                member_id,
            } => write!(
                f,
                "settlement {} references unknown member {}",
                settlement_id, member_id
            ),
        }
    }
}

impl HouseholdSnapshot {
    /// Find dangling references between records
    pub fn validate(&self) -> Vec<SnapshotIssue> {
        let households: HashSet<HouseholdId> = self.households.iter().map(|h| h.id).collect();
        let members: HashSet<MemberId> = self.members.iter().map(|m| m.id).collect();
        let expenses: HashSet<ExpenseId> = self.expenses.iter().map(|e| e.id).collect();

        let mut issues = Vec::new();
        let mut unknown_households = HashSet::new();

        let household_refs = self
            .members
            .iter()
            .map(|m| m.household_id)
            .chain(self.expenses.iter().map(|e| e.household_id))
            .chain(self.settlements.iter().map(|s| s.household_id));
        for household_id in household_refs {
            if !households.contains(&household_id) && unknown_households.insert(household_id) {
                issues.push(SnapshotIssue::UnknownHousehold { household_id });
            }
        }

        for expense in &self.expenses {
            if !members.contains(&expense.payer_member_id) {
                issues.push(SnapshotIssue::UnknownPayer {
                    expense_id: expense.id,
                    member_id: expense.payer_member_id,
                });
            }
        }

        for split in &self.splits {
            if !expenses.contains(&split.expense_id) {
                issues.push(SnapshotIssue::OrphanSplit {
                    expense_id: split.expense_id,
                });
            }
            if !members.contains(&split.member_id) {
                issues.push(SnapshotIssue::UnknownSplitMember {
                    expense_id: split.expense_id,
                    member_id: split.member_id,
                });
            }
        }

        for settlement in &self.settlements {
            for member_id in [settlement.from_member_id, settlement.to_member_id] {
                if !members.contains(&member_id) {
                    issues.push(SnapshotIssue::UnknownSettlementMember {
                        settlement_id: settlement.id,
                        member_id,
                    });
                }
            }
        }

        issues
    }
}
