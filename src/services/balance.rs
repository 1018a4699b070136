//! Balance service
//!
//! Assembles one household's ledger from a `LedgerSource` and runs the
//! balance engine over it.

use crate::balances::{aggregate_balances, simplify_debts, summarize_balances};
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{
    BalanceSummary, DebtTransfer, Expense, ExpenseSplit, Household, HouseholdId, Member,
    MemberId, NetBalances, Settlement,
};
use crate::storage::LedgerSource;

/// Every record of one household, as the balance engine consumes it
#[derive(Debug, Clone)]
pub struct HouseholdLedger {
    pub household: Household,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
    pub splits: Vec<ExpenseSplit>,
    pub settlements: Vec<Settlement>,
}

impl HouseholdLedger {
    pub fn net_balances(&self) -> NetBalances {
        aggregate_balances(&self.members, &self.expenses, &self.splits, &self.settlements)
    }

    pub fn summaries(&self) -> Vec<BalanceSummary> {
        summarize_balances(&self.members, &self.expenses, &self.splits, &self.settlements)
    }

    pub fn settlement_plan(&self) -> Vec<DebtTransfer> {
        simplify_debts(&self.net_balances())
    }

    /// Look up a member by ID, or by display name (case-insensitive)
    pub fn find_member(&self, identifier: &str) -> Option<&Member> {
        if let Ok(id) = identifier.parse::<MemberId>() {
            if let Some(member) = self.members.iter().find(|m| m.id == id) {
                return Some(member);
            }
        }
        let wanted = identifier.trim().to_lowercase();
        self.members
            .iter()
            .find(|m| m.display_name.to_lowercase() == wanted)
    }

    /// Display name of a member, or "Unknown" for a stale reference
    pub fn member_name(&self, id: MemberId) -> &str {
        self.members
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.display_name.as_str())
            .unwrap_or("Unknown")
    }
}

/// Service computing balances for households of a ledger source
pub struct BalanceService<'a, S: LedgerSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: LedgerSource + ?Sized> BalanceService<'a, S> {
    /// Create a new balance service
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Find a household by ID or name (case-insensitive)
    pub fn find_household(&self, identifier: &str) -> HouseholdResult<Household> {
        let households = self.source.households()?;

        if let Ok(id) = identifier.parse::<HouseholdId>() {
            if let Some(household) = households.iter().find(|h| h.id == id) {
                return Ok(household.clone());
            }
        }

        let wanted = identifier.trim().to_lowercase();
        households
            .into_iter()
            .find(|h| h.name.to_lowercase() == wanted)
            .ok_or_else(|| HouseholdError::household_not_found(identifier))
    }

    /// Fetch every record the engine needs for one household
    pub fn load_ledger(&self, household_id: HouseholdId) -> HouseholdResult<HouseholdLedger> {
        let household = self
            .source
            .household(household_id)?
            .ok_or_else(|| HouseholdError::household_not_found(household_id.to_string()))?;

        let members = self.source.members_by_household(household_id)?;
        let expenses = self.source.expenses_by_household(household_id)?;
        let expense_ids: Vec<_> = expenses.iter().map(|e| e.id).collect();
        let splits = if expense_ids.is_empty() {
            Vec::new()
        } else {
            self.source.splits_by_expense_ids(&expense_ids)?
        };
        let settlements = self.source.settlements_by_household(household_id)?;

        tracing::debug!(
            household = %household.name,
            members = members.len(),
            expenses = expenses.len(),
            splits = splits.len(),
            settlements = settlements.len(),
            "assembled household ledger"
        );

        Ok(HouseholdLedger {
            household,
            members,
            expenses,
            splits,
            settlements,
        })
    }

    /// Net balance per member
    pub fn net_balances(&self, household_id: HouseholdId) -> HouseholdResult<NetBalances> {
        Ok(self.load_ledger(household_id)?.net_balances())
    }

    /// Balance breakdown per member
    pub fn summaries(&self, household_id: HouseholdId) -> HouseholdResult<Vec<BalanceSummary>> {
        Ok(self.load_ledger(household_id)?.summaries())
    }

    /// Suggested transfers that settle the household
    pub fn settlement_plan(&self, household_id: HouseholdId) -> HouseholdResult<Vec<DebtTransfer>> {
        Ok(self.load_ledger(household_id)?.settlement_plan())
    }

    /// Balance breakdown for a single member
    pub fn member_summary(
        &self,
        household_id: HouseholdId,
        member_id: MemberId,
    ) -> HouseholdResult<BalanceSummary> {
        self.summaries(household_id)?
            .into_iter()
            .find(|s| s.member_id == member_id)
            .ok_or_else(|| HouseholdError::member_not_found(member_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::{HouseholdSnapshot, SnapshotRepository};
    use chrono::NaiveDate;

    fn three_way_household() -> (SnapshotRepository, HouseholdId, Vec<MemberId>) {
        let household = Household::new("Maple Street");
        let members: Vec<Member> = ["A", "B", "C"]
            .iter()
            .map(|n| Member::new(household.id, *n))
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        let mut expense = Expense::new(household.id, members[0].id, Money::from_cents(9000), date);
        expense.description = "Groceries".into();
        let splits = members
            .iter()
            .map(|m| ExpenseSplit::new(expense.id, m.id, Money::from_cents(3000)))
            .collect();

        let ids = members.iter().map(|m| m.id).collect();
        let household_id = household.id;
        let repo = SnapshotRepository::from_snapshot(HouseholdSnapshot {
            households: vec![household],
            members,
            expenses: vec![expense],
            splits,
            ..Default::default()
        });
        (repo, household_id, ids)
    }

    #[test]
    fn test_settlement_plan() {
        let (repo, household, ids) = three_way_household();
        let service = BalanceService::new(&repo);

        let plan = service.settlement_plan(household).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!((plan[0].from, plan[0].to), (ids[1], ids[0]));
        assert_eq!((plan[1].from, plan[1].to), (ids[2], ids[0]));
        assert!(plan.iter().all(|t| t.amount == Money::from_cents(3000)));
    }

    #[test]
    fn test_member_summary() {
        let (repo, household, ids) = three_way_household();
        let service = BalanceService::new(&repo);

        let summary = service.member_summary(household, ids[0]).unwrap();
        assert_eq!(summary.total_paid, Money::from_cents(9000));
        assert_eq!(summary.total_owed, Money::from_cents(3000));
        assert_eq!(summary.net_balance, Money::from_cents(6000));

        let missing = service.member_summary(household, MemberId::new());
        assert!(missing.unwrap_err().is_not_found());
    }

    #[test]
    fn test_unknown_household() {
        let (repo, _, _) = three_way_household();
        let service = BalanceService::new(&repo);

        assert!(service.net_balances(HouseholdId::new()).unwrap_err().is_not_found());
        assert!(service.find_household("nowhere").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_household_and_member() {
        let (repo, household, ids) = three_way_household();
        let service = BalanceService::new(&repo);

        let found = service.find_household("maple street").unwrap();
        assert_eq!(found.id, household);
        let by_id = service.find_household(&household.as_uuid().to_string()).unwrap();
        assert_eq!(by_id.id, household);

        let ledger = service.load_ledger(household).unwrap();
        assert_eq!(ledger.find_member("b").map(|m| m.id), Some(ids[1]));
        assert_eq!(ledger.member_name(ids[2]), "C");
        assert_eq!(ledger.member_name(MemberId::new()), "Unknown");
    }

    #[test]
    fn test_empty_household_is_settled() {
        let household = Household::new("Empty");
        let member = Member::new(household.id, "Solo");
        let household_id = household.id;
        let repo = SnapshotRepository::from_snapshot(HouseholdSnapshot {
            households: vec![household],
            members: vec![member],
            ..Default::default()
        });
        let service = BalanceService::new(&repo);

        let balances = service.net_balances(household_id).unwrap();
        assert!(balances.all_settled());
        assert!(service.settlement_plan(household_id).unwrap().is_empty());
    }
}
