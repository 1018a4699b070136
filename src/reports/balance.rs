//! Balance Report
//!
//! Everything the balances page shows for one household: per-member
//! breakdown, suggested payments, and whatever the plan could not settle.

use serde::Serialize;

use crate::balances::simplify_debts;
use crate::error::HouseholdResult;
use crate::models::{BalanceSummary, HouseholdId, MemberId, Money};
use crate::services::{BalanceService, HouseholdLedger};
use crate::storage::LedgerSource;

/// A suggested payment with member names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedPayment {
    pub from_member_id: MemberId,
    pub from_name: String,
    pub to_member_id: MemberId,
    pub to_name: String,
    pub amount: Money,
}

/// Balance left on a member after the plan is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidualBalance {
    pub member_id: MemberId,
    pub member_name: String,
    pub amount: Money,
}

/// Balance Report
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub household_id: HouseholdId,
    pub household_name: String,
    /// One row per member, in member order
    pub members: Vec<BalanceSummary>,
    /// Suggested payments, in the order they were matched
    pub plan: Vec<PlannedPayment>,
    /// True when every member is within a cent of zero
    pub all_settled: bool,
    /// Non-empty only when balances did not net to zero
    pub residual: Vec<ResidualBalance>,
}

impl BalanceReport {
    /// Generate the report for one household
    pub fn generate<S: LedgerSource + ?Sized>(
        source: &S,
        household_id: HouseholdId,
    ) -> HouseholdResult<Self> {
        let ledger = BalanceService::new(source).load_ledger(household_id)?;
        Ok(Self::from_ledger(&ledger))
    }

    /// Build the report from an already loaded ledger
    pub fn from_ledger(ledger: &HouseholdLedger) -> Self {
        let balances = ledger.net_balances();
        let transfers = simplify_debts(&balances);

        let plan = transfers
            .iter()
            .map(|t| PlannedPayment {
                from_member_id: t.from,
                from_name: ledger.member_name(t.from).to_string(),
                to_member_id: t.to,
                to_name: ledger.member_name(t.to).to_string(),
                amount: t.amount,
            })
            .collect();

        let residual = balances
            .apply_transfers(&transfers)
            .residual()
            .into_iter()
            .map(|(member_id, amount)| ResidualBalance {
                member_id,
                member_name: ledger.member_name(member_id).to_string(),
                amount,
            })
            .collect();

        Self {
            household_id: ledger.household.id,
            household_name: ledger.household.name.clone(),
            members: ledger.summaries(),
            plan,
            all_settled: balances.all_settled(),
            residual,
        }
    }

    /// Sum of all suggested payments
    pub fn total_to_move(&self) -> Money {
        self.plan.iter().map(|p| p.amount).sum()
    }
}
