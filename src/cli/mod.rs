//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and service layers.

pub mod balance;
pub mod demo;
pub mod ledger;
pub mod record;
pub mod split;

pub use balance::{handle_balances_command, handle_plan_command, handle_report_command, ReportArgs};
pub use demo::{handle_demo_command, DemoArgs};
pub use ledger::{handle_ledger_command, handle_spending_command, LedgerArgs};
pub use record::{handle_expense_command, handle_settle_command, ExpenseArgs, SettleArgs};
pub use split::{handle_split_command, SplitArgs};

use chrono::NaiveDate;

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{Household, Member};
use crate::services::{BalanceService, HouseholdLedger};
use crate::storage::SnapshotRepository;

/// Resolve `--household`, falling back to the first household in the snapshot
pub fn resolve_household(
    repo: &SnapshotRepository,
    identifier: Option<&str>,
) -> HouseholdResult<Household> {
    match identifier {
        Some(id) => BalanceService::new(repo).find_household(id),
        None => repo.default_household(),
    }
}

/// Resolve the household and load its ledger in one step
pub fn load_household(
    repo: &SnapshotRepository,
    identifier: Option<&str>,
) -> HouseholdResult<HouseholdLedger> {
    let household = resolve_household(repo, identifier)?;
    BalanceService::new(repo).load_ledger(household.id)
}

/// Find a member of a loaded household by name or ID
pub fn resolve_member<'a>(ledger: &'a HouseholdLedger, identifier: &str) -> HouseholdResult<&'a Member> {
    ledger
        .find_member(identifier)
        .ok_or_else(|| HouseholdError::member_not_found(identifier))
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(value: &str) -> HouseholdResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        HouseholdError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::demo_snapshot;

    fn repo() -> SnapshotRepository {
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        SnapshotRepository::from_snapshot(demo_snapshot("Maple Street", &names, today).unwrap())
    }

    #[test]
    fn test_resolve_household_defaults_to_first() {
        let repo = repo();
        assert_eq!(resolve_household(&repo, None).unwrap().name, "Maple Street");
        assert_eq!(resolve_household(&repo, Some("MAPLE STREET")).unwrap().name, "Maple Street");
        assert!(resolve_household(&repo, Some("Elm")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_member() {
        let ledger = load_household(&repo(), None).unwrap();
        assert_eq!(resolve_member(&ledger, "bob").unwrap().display_name, "Bob");
        assert!(resolve_member(&ledger, "Zed").unwrap_err().is_not_found());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(parse_date("03/09/2025").unwrap_err().is_validation());
    }
}
