//! CLI commands for the ledger and spending views

use clap::Args;
use std::io;

use super::{load_household, parse_date, resolve_member};
use crate::config::Settings;
use crate::display::{format_ledger, format_spending};
use crate::error::{HouseholdError, HouseholdResult};
use crate::export::export_ledger_csv;
use crate::models::ExpenseCategory;
use crate::reports::{LedgerFilter, LedgerReport, SpendingReport};
use crate::services::HouseholdLedger;
use crate::storage::SnapshotRepository;

/// Arguments for `ledger`
#[derive(Args, Debug, Default)]
pub struct LedgerArgs {
    /// Household name or ID (defaults to the first household)
    #[arg(long)]
    pub household: Option<String>,

    /// Match description or member names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only expenses paid by this member
    #[arg(short, long)]
    pub member: Option<String>,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,

    /// Print CSV instead of a table
    #[arg(long)]
    pub csv: bool,
}

impl LedgerArgs {
    fn filter(&self, ledger: &HouseholdLedger) -> HouseholdResult<LedgerFilter> {
        let category = match &self.category {
            Some(name) => Some(ExpenseCategory::parse(name).ok_or_else(|| {
                let known: Vec<String> =
                    ExpenseCategory::ALL.iter().map(|c| c.to_string()).collect();
                HouseholdError::Validation(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    name,
                    known.join(", ")
                ))
            })?),
            None => None,
        };

        let member = match &self.member {
            Some(identifier) => Some(resolve_member(ledger, identifier)?.display_name.clone()),
            None => None,
        };

        Ok(LedgerFilter {
            search: self.search.clone().filter(|s| !s.trim().is_empty()),
            category,
            member,
            from: self.from.as_deref().map(parse_date).transpose()?,
            to: self.to.as_deref().map(parse_date).transpose()?,
        })
    }
}

/// Show the household ledger
pub fn handle_ledger_command(
    repo: &SnapshotRepository,
    settings: &Settings,
    args: LedgerArgs,
) -> HouseholdResult<()> {
    let ledger = load_household(repo, args.household.as_deref())?;
    let filter = args.filter(&ledger)?;
    let report = LedgerReport::from_ledger(&ledger, &filter);

    if args.csv {
        export_ledger_csv(&report, io::stdout().lock())?;
    } else {
        println!("{}", format_ledger(&report, settings));
    }
    Ok(())
}

/// Show spending by category
pub fn handle_spending_command(
    repo: &SnapshotRepository,
    settings: &Settings,
    household: Option<&str>,
) -> HouseholdResult<()> {
    let ledger = load_household(repo, household)?;
    let report = SpendingReport::from_ledger(&ledger);

    println!("{}", format_spending(&report, settings).trim_end());
    Ok(())
}
