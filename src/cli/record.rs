//! CLI commands that append expenses and settlements to the snapshot

use chrono::Local;
use clap::Args;
use std::collections::HashMap;

use super::{load_household, parse_date, resolve_member};
use crate::config::Settings;
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{ExpenseCategory, ExpenseDraft, MemberId, Money, SettlementDraft, SplitMethod};
use crate::services::HouseholdLedger;
use crate::storage::SnapshotRepository;

/// Arguments for `expense`
#[derive(Args, Debug)]
pub struct ExpenseArgs {
    /// What was bought
    pub description: String,

    /// Total amount (e.g. 42.50)
    pub amount: String,

    /// Member who paid
    #[arg(short, long)]
    pub payer: String,

    /// Members sharing the expense (defaults to everyone)
    #[arg(long, value_delimiter = ',')]
    pub participants: Vec<String>,

    /// Custom share as NAME=AMOUNT; repeat for each participant
    #[arg(long = "share", value_name = "NAME=AMOUNT")]
    pub shares: Vec<String>,

    /// Expense category
    #[arg(short, long, default_value = "Other")]
    pub category: String,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Household name or ID (defaults to the first household)
    #[arg(long)]
    pub household: Option<String>,
}

/// Arguments for `settle`
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Member who paid
    pub from: String,

    /// Member who was paid
    pub to: String,

    /// Amount (e.g. 25.00)
    pub amount: String,

    /// Settlement date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,

    /// Household name or ID (defaults to the first household)
    #[arg(long)]
    pub household: Option<String>,
}

fn parse_amount(value: &str) -> HouseholdResult<Money> {
    Money::parse(value).map_err(|e| HouseholdError::Validation(e.to_string()))
}

fn parse_category(value: &str) -> HouseholdResult<ExpenseCategory> {
    ExpenseCategory::parse(value)
        .ok_or_else(|| HouseholdError::Validation(format!("Unknown category '{}'", value)))
}

fn date_or_today(value: Option<&str>) -> HouseholdResult<chrono::NaiveDate> {
    match value {
        Some(d) => parse_date(d),
        None => Ok(Local::now().date_naive()),
    }
}

/// Participants and split method from `--participants` and `--share`
fn split_from_args(
    ledger: &HouseholdLedger,
    args: &ExpenseArgs,
) -> HouseholdResult<(Vec<MemberId>, SplitMethod)> {
    if !args.shares.is_empty() {
        if !args.participants.is_empty() {
            return Err(HouseholdError::Validation(
                "Use either --participants or --share, not both".into(),
            ));
        }
        let mut participants = Vec::with_capacity(args.shares.len());
        let mut amounts = HashMap::new();
        for share in &args.shares {
            let (name, amount) = share.split_once('=').ok_or_else(|| {
                HouseholdError::Validation(format!("Expected NAME=AMOUNT, got '{}'", share))
            })?;
            let member = resolve_member(ledger, name)?;
            participants.push(member.id);
            amounts.insert(member.id, parse_amount(amount)?);
        }
        return Ok((participants, SplitMethod::Custom(amounts)));
    }

    let participants = if args.participants.is_empty() {
        ledger.members.iter().map(|m| m.id).collect()
    } else {
        args.participants
            .iter()
            .map(|name| resolve_member(ledger, name).map(|m| m.id))
            .collect::<HouseholdResult<Vec<_>>>()?
    };
    Ok((participants, SplitMethod::Equal))
}

/// Record a new shared expense
pub fn handle_expense_command(
    repo: &SnapshotRepository,
    settings: &Settings,
    args: ExpenseArgs,
) -> HouseholdResult<()> {
    let ledger = load_household(repo, args.household.as_deref())?;
    let payer = resolve_member(&ledger, &args.payer)?.id;
    let (participants, split) = split_from_args(&ledger, &args)?;

    let draft = ExpenseDraft {
        description: args.description.clone(),
        amount_total: parse_amount(&args.amount)?,
        category: parse_category(&args.category)?,
        payer,
        date: date_or_today(args.date.as_deref())?,
        participants,
        split,
    };

    let (expense, splits) = draft.into_records(ledger.household.id, settings)?;
    let summary = format!(
        "Added expense: {} {} paid by {}, split {} ways",
        expense.description,
        settings.format_money(expense.amount_total),
        ledger.member_name(expense.payer_member_id),
        splits.len()
    );

    repo.add_expense(expense, splits)?;
    repo.save()?;
    println!("{}", summary);
    Ok(())
}

/// Record a direct payment between two members
pub fn handle_settle_command(
    repo: &SnapshotRepository,
    settings: &Settings,
    args: SettleArgs,
) -> HouseholdResult<()> {
    let ledger = load_household(repo, args.household.as_deref())?;

    let draft = SettlementDraft {
        from: resolve_member(&ledger, &args.from)?.id,
        to: resolve_member(&ledger, &args.to)?.id,
        amount: parse_amount(&args.amount)?,
        date: date_or_today(args.date.as_deref())?,
        note: args.note,
    };

    let settlement = draft.into_settlement(ledger.household.id, settings)?;
    let summary = format!(
        "Recorded settlement: {} paid {} {}",
        ledger.member_name(settlement.from_member_id),
        ledger.member_name(settlement.to_member_id),
        settings.format_money(settlement.amount)
    );

    repo.add_settlement(settlement)?;
    repo.save()?;
    println!("{}", summary);
    Ok(())
}
