//! Demo household
//!
//! Builds a small, realistic snapshot for trying out the balance views.

use chrono::{Duration, NaiveDate};

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{
    Expense, ExpenseCategory, ExpenseSplit, Household, Member, Money, Settlement,
};

use super::snapshot::HouseholdSnapshot;

/// (description, cents, category, payer index, days ago)
const DEMO_EXPENSES: [(&str, i64, ExpenseCategory, usize, i64); 6] = [
    ("Weekly groceries at Trader Joe's", 8743, ExpenseCategory::Groceries, 0, 1),
    ("Electric bill - January", 12450, ExpenseCategory::Utilities, 1, 3),
    ("Pizza night at Joe's", 4500, ExpenseCategory::Dining, 0, 5),
    ("Netflix subscription", 1599, ExpenseCategory::Entertainment, 1, 7),
    ("Gas for road trip", 5230, ExpenseCategory::Gas, 0, 10),
    ("Cleaning supplies", 3215, ExpenseCategory::Other, 1, 12),
];

/// Build a demo household for the given member names
///
/// Every expense is split equally among all members. The second member has
/// already paid the first $25.00 back. Requires at least two names.
pub fn demo_snapshot(
    household_name: &str,
    member_names: &[String],
    today: NaiveDate,
) -> HouseholdResult<HouseholdSnapshot> {
    if member_names.len() < 2 {
        return Err(HouseholdError::Validation(
            "A demo household needs at least 2 members".into(),
        ));
    }

    let mut household = Household::new(household_name);
    let members: Vec<Member> = member_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                Member::admin(household.id, name.as_str())
            } else {
                Member::new(household.id, name.as_str())
            }
        })
        .collect();
    household.created_by = Some(members[0].id);

    let mut expenses = Vec::with_capacity(DEMO_EXPENSES.len());
    let mut splits = Vec::new();
    for (description, cents, category, payer, days_ago) in DEMO_EXPENSES {
        let mut expense = Expense::new(
            household.id,
            members[payer].id,
            Money::from_cents(cents),
            today - Duration::days(days_ago),
        );
        expense.description = description.to_string();
        expense.category = category;

        let shares = expense.amount_total.split_evenly(members.len());
        splits.extend(
            members
                .iter()
                .zip(shares)
                .map(|(member, share)| ExpenseSplit::new(expense.id, member.id, share)),
        );
        expenses.push(expense);
    }

    let settlement = Settlement::new(
        household.id,
        members[1].id,
        members[0].id,
        Money::from_cents(2500),
        today - Duration::days(2),
    )
    .with_note("Venmo for groceries");

    Ok(HouseholdSnapshot {
        households: vec![household],
        members,
        expenses,
        splits,
        settlements: vec![settlement],
        ..Default::default()
    })
}
