//! Balance aggregation
//!
//! Folds the ledger of one household into per-member net balances.

use std::collections::HashMap;

use crate::models::{
    BalanceSummary, Expense, ExpenseSplit, Member, MemberId, Money, NetBalances, Settlement,
};

/// Compute the signed net balance of every member
///
/// - the payer of an expense is credited with its full amount
/// - each split debits its member by the amount owed
/// - a settlement debits its source member and credits its destination
///
/// Every listed member appears in the result, in list order, even with no
/// activity. Records naming a member outside the list are skipped for that
/// member only.
pub fn aggregate_balances(
    members: &[Member],
    expenses: &[Expense],
    splits: &[ExpenseSplit],
    settlements: &[Settlement],
) -> NetBalances {
    let mut balances = NetBalances::zeroed(members.iter().map(|m| m.id));
    let mut ignored = 0usize;

    for expense in expenses {
        if !balances.credit(expense.payer_member_id, expense.amount_total) {
            ignored += 1;
        }
    }

    for split in splits {
        if !balances.debit(split.member_id, split.amount_owed) {
            ignored += 1;
        }
    }

    for settlement in settlements {
        if !balances.debit(settlement.from_member_id, settlement.amount) {
            ignored += 1;
        }
        if !balances.credit(settlement.to_member_id, settlement.amount) {
            ignored += 1;
        }
    }

    if ignored > 0 {
        tracing::debug!(ignored, "skipped ledger references to unknown members");
    }

    balances
}

#[derive(Default)]
struct Tally {
    paid: Money,
    owed: Money,
    sent: Money,
    received: Money,
}

/// Compute a full balance breakdown for every member, in list order
///
/// `net_balance` is always the value [`aggregate_balances`] produces.
pub fn summarize_balances(
    members: &[Member],
    expenses: &[Expense],
    splits: &[ExpenseSplit],
    settlements: &[Settlement],
) -> Vec<BalanceSummary> {
    let net = aggregate_balances(members, expenses, splits, settlements);

    let mut tallies: HashMap<MemberId, Tally> = HashMap::new();
    for expense in expenses {
        tallies.entry(expense.payer_member_id).or_default().paid += expense.amount_total;
    }
    for split in splits {
        tallies.entry(split.member_id).or_default().owed += split.amount_owed;
    }
    for settlement in settlements {
        tallies.entry(settlement.from_member_id).or_default().sent += settlement.amount;
        tallies.entry(settlement.to_member_id).or_default().received += settlement.amount;
    }

    members
        .iter()
        .map(|member| {
            let tally = tallies.remove(&member.id).unwrap_or_default();
            BalanceSummary {
                member_id: member.id,
                member_name: member.display_name.clone(),
                total_paid: tally.paid,
                total_owed: tally.owed,
                settlements_sent: tally.sent,
                settlements_received: tally.received,
                net_balance: net.get(member.id).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseholdId, MemberId};
    use chrono::NaiveDate;

    struct Fixture {
        household: HouseholdId,
        members: Vec<Member>,
    }

    impl Fixture {
        fn new(names: &[&str]) -> Self {
            let household = HouseholdId::new();
            let members = names.iter().map(|n| Member::new(household, *n)).collect();
            Self { household, members }
        }

        fn id(&self, idx: usize) -> MemberId {
            self.members[idx].id
        }

        fn expense(&self, payer: usize, cents: i64, shares: &[(usize, i64)]) -> (Expense, Vec<ExpenseSplit>) {
            let expense = Expense::new(self.household, self.id(payer), Money::from_cents(cents), date());
            let splits = shares
                .iter()
                .map(|(idx, owed)| ExpenseSplit::new(expense.id, self.id(*idx), Money::from_cents(*owed)))
                .collect();
            (expense, splits)
        }

        fn settlement(&self, from: usize, to: usize, cents: i64) -> Settlement {
            Settlement::new(self.household, self.id(from), self.id(to), Money::from_cents(cents), date())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_equal_split_scenario() {
        let fx = Fixture::new(&["A", "B", "C"]);
        let (expense, splits) = fx.expense(0, 9000, &[(0, 3000), (1, 3000), (2, 3000)]);

        let balances = aggregate_balances(&fx.members, &[expense], &splits, &[]);
        assert_eq!(balances.get(fx.id(0)), Some(Money::from_cents(6000)));
        assert_eq!(balances.get(fx.id(1)), Some(Money::from_cents(-3000)));
        assert_eq!(balances.get(fx.id(2)), Some(Money::from_cents(-3000)));
    }

    #[test]
    fn test_zero_activity_member() {
        let fx = Fixture::new(&["A", "B", "C"]);
        let (expense, splits) = fx.expense(0, 5000, &[(0, 2500), (1, 2500)]);

        let balances = aggregate_balances(&fx.members, &[expense], &splits, &[]);
        assert_eq!(balances.len(), 3);
        assert_eq!(balances.get(fx.id(2)), Some(Money::zero()));
    }

    #[test]
    fn test_conservation() {
        let fx = Fixture::new(&["A", "B", "C", "D"]);
        let (e1, s1) = fx.expense(0, 8743, &[(0, 2186), (1, 2186), (2, 2186), (3, 2185)]);
        let (e2, s2) = fx.expense(1, 12450, &[(1, 6225), (3, 6225)]);
        let (e3, s3) = fx.expense(2, 1599, &[(0, 1599)]);
        let settlements = vec![fx.settlement(1, 0, 2500), fx.settlement(3, 2, 700)];

        let splits: Vec<_> = s1.into_iter().chain(s2).chain(s3).collect();
        let balances = aggregate_balances(&fx.members, &[e1, e2, e3], &splits, &settlements);
        assert_eq!(balances.total(), Money::zero());
    }

    #[test]
    fn test_settlement_shifts_both_sides() {
        let fx = Fixture::new(&["X", "Y", "Z"]);
        let (expense, splits) = fx.expense(2, 6000, &[(0, 3000), (1, 3000)]);

        let before = aggregate_balances(&fx.members, &[expense.clone()], &splits, &[]);
        let after = aggregate_balances(&fx.members, &[expense], &splits, &[fx.settlement(0, 1, 1250)]);

        let shift = |idx: usize| after.get(fx.id(idx)).unwrap() - before.get(fx.id(idx)).unwrap();
        assert_eq!(shift(0), Money::from_cents(-1250));
        assert_eq!(shift(1), Money::from_cents(1250));
        assert_eq!(shift(2), Money::zero());
    }

    #[test]
    fn test_unknown_members_are_ignored() {
        let fx = Fixture::new(&["A", "B"]);
        let stranger = MemberId::new();
        let (expense, mut splits) = fx.expense(0, 4000, &[(0, 2000), (1, 2000)]);
        splits.push(ExpenseSplit::new(expense.id, stranger, Money::from_cents(999)));
        let settlement = Settlement::new(fx.household, stranger, fx.id(1), Money::from_cents(500), date());

        let balances = aggregate_balances(&fx.members, &[expense], &splits, &[settlement]);
        assert_eq!(balances.len(), 2);
        assert!(!balances.contains(stranger));
        assert_eq!(balances.get(fx.id(0)), Some(Money::from_cents(2000)));
        assert_eq!(balances.get(fx.id(1)), Some(Money::from_cents(-1500)));
    }

    #[test]
    fn test_mismatched_splits_do_not_panic() {
        let fx = Fixture::new(&["A", "B"]);
        let (expense, splits) = fx.expense(0, 4000, &[(1, 1000)]);

        let balances = aggregate_balances(&fx.members, &[expense], &splits, &[]);
        assert_eq!(balances.total(), Money::from_cents(3000));
    }

    #[test]
    fn test_summaries_break_down_totals() {
        let fx = Fixture::new(&["A", "B"]);
        let (expense, splits) = fx.expense(0, 4000, &[(0, 2000), (1, 2000)]);
        let settlements = vec![fx.settlement(1, 0, 500)];

        let summaries = summarize_balances(&fx.members, &[expense], &splits, &settlements);
        assert_eq!(summaries.len(), 2);

        let a = &summaries[0];
        assert_eq!(a.member_name, "A");
        assert_eq!(a.total_paid, Money::from_cents(4000));
        assert_eq!(a.total_owed, Money::from_cents(2000));
        assert_eq!(a.settlements_received, Money::from_cents(500));
        assert_eq!(a.net_balance, Money::from_cents(2500));

        let b = &summaries[1];
        assert_eq!(b.total_paid, Money::zero());
        assert_eq!(b.settlements_sent, Money::from_cents(500));
        assert_eq!(b.net_balance, Money::from_cents(-2500));
    }
}
