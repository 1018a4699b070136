//! Computed balance views
//!
//! These are transient values recomputed from the full ledger on every
//! request; nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ids::MemberId;
use super::money::Money;

/// Signed net balance per member, kept in member-list order
///
/// Positive means the household owes the member money, negative means the
/// member owes the household.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetBalances {
    entries: Vec<(MemberId, Money)>,
    index: HashMap<MemberId, usize>,
}

impl NetBalances {
    /// Start every listed member at zero
    ///
    /// A member listed twice keeps its first position.
    pub fn zeroed<I>(members: I) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        Self::from_pairs(members.into_iter().map(|id| (id, Money::zero())))
    }

    /// Build from arbitrary (member, balance) pairs
    ///
    /// Repeated members are summed into their first position.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MemberId, Money)>,
    {
        let mut balances = Self::default();
        for (id, amount) in pairs {
            match balances.index.get(&id) {
                Some(&pos) => balances.entries[pos].1 += amount,
                None => {
                    balances.index.insert(id, balances.entries.len());
                    balances.entries.push((id, amount));
                }
            }
        }
        balances
    }

    /// Add to a member's balance; returns false if the member is unknown
    pub fn credit(&mut self, member: MemberId, amount: Money) -> bool {
        match self.index.get(&member) {
            Some(&pos) => {
                self.entries[pos].1 += amount;
                true
            }
            None => false,
        }
    }

    /// Subtract from a member's balance; returns false if the member is unknown
    pub fn debit(&mut self, member: MemberId, amount: Money) -> bool {
        self.credit(member, -amount)
    }

    /// Balance for one member
    pub fn get(&self, member: MemberId) -> Option<Money> {
        self.index.get(&member).map(|&pos| self.entries[pos].1)
    }

    /// Check if a member is tracked
    pub fn contains(&self, member: MemberId) -> bool {
        self.index.contains_key(&member)
    }

    /// Iterate in member-list order
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, Money)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances; zero for a consistent ledger
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    /// Check if every member is within the settle tolerance
    pub fn all_settled(&self) -> bool {
        self.entries.iter().all(|(_, amount)| amount.is_settled())
    }

    /// Members whose balance is outside the settle tolerance
    pub fn residual(&self) -> Vec<(MemberId, Money)> {
        self.entries
            .iter()
            .filter(|(_, amount)| !amount.is_settled())
            .copied()
            .collect()
    }

    /// Balances after executing a plan: debtors pay, creditors receive
    ///
    /// Transfers naming unknown members are skipped.
    pub fn apply_transfers(&self, transfers: &[DebtTransfer]) -> Self {
        let mut after = self.clone();
        for transfer in transfers {
            after.credit(transfer.from, transfer.amount);
            after.debit(transfer.to, transfer.amount);
        }
        after
    }
}

/// Per-member balance breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub member_id: MemberId,
    pub member_name: String,
    /// Sum of expenses this member paid
    pub total_paid: Money,
    /// Sum of this member's expense shares
    pub total_owed: Money,
    /// Sum of settlements this member sent
    pub settlements_sent: Money,
    /// Sum of settlements this member received
    pub settlements_received: Money,
    /// Signed net balance
    pub net_balance: Money,
}

impl BalanceSummary {
    /// Positive balance beyond the tolerance
    pub fn is_owed(&self) -> bool {
        self.net_balance > Money::SETTLE_TOLERANCE
    }

    /// Negative balance beyond the tolerance
    pub fn owes(&self) -> bool {
        self.net_balance < -Money::SETTLE_TOLERANCE
    }

    pub fn is_settled(&self) -> bool {
        self.net_balance.is_settled()
    }
}

/// A suggested payment from a debtor to a creditor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtTransfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}
