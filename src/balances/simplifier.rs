//! Debt simplification
//!
//! Greedy matching of the largest debtor against the largest creditor. This
//! usually yields few transfers but is not a minimum-transfer solver: some
//! inputs admit a plan with fewer payments than the greedy pass finds. The
//! ordering below is kept exactly so plans stay stable between runs.

use crate::models::{DebtTransfer, MemberId, Money, NetBalances};

/// Produce the transfers that bring every balance back to zero
///
/// Members within the settle tolerance are left out. Debtors are visited
/// most-indebted first and creditors largest-credit first; ties keep the
/// input order. Each step moves `min(|debt|, credit)` and a cursor moves on
/// once its member reaches exactly zero, so one step can finish both sides.
///
/// Balances that do not sum to zero produce a partial plan rather than an
/// error; check [`NetBalances::apply_transfers`] for what remains.
pub fn simplify_debts(balances: &NetBalances) -> Vec<DebtTransfer> {
    let mut debtors: Vec<(MemberId, Money)> = balances
        .iter()
        .filter(|(_, amount)| *amount < -Money::SETTLE_TOLERANCE)
        .collect();
    let mut creditors: Vec<(MemberId, Money)> = balances
        .iter()
        .filter(|(_, amount)| *amount > Money::SETTLE_TOLERANCE)
        .collect();

    debtors.sort_by(|a, b| a.1.cmp(&b.1));
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let (debtor, debt) = debtors[i];
        let (creditor, credit) = creditors[j];
        let amount = debt.abs().min(credit);

        if amount > Money::SETTLE_TOLERANCE {
            transfers.push(DebtTransfer {
                from: debtor,
                to: creditor,
                amount,
            });
        }

        debtors[i].1 += amount;
        creditors[j].1 -= amount;

        if debtors[i].1.is_zero() {
            i += 1;
        }
        if creditors[j].1.is_zero() {
            j += 1;
        }
    }

    let unmatched = debtors[i..].len() + creditors[j..].len();
    if unmatched > 0 {
        tracing::debug!(unmatched, "balances do not net to zero; plan is partial");
    }

    transfers
}
