//! Core data models for housesplit
//!
//! This module contains the records consumed by the balance engine
//! (households, members, expenses, splits, settlements) and the views it
//! produces (net balances, summaries, transfers).

pub mod balance;
pub mod expense;
pub mod household;
pub mod ids;
pub mod money;
pub mod settlement;

pub use balance::{BalanceSummary, DebtTransfer, NetBalances};
pub use expense::{
    Expense, ExpenseCategory, ExpenseDraft, ExpenseSplit, ExpenseValidationError, SplitMethod,
};
pub use household::{Household, Member, MemberRole};
pub use ids::{ExpenseId, HouseholdId, MemberId, SettlementId, SplitId};
pub use money::Money;
pub use settlement::{Settlement, SettlementDraft, SettlementValidationError};
