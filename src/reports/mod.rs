//! Reports module for housesplit
//!
//! Read-only views over one household: balances with the settlement plan,
//! the merged ledger, and spending by category.

pub mod balance;
pub mod ledger;
pub mod spending;

pub use balance::{BalanceReport, PlannedPayment, ResidualBalance};
pub use ledger::{LedgerEntry, LedgerEntryKind, LedgerFilter, LedgerReport};
pub use spending::{SpendingByCategory, SpendingReport};
