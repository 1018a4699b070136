//! Service layer for housesplit
//!
//! The service layer sits between a ledger source and the pure balance
//! engine, assembling per-household inputs and resolving names.

pub mod balance;

pub use balance::{BalanceService, HouseholdLedger};
