//! housesplit - shared household expenses and who pays whom
//!
//! This library turns a household's expenses, per-member splits and direct
//! settlements into a signed net balance per member, then suggests a short
//! list of payments that brings everyone back to zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `balances`: The balance aggregator and debt simplifier
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (households, members, expenses, settlements)
//! - `storage`: Snapshot file storage and the `LedgerSource` trait
//! - `services`: Per-household loading on top of a ledger source
//! - `reports`: Balance, ledger and spending reports
//! - `display`: Terminal tables
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use housesplit::balances::{aggregate_balances, simplify_debts};
//! use housesplit::models::{Expense, ExpenseSplit, Household, Member, Money};
//! use chrono::NaiveDate;
//!
//! let household = Household::new("Maple Street");
//! let alice = Member::new(household.id, "Alice");
//! let bob = Member::new(household.id, "Bob");
//! let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
//!
//! let rent = Expense::new(household.id, alice.id, Money::from_cents(120_000), date);
//! let splits = vec![
//!     ExpenseSplit::new(rent.id, alice.id, Money::from_cents(60_000)),
//!     ExpenseSplit::new(rent.id, bob.id, Money::from_cents(60_000)),
//! ];
//!
//! let balances = aggregate_balances(&[alice.clone(), bob.clone()], &[rent], &splits, &[]);
//! let plan = simplify_debts(&balances);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from, bob.id);
//! assert_eq!(plan[0].amount, Money::from_cents(60_000));
//! ```

pub mod balances;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{HouseholdError, HouseholdResult};
