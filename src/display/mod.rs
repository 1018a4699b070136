//! Display formatting for terminal output
//!
//! Renders reports as tables for the CLI.

pub mod balance;
pub mod format;
pub mod ledger;
pub mod spending;

pub use balance::{format_balance_table, format_settlement_plan};
pub use format::{format_signed_balance, truncate};
pub use ledger::format_ledger;
pub use spending::format_spending;
