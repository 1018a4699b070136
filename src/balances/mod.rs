//! Balance engine
//!
//! Two pure steps run whenever balances are requested:
//!
//! - [`aggregator`] folds a household's expenses, splits and settlements into
//!   one signed net balance per member.
//! - [`simplifier`] turns those balances into a short list of point-to-point
//!   transfers that settles every debt.
//!
//! Neither step performs I/O or keeps state between calls; the caller
//! assembles the input records (see [`crate::storage::LedgerSource`]).

pub mod aggregator;
pub mod simplifier;

pub use aggregator::{aggregate_balances, summarize_balances};
pub use simplifier::simplify_debts;
