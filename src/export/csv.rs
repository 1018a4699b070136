//! CSV Export functionality
//!
//! Exports ledger entries in a spreadsheet-friendly layout.

use serde::Serialize;
use std::io::Write;

use crate::error::HouseholdResult;
use crate::reports::{LedgerEntryKind, LedgerReport};

#[derive(Serialize)]
struct LedgerCsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Payer")]
    payer: &'a str,
    #[serde(rename = "From")]
    from: &'a str,
    #[serde(rename = "To")]
    to: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export ledger entries to CSV, one row per entry
pub fn export_ledger_csv<W: Write>(report: &LedgerReport, writer: W) -> HouseholdResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    for entry in &report.entries {
        let (kind, category, payer, from, to) = match &entry.kind {
            LedgerEntryKind::Expense {
                category,
                payer_name,
            } => ("expense", category.to_string(), payer_name.as_str(), "", ""),
            LedgerEntryKind::Settlement { from_name, to_name } => (
                "settlement",
                String::new(),
                "",
                from_name.as_str(),
                to_name.as_str(),
            ),
        };

        out.serialize(LedgerCsvRow {
            id: &entry.id,
            date: entry.date.format("%Y-%m-%d").to_string(),
            kind,
            description: &entry.description,
            category,
            payer,
            from,
            to,
            amount: format!("{:.2}", entry.amount.cents() as f64 / 100.0),
        })?;
    }

    out.flush()?;
    Ok(())
}
