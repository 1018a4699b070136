//! Ledger display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::truncate;
use crate::config::Settings;
use crate::reports::{LedgerEntryKind, LedgerReport};

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Who")]
    who: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format ledger entries as a table
pub fn format_ledger(report: &LedgerReport, settings: &Settings) -> String {
    if report.entries.is_empty() {
        return if report.total_entries == 0 {
            "No entries yet.".to_string()
        } else {
            format!("No entries match ({} hidden by filters).", report.total_entries)
        };
    }

    let rows = report.entries.iter().map(|entry| {
        let (kind, who, category) = match &entry.kind {
            LedgerEntryKind::Expense {
                category,
                payer_name,
            } => ("Expense", format!("Paid by {}", payer_name), category.to_string()),
            LedgerEntryKind::Settlement { from_name, to_name } => (
                "Settlement",
                format!("{} → {}", from_name, to_name),
                String::new(),
            ),
        };

        LedgerRow {
            date: entry.date.format(&settings.date_format).to_string(),
            kind,
            description: truncate(&entry.description, 40),
            who,
            category,
            amount: settings.format_money(entry.amount),
        }
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(5), Alignment::right());

    format!(
        "{}\nShowing {} of {} entries\n",
        table,
        report.entries.len(),
        report.total_entries
    )
}
