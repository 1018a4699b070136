//! Spending display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage};
use crate::config::Settings;
use crate::reports::SpendingReport;

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format spending by category, largest first
pub fn format_spending(report: &SpendingReport, settings: &Settings) -> String {
    if report.categories.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let largest = report
        .categories
        .first()
        .map(|c| c.total.cents() as f64)
        .unwrap_or(0.0);

    let rows = report.categories.iter().map(|c| SpendingRow {
        category: c.category.to_string(),
        count: c.expense_count,
        total: settings.format_money(c.total),
        percentage: format_percentage(c.percentage),
        bar: format_bar(c.total.cents() as f64, largest, 20),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..4), Alignment::right());

    format!(
        "Spending for {}\n{}\nTotal: {} across {} expenses\n",
        report.household_name,
        table,
        settings.format_money(report.total_spending),
        report.total_expenses
    )
}
