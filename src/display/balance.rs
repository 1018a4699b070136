//! Balance display formatting
//!
//! Formats member balances and the settlement plan as tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::format_signed_balance;
use crate::config::Settings;
use crate::reports::BalanceReport;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Sent")]
    sent: String,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format per-member balances as a table
pub fn format_balance_table(report: &BalanceReport, settings: &Settings) -> String {
    if report.members.is_empty() {
        return format!("{} has no members.", report.household_name);
    }

    let rows = report.members.iter().map(|m| BalanceRow {
        member: m.member_name.clone(),
        paid: settings.format_money(m.total_paid),
        share: settings.format_money(m.total_owed),
        sent: settings.format_money(m.settlements_sent),
        received: settings.format_money(m.settlements_received),
        balance: format_signed_balance(m.net_balance, settings),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());

    format!("Balances for {}\n{}", report.household_name, table)
}

/// Format the suggested payments
pub fn format_settlement_plan(report: &BalanceReport, settings: &Settings) -> String {
    let mut output = String::new();

    if report.plan.is_empty() {
        if report.all_settled {
            output.push_str("Everyone is settled up!\n");
        } else {
            output.push_str("No payments can be suggested.\n");
        }
    } else {
        let rows = report.plan.iter().map(|p| PaymentRow {
            from: p.from_name.clone(),
            to: p.to_name.clone(),
            amount: settings.format_money(p.amount),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .modify(Columns::single(2), Alignment::right());

        output.push_str(&format!(
            "Suggested payments ({} total)\n{}\n",
            settings.format_money(report.total_to_move()),
            table
        ));
    }

    if !report.residual.is_empty() {
        output.push_str("\nBalances that do not net to zero:\n");
        for r in &report.residual {
            output.push_str(&format!(
                "  {}: {}\n",
                r.member_name,
                format_signed_balance(r.amount, settings)
            ));
        }
    }

    output
}
