//! CLI commands for balances and the settlement plan

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::load_household;
use crate::config::Settings;
use crate::display::{format_balance_table, format_settlement_plan};
use crate::error::HouseholdResult;
use crate::export::{export_report_json, export_report_yaml};
use crate::reports::BalanceReport;
use crate::storage::SnapshotRepository;

/// Machine-readable report formats
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Household name or ID (defaults to the first household)
    #[arg(long)]
    pub household: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Show per-member balances
pub fn handle_balances_command(
    repo: &SnapshotRepository,
    settings: &Settings,
    household: Option<&str>,
) -> HouseholdResult<()> {
    let ledger = load_household(repo, household)?;
    let report = BalanceReport::from_ledger(&ledger);

    println!("{}", format_balance_table(&report, settings));
    if report.all_settled {
        println!("Everyone is settled up!");
    }
    Ok(())
}

/// Show suggested payments
pub fn handle_plan_command(
    repo: &SnapshotRepository,
    settings: &Settings,
    household: Option<&str>,
) -> HouseholdResult<()> {
    let ledger = load_household(repo, household)?;
    let report = BalanceReport::from_ledger(&ledger);

    print!("{}", format_settlement_plan(&report, settings));
    Ok(())
}

/// Write the full balance report as JSON or YAML
pub fn handle_report_command(repo: &SnapshotRepository, args: ReportArgs) -> HouseholdResult<()> {
    let ledger = load_household(repo, args.household.as_deref())?;
    let report = BalanceReport::from_ledger(&ledger);

    match args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            write_report(&report, args.format, &mut writer)?;
            writer.flush()?;
            println!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&report, args.format, &mut handle)?;
        }
    }
    Ok(())
}

fn write_report<W: Write>(
    report: &BalanceReport,
    format: ReportFormat,
    writer: &mut W,
) -> HouseholdResult<()> {
    match format {
        ReportFormat::Json => export_report_json(report, writer),
        ReportFormat::Yaml => export_report_yaml(report, writer),
    }
}
