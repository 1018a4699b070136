//! CLI command writing a demo household

use chrono::Local;
use clap::Args;
use std::path::Path;

use crate::config::Settings;
use crate::display::format_signed_balance;
use crate::error::{HouseholdError, HouseholdResult};
use crate::reports::BalanceReport;
use crate::storage::{demo_snapshot, SnapshotRepository};

/// Arguments for `demo`
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Member display names (at least two; the first becomes admin)
    #[arg(required = true, num_args = 2..)]
    pub names: Vec<String>,

    /// Household name
    #[arg(long, default_value = "Demo Household")]
    pub name: String,

    /// Overwrite an existing snapshot file
    #[arg(long)]
    pub force: bool,
}

/// Write a demo snapshot to `path` and print the resulting balances
pub fn handle_demo_command(
    repo: &SnapshotRepository,
    path: &Path,
    settings: &Settings,
    args: DemoArgs,
) -> HouseholdResult<()> {
    if path.exists() && !args.force {
        return Err(HouseholdError::Validation(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }

    let snapshot = demo_snapshot(&args.name, &args.names, Local::now().date_naive())?;
    let household_id = snapshot.households[0].id;
    repo.replace(snapshot)?;
    repo.save()?;

    println!("Created demo household '{}' at {}", args.name, path.display());
    let report = BalanceReport::generate(repo, household_id)?;
    for member in &report.members {
        println!(
            "  {}: {}",
            member.member_name,
            format_signed_balance(member.net_balance, settings)
        );
    }
    Ok(())
}
