//! CLI command previewing an equal split

use clap::Args;

use crate::config::Settings;
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::Money;

/// Arguments for `split`
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Total amount (e.g. 100 or 100.00)
    pub amount: String,

    /// Number of people sharing it
    pub participants: usize,
}

/// Equal shares for a total, validated against the configured limits
pub fn preview_split(amount: Money, participants: usize, settings: &Settings) -> HouseholdResult<Vec<Money>> {
    if !amount.is_positive() {
        return Err(HouseholdError::Validation("Amount must be greater than 0".into()));
    }
    if amount > settings.max_amount {
        return Err(HouseholdError::Validation(format!(
            "Amount too large (max {})",
            settings.format_money(settings.max_amount)
        )));
    }
    if participants == 0 {
        return Err(HouseholdError::Validation(
            "Select at least one participant".into(),
        ));
    }
    Ok(amount.split_evenly(participants))
}

/// Print how a total would be split equally
pub fn handle_split_command(settings: &Settings, args: SplitArgs) -> HouseholdResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| HouseholdError::Validation(e.to_string()))?;
    let shares = preview_split(amount, args.participants, settings)?;

    println!(
        "{} split {} ways:",
        settings.format_money(amount),
        args.participants
    );
    for (i, share) in shares.iter().enumerate() {
        println!("  Person {}: {}", i + 1, settings.format_money(*share));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_goes_to_first_share() {
        let shares = preview_split(Money::from_cents(10_000), 3, &Settings::default()).unwrap();
        assert_eq!(
            shares,
            vec![Money::from_cents(3334), Money::from_cents(3333), Money::from_cents(3333)]
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        let settings = Settings::default();
        assert!(preview_split(Money::zero(), 2, &settings).is_err());
        assert!(preview_split(Money::from_cents(100), 0, &settings).is_err());
        assert!(preview_split(Money::from_dollars_cents(1_000_000, 0), 2, &settings).is_err());
    }
}
