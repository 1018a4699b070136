//! Settlement model
//!
//! A settlement records a direct payment between two members of a household.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{HouseholdId, MemberId, SettlementId};
use super::money::Money;
use crate::config::Settings;

/// A recorded payment from one member to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique identifier
    pub id: SettlementId,

    /// The household this settlement belongs to
    pub household_id: HouseholdId,

    /// Member who paid
    pub from_member_id: MemberId,

    /// Member who received
    pub to_member_id: MemberId,

    /// Amount paid (positive)
    pub amount: Money,

    /// Date of the payment
    pub date: NaiveDate,

    /// Optional note (e.g., "Venmo for groceries")
    #[serde(default)]
    pub note: Option<String>,

    /// When the settlement was recorded
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    /// Create a new settlement
    pub fn new(
        household_id: HouseholdId,
        from_member_id: MemberId,
        to_member_id: MemberId,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: SettlementId::new(),
            household_id,
            from_member_id,
            to_member_id,
            amount,
            date,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Ledger description: the note, or "Settlement" without one
    pub fn description(&self) -> &str {
        self.note.as_deref().unwrap_or("Settlement")
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description(),
            self.amount
        )
    }
}

/// A not-yet-recorded settlement as entered by a user
#[derive(Debug, Clone)]
pub struct SettlementDraft {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl SettlementDraft {
    /// Validate the draft against the configured limits
    pub fn validate(&self, settings: &Settings) -> Result<(), SettlementValidationError> {
        if self.from == self.to {
            return Err(SettlementValidationError::SameMember);
        }
        if !self.amount.is_positive() {
            return Err(SettlementValidationError::NonPositiveAmount);
        }
        if self.amount > settings.max_amount {
            return Err(SettlementValidationError::AmountTooLarge {
                max: settings.max_amount,
            });
        }
        if let Some(note) = &self.note {
            if note.trim().chars().count() > settings.max_note_len {
                return Err(SettlementValidationError::NoteTooLong {
                    max: settings.max_note_len,
                });
            }
        }
        Ok(())
    }

    /// Validate and turn the draft into a settlement record
    pub fn into_settlement(
        self,
        household_id: HouseholdId,
        settings: &Settings,
    ) -> Result<Settlement, SettlementValidationError> {
        self.validate(settings)?;

        let mut settlement = Settlement::new(household_id, self.from, self.to, self.amount, self.date);
        settlement.note = self
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Ok(settlement)
    }
}

/// Validation errors for settlement drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementValidationError {
    SameMember,
    NonPositiveAmount,
    AmountTooLarge { max: Money },
    NoteTooLong { max: usize },
}

impl fmt::Display for SettlementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameMember => write!(f, "Payer and receiver must be different"),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge { max } => write!(f, "Amount too large (max {})", max),
            Self::NoteTooLong { max } => write!(f, "Note too long (max {} characters)", max),
        }
    }
}

impl std::error::Error for SettlementValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(from: MemberId, to: MemberId, cents: i64) -> SettlementDraft {
        SettlementDraft {
            from,
            to,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_valid_settlement() {
        let household = HouseholdId::new();
        let (a, b) = (MemberId::new(), MemberId::new());
        let mut d = draft(a, b, 2500);
        d.note = Some("  Venmo for groceries ".into());

        let settlement = d.into_settlement(household, &Settings::default()).unwrap();
        assert_eq!(settlement.from_member_id, a);
        assert_eq!(settlement.to_member_id, b);
        assert_eq!(settlement.note.as_deref(), Some("Venmo for groceries"));
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let (a, b) = (MemberId::new(), MemberId::new());
        let mut d = draft(a, b, 100);
        d.note = Some("   ".into());

        let settlement = d.into_settlement(HouseholdId::new(), &Settings::default()).unwrap();
        assert!(settlement.note.is_none());
        assert_eq!(settlement.description(), "Settlement");
    }

    #[test]
    fn test_same_member_rejected() {
        let a = MemberId::new();
        assert_eq!(
            draft(a, a, 100).validate(&Settings::default()),
            Err(SettlementValidationError::SameMember)
        );
    }

    #[test]
    fn test_amount_rejected() {
        let (a, b) = (MemberId::new(), MemberId::new());
        let settings = Settings::default();
        assert_eq!(
            draft(a, b, 0).validate(&settings),
            Err(SettlementValidationError::NonPositiveAmount)
        );
        assert!(matches!(
            draft(a, b, 100_000_000).validate(&settings),
            Err(SettlementValidationError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_note_too_long() {
        let (a, b) = (MemberId::new(), MemberId::new());
        let mut d = draft(a, b, 100);
        d.note = Some("x".repeat(201));
        assert_eq!(
            d.validate(&Settings::default()),
            Err(SettlementValidationError::NoteTooLong { max: 200 })
        );
    }
}
