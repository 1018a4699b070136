//! Expense model
//!
//! An expense is paid by one member and shared by one or more participants.
//! The per-member shares live in separate `ExpenseSplit` rows so the ledger
//! can be fetched and folded without loading whole expense graphs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::ids::{ExpenseId, HouseholdId, MemberId, SplitId};
use super::money::Money;
use crate::config::Settings;

/// Informational category attached to an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    Groceries,
    Rent,
    Utilities,
    Dining,
    Gas,
    Entertainment,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Groceries,
        Self::Rent,
        Self::Utilities,
        Self::Dining,
        Self::Gas,
        Self::Entertainment,
        Self::Other,
    ];

    /// Parse a category from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "groceries" => Some(Self::Groceries),
            "rent" => Some(Self::Rent),
            "utilities" => Some(Self::Utilities),
            "dining" => Some(Self::Dining),
            "gas" => Some(Self::Gas),
            "entertainment" => Some(Self::Entertainment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Groceries => "Groceries",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Dining => "Dining",
            Self::Gas => "Gas",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// A shared expense paid by one member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The household this expense belongs to
    pub household_id: HouseholdId,

    /// What was bought
    #[serde(default)]
    pub description: String,

    /// Total amount paid
    pub amount_total: Money,

    #[serde(default)]
    pub category: ExpenseCategory,

    /// Member who paid the full amount
    pub payer_member_id: MemberId,

    /// Date the expense happened
    pub expense_date: NaiveDate,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        household_id: HouseholdId,
        payer_member_id: MemberId,
        amount_total: Money,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            household_id,
            description: String::new(),
            amount_total,
            category: ExpenseCategory::Other,
            payer_member_id,
            expense_date,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.expense_date.format("%Y-%m-%d"),
            self.description,
            self.amount_total
        )
    }
}

/// One member's share of an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSplit {
    /// Unique identifier
    pub id: SplitId,

    /// The expense being shared
    pub expense_id: ExpenseId,

    /// The member who owes this share
    pub member_id: MemberId,

    /// Amount owed (non-negative)
    pub amount_owed: Money,
}

impl ExpenseSplit {
    /// Create a new split row
    pub fn new(expense_id: ExpenseId, member_id: MemberId, amount_owed: Money) -> Self {
        Self {
            id: SplitId::new(),
            expense_id,
            member_id,
            amount_owed,
        }
    }
}

/// How an expense total is divided among participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitMethod {
    /// Equal shares, rounding remainder on the first participant
    Equal,
    /// Explicit amount per participant; missing participants owe zero
    Custom(HashMap<MemberId, Money>),
}

/// A not-yet-recorded expense as entered by a user
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount_total: Money,
    pub category: ExpenseCategory,
    pub payer: MemberId,
    pub date: NaiveDate,
    /// Participants in selection order
    pub participants: Vec<MemberId>,
    pub split: SplitMethod,
}

impl ExpenseDraft {
    /// Compute each participant's share, in participant order
    ///
    /// Validates the draft first, so the returned shares always sum to the
    /// total within the settle tolerance.
    pub fn shares(&self, settings: &Settings) -> Result<Vec<(MemberId, Money)>, ExpenseValidationError> {
        self.validate(settings)?;
        Ok(self.unchecked_shares())
    }

    fn unchecked_shares(&self) -> Vec<(MemberId, Money)> {
        match &self.split {
            SplitMethod::Equal => self
                .participants
                .iter()
                .copied()
                .zip(self.amount_total.split_evenly(self.participants.len()))
                .collect(),
            SplitMethod::Custom(amounts) => self
                .participants
                .iter()
                .map(|id| (*id, amounts.get(id).copied().unwrap_or_default()))
                .collect(),
        }
    }

    /// Validate the draft against the configured limits
    pub fn validate(&self, settings: &Settings) -> Result<(), ExpenseValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }
        if description.chars().count() > settings.max_description_len {
            return Err(ExpenseValidationError::DescriptionTooLong {
                max: settings.max_description_len,
            });
        }

        if !self.amount_total.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.amount_total > settings.max_amount {
            return Err(ExpenseValidationError::AmountTooLarge {
                max: settings.max_amount,
            });
        }

        if self.participants.is_empty() {
            return Err(ExpenseValidationError::NoParticipants);
        }
        let mut seen = HashSet::new();
        for id in &self.participants {
            if !seen.insert(*id) {
                return Err(ExpenseValidationError::DuplicateParticipant(*id));
            }
        }

        if let SplitMethod::Custom(_) = &self.split {
            let shares = self.unchecked_shares();
            if let Some((member, _)) = shares.iter().find(|(_, amount)| amount.is_negative()) {
                return Err(ExpenseValidationError::NegativeShare(*member));
            }
            let shares_total: Money = shares.iter().map(|(_, amount)| *amount).sum();
            if !shares_total.approx_eq(self.amount_total) {
                return Err(ExpenseValidationError::SharesMismatch {
                    expense_total: self.amount_total,
                    shares_total,
                });
            }
        }

        Ok(())
    }

    /// Validate and turn the draft into an expense plus its split rows
    pub fn into_records(
        self,
        household_id: HouseholdId,
        settings: &Settings,
    ) -> Result<(Expense, Vec<ExpenseSplit>), ExpenseValidationError> {
        let shares = self.shares(settings)?;

        let mut expense = Expense::new(household_id, self.payer, self.amount_total, self.date);
        expense.description = self.description.trim().to_string();
        expense.category = self.category;

        let splits = shares
            .into_iter()
            .map(|(member_id, amount)| ExpenseSplit::new(expense.id, member_id, amount))
            .collect();

        Ok((expense, splits))
    }
}

/// Validation errors for expense drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingDescription,
    DescriptionTooLong { max: usize },
    NonPositiveAmount,
    AmountTooLarge { max: Money },
    NoParticipants,
    DuplicateParticipant(MemberId),
    NegativeShare(MemberId),
    SharesMismatch {
        expense_total: Money,
        shares_total: Money,
    },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescription => write!(f, "Description is required"),
            Self::DescriptionTooLong { max } => {
                write!(f, "Description too long (max {} characters)", max)
            }
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge { max } => write!(f, "Amount too large (max {})", max),
            Self::NoParticipants => write!(f, "Select at least one participant"),
            Self::DuplicateParticipant(id) => write!(f, "Participant listed twice: {}", id),
            Self::NegativeShare(id) => write!(f, "Invalid amount for {}", id),
            Self::SharesMismatch {
                expense_total,
                shares_total,
            } => write!(
                f,
                "Custom amounts don't add up (total {}, expected {})",
                shares_total, expense_total
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn draft(amount: Money, participants: Vec<MemberId>, split: SplitMethod) -> ExpenseDraft {
        ExpenseDraft {
            description: "Weekly groceries".into(),
            amount_total: amount,
            category: ExpenseCategory::Groceries,
            payer: participants[0],
            date: date(),
            participants,
            split,
        }
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!(ExpenseCategory::parse("dining"), Some(ExpenseCategory::Dining));
        assert_eq!(ExpenseCategory::parse(" RENT "), Some(ExpenseCategory::Rent));
        assert_eq!(ExpenseCategory::parse("travel"), None);
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::parse(&category.to_string()), Some(category));
        }
    }

    #[test]
    fn test_equal_split_assigns_remainder_to_first() {
        let members = vec![MemberId::new(), MemberId::new(), MemberId::new()];
        let d = draft(Money::from_cents(10_000), members.clone(), SplitMethod::Equal);

        let shares = d.shares(&Settings::default()).unwrap();
        assert_eq!(shares[0], (members[0], Money::from_cents(3334)));
        assert_eq!(shares[1], (members[1], Money::from_cents(3333)));
        assert_eq!(shares[2], (members[2], Money::from_cents(3333)));
    }

    #[test]
    fn test_custom_split_within_tolerance() {
        let a = MemberId::new();
        let b = MemberId::new();
        let amounts = HashMap::from([(a, Money::from_cents(6000)), (b, Money::from_cents(3999))]);
        let d = draft(Money::from_cents(10_000), vec![a, b], SplitMethod::Custom(amounts));

        assert!(d.validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_custom_split_mismatch() {
        let a = MemberId::new();
        let b = MemberId::new();
        let amounts = HashMap::from([(a, Money::from_cents(6000))]);
        let d = draft(Money::from_cents(10_000), vec![a, b], SplitMethod::Custom(amounts));

        assert_eq!(
            d.validate(&Settings::default()),
            Err(ExpenseValidationError::SharesMismatch {
                expense_total: Money::from_cents(10_000),
                shares_total: Money::from_cents(6000),
            })
        );
    }

    #[test]
    fn test_custom_split_negative_share() {
        let a = MemberId::new();
        let b = MemberId::new();
        let amounts = HashMap::from([(a, Money::from_cents(11_000)), (b, Money::from_cents(-1000))]);
        let d = draft(Money::from_cents(10_000), vec![a, b], SplitMethod::Custom(amounts));

        assert_eq!(
            d.validate(&Settings::default()),
            Err(ExpenseValidationError::NegativeShare(b))
        );
    }

    #[test]
    fn test_amount_limits() {
        let a = MemberId::new();
        let settings = Settings::default();

        let zero = draft(Money::zero(), vec![a], SplitMethod::Equal);
        assert_eq!(zero.validate(&settings), Err(ExpenseValidationError::NonPositiveAmount));

        let huge = draft(Money::from_dollars_cents(1_000_000, 0), vec![a], SplitMethod::Equal);
        assert!(matches!(
            huge.validate(&settings),
            Err(ExpenseValidationError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_description_and_participants() {
        let a = MemberId::new();
        let settings = Settings::default();

        let mut blank = draft(Money::from_cents(100), vec![a], SplitMethod::Equal);
        blank.description = "   ".into();
        assert_eq!(blank.validate(&settings), Err(ExpenseValidationError::MissingDescription));

        let mut none = draft(Money::from_cents(100), vec![a], SplitMethod::Equal);
        none.participants.clear();
        assert_eq!(none.validate(&settings), Err(ExpenseValidationError::NoParticipants));

        let twice = draft(Money::from_cents(100), vec![a, a], SplitMethod::Equal);
        assert_eq!(
            twice.validate(&settings),
            Err(ExpenseValidationError::DuplicateParticipant(a))
        );
    }

    #[test]
    fn test_into_records() {
        let household = HouseholdId::new();
        let members = vec![MemberId::new(), MemberId::new()];
        let mut d = draft(Money::from_cents(4501), members.clone(), SplitMethod::Equal);
        d.description = "  Pizza night  ".into();

        let (expense, splits) = d.into_records(household, &Settings::default()).unwrap();
        assert_eq!(expense.household_id, household);
        assert_eq!(expense.description, "Pizza night");
        assert_eq!(expense.payer_member_id, members[0]);
        assert_eq!(splits.len(), 2);
        assert!(splits.iter().all(|s| s.expense_id == expense.id));
        let total: Money = splits.iter().map(|s| s.amount_owed).sum();
        assert_eq!(total, expense.amount_total);
    }
}
