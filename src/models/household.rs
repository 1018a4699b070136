//! Household and member models
//!
//! A household is a group of members sharing expenses. Members are scoped to
//! one household; the same person in two households is two members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{HouseholdId, MemberId};

/// A group of members sharing expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    /// Unique identifier
    pub id: HouseholdId,

    /// Household name (e.g., "Maple Street")
    pub name: String,

    /// Member who created the household
    pub created_by: Option<MemberId>,

    /// When the household was created
    pub created_at: DateTime<Utc>,
}

impl Household {
    /// Create a new household
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: HouseholdId::new(),
            name: name.into(),
            created_by: None,
            created_at: Utc::now(),
        }
    }
}

/// Role of a member within a household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Created the household or was promoted
    Admin,
    /// Regular participant
    #[default]
    Member,
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Member => write!(f, "Member"),
        }
    }
}

/// A participant in a household
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// The household this member belongs to
    pub household_id: HouseholdId,

    /// Name shown in balances and plans
    pub display_name: String,

    #[serde(default)]
    pub role: MemberRole,

    /// When the member joined
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new regular member
    pub fn new(household_id: HouseholdId, display_name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            household_id,
            display_name: display_name.into(),
            role: MemberRole::Member,
            created_at: Utc::now(),
        }
    }

    /// Create a new admin member
    pub fn admin(household_id: HouseholdId, display_name: impl Into<String>) -> Self {
        Self {
            role: MemberRole::Admin,
            ..Self::new(household_id, display_name)
        }
    }

    /// Check if this member administers the household
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
