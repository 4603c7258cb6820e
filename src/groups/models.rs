//! Group-buy models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Group-buy campaign id, generated on creation.
pub type GroupId = TypedUuid<GroupBuy>;

/// Lifecycle of a group-buy campaign. Transitions are forward only:
/// upcoming → active → completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// Announced but not yet open for joining.
    Upcoming,
    /// Open for joining.
    Active,
    /// Funding target reached.
    Completed,
}

/// A crowdfunded bulk-purchase campaign with a funding target and a
/// participant cap.
///
/// `current_amount` and `participants` only ever increase, through joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBuy {
    pub id: GroupId,
    pub title: String,
    pub description: String,
    /// Display name of the organizer.
    pub organizer: String,
    /// Identity id of the organizer.
    pub organizer_id: String,
    pub location: String,
    pub category: String,
    /// Funding target in whole currency units.
    pub target_amount: u64,
    /// Amount pledged so far, in whole currency units.
    pub current_amount: u64,
    pub participants: u32,
    pub max_participants: u32,
    /// Advertised savings label, e.g. `"25%"`.
    pub savings: String,
    pub status: GroupStatus,
}

impl GroupBuy {
    /// Funding progress as a percentage, clamped to 100 even when rounding
    /// pushes `current_amount` past the target.
    #[must_use]
    pub fn progress(&self) -> Decimal {
        if self.target_amount == 0 {
            return Decimal::ZERO;
        }

        let raw = Decimal::from(self.current_amount) * Decimal::ONE_HUNDRED
            / Decimal::from(self.target_amount);

        raw.min(Decimal::ONE_HUNDRED)
    }

    /// The fixed amount each joining participant contributes toward the
    /// target: floor(target / cap), not the amount actually paid.
    #[must_use]
    pub fn slot_contribution(&self) -> u64 {
        if self.max_participants == 0 {
            return 0;
        }

        self.target_amount / u64::from(self.max_participants)
    }

    /// Whether the participant cap is reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }
}

/// Campaign fields supplied by the creation dialog.
///
/// The engine assigns the id, the organizer, the starting amounts and the
/// status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGroupBuy {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    /// Funding target in whole currency units.
    pub target_amount: u64,
    pub max_participants: u32,
    /// Advertised savings label, e.g. `"25%"`.
    pub savings: String,
}
