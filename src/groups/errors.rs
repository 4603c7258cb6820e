//! Group-buy engine errors.

use thiserror::Error;

/// Errors raised by the group-buy engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupsError {
    /// No group exists with the given id.
    #[error("group not found")]
    NotFound,

    /// The participant cap is already reached.
    #[error("group is already full")]
    Full,

    /// The user already organized or joined this group.
    #[error("already a member of this group")]
    AlreadyJoined,

    /// The group is not open for joining.
    #[error("group is not active")]
    NotActive,

    /// Only the organizer may close a campaign.
    #[error("only the organizer can complete a group")]
    NotOrganizer,

    /// Target amount and participant cap must both be positive.
    #[error("target amount and participant cap must be positive")]
    InvalidTarget,
}
