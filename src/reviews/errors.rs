//! Reviews store errors.

use thiserror::Error;

/// Errors raised by the reviews store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewsError {
    /// The submitted rating is outside 1..=5 (0 means no star selected).
    #[error("please select a rating between 1 and 5 stars")]
    InvalidRating(u8),

    /// The order already has a review.
    #[error("order `{0}` has already been reviewed")]
    AlreadyReviewed(String),

    /// No review exists with the given id.
    #[error("review not found")]
    NotFound,
}
