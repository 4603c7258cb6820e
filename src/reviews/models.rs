//! Review models and derived aggregates.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Review id, generated by the store.
pub type ReviewId = TypedUuid<Review>;

/// A customer review of a supplier, tied to a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub order_id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub customer_id: String,
    pub customer_name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
    pub date: Timestamp,
    /// Whether the review comes from a completed order.
    pub verified: bool,
    /// Times other users marked this review helpful.
    pub helpful: u32,
    /// Set once by [`crate::reviews::ReviewStore::report`]; never cleared.
    pub reported: bool,
}

/// Review fields supplied by the caller.
///
/// The store assigns the id, the timestamp and the moderation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub order_id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub customer_id: String,
    pub customer_name: String,
    pub rating: u8,
    pub comment: String,
    pub verified: bool,
}

/// Aggregate rating for a supplier over its non-reported reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplierRating {
    /// Average star rating rounded to 1 decimal; 0 with no eligible reviews.
    pub average_rating: Decimal,
    /// Number of reviews that entered the average.
    pub total_reviews: usize,
}

impl SupplierRating {
    pub(crate) const EMPTY: Self = Self {
        average_rating: Decimal::ZERO,
        total_reviews: 0,
    };
}

/// Count of non-reported reviews per star value, 1 through 5.
///
/// Derived on demand for presentation; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingDistribution {
    counts: [u32; 5],
}

impl RatingDistribution {
    pub(crate) fn record(&mut self, rating: u8) {
        if let Some(slot) = self.counts.get_mut(usize::from(rating).wrapping_sub(1)) {
            *slot += 1;
        }
    }

    /// Number of reviews with exactly `stars` stars (1 through 5).
    #[must_use]
    pub fn count(&self, stars: u8) -> u32 {
        self.counts
            .get(usize::from(stars).wrapping_sub(1))
            .copied()
            .unwrap_or(0)
    }

    /// Total reviews across all star values.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
