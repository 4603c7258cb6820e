//! Reviews store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    reviews::{
        errors::ReviewsError,
        models::{NewReview, RatingDistribution, Review, ReviewId, SupplierRating},
    },
    storage::{self, KeyValueStore, REVIEWS_NAMESPACE},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ReviewsState {
    reviews: Vec<Review>,
}

/// Review collection with moderation flags and derived supplier aggregates.
///
/// One review per order is a store invariant: a second submission for the
/// same order is rejected. Reviews are never deleted; reporting flags them
/// out of the aggregates instead.
#[derive(Clone)]
pub struct ReviewStore {
    state: ReviewsState,
    storage: Arc<dyn KeyValueStore>,
}

impl ReviewStore {
    /// Restores the reviews persisted under [`REVIEWS_NAMESPACE`], or starts
    /// empty.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = storage::restore_or_default(storage.as_ref(), REVIEWS_NAMESPACE);

        Self { state, storage }
    }

    /// Records a review for a completed order.
    ///
    /// The store assigns the id, the submission timestamp, `helpful = 0`
    /// and `reported = false`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewsError::InvalidRating`] for a rating outside 1..=5
    /// and [`ReviewsError::AlreadyReviewed`] when the order already has a
    /// review. Nothing is recorded in either case.
    pub fn add_review(&mut self, new_review: NewReview) -> Result<ReviewId, ReviewsError> {
        if !(1..=5).contains(&new_review.rating) {
            return Err(ReviewsError::InvalidRating(new_review.rating));
        }

        if self.order_review(&new_review.order_id).is_some() {
            return Err(ReviewsError::AlreadyReviewed(new_review.order_id));
        }

        let id = ReviewId::generate();
        let review = Review {
            id,
            order_id: new_review.order_id,
            supplier_id: new_review.supplier_id,
            supplier_name: new_review.supplier_name,
            customer_id: new_review.customer_id,
            customer_name: new_review.customer_name,
            rating: new_review.rating,
            comment: new_review.comment,
            date: Timestamp::now(),
            verified: new_review.verified,
            helpful: 0,
            reported: false,
        };

        debug!(%id, supplier = %review.supplier_id, rating = review.rating, "review recorded");
        self.state.reviews.push(review);
        self.persist();

        Ok(id)
    }

    /// Increments a review's helpful counter. Every call counts; there is no
    /// per-user deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewsError::NotFound`] for an unknown id.
    pub fn mark_helpful(&mut self, id: ReviewId) -> Result<(), ReviewsError> {
        let review = self.review_mut(id)?;
        review.helpful += 1;

        self.persist();

        Ok(())
    }

    /// Flags a review as reported. One-way: there is no un-report.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewsError::NotFound`] for an unknown id.
    pub fn report(&mut self, id: ReviewId) -> Result<(), ReviewsError> {
        let review = self.review_mut(id)?;
        review.reported = true;

        debug!(%id, "review reported");
        self.persist();

        Ok(())
    }

    /// All reviews for a supplier, in insertion order. Callers sort.
    #[must_use]
    pub fn supplier_reviews(&self, supplier_id: &str) -> Vec<&Review> {
        self.state
            .reviews
            .iter()
            .filter(|review| review.supplier_id == supplier_id)
            .collect()
    }

    /// All reviews written by a customer, in insertion order.
    #[must_use]
    pub fn customer_reviews(&self, customer_id: &str) -> Vec<&Review> {
        self.state
            .reviews
            .iter()
            .filter(|review| review.customer_id == customer_id)
            .collect()
    }

    /// The single review tied to an order, if one exists.
    #[must_use]
    pub fn order_review(&self, order_id: &str) -> Option<&Review> {
        self.state
            .reviews
            .iter()
            .find(|review| review.order_id == order_id)
    }

    /// Average rating over a supplier's non-reported reviews, rounded to
    /// 1 decimal. `{0, 0}` when there are no eligible reviews.
    #[must_use]
    pub fn supplier_rating(&self, supplier_id: &str) -> SupplierRating {
        let ratings: Vec<u32> = self
            .eligible_reviews(supplier_id)
            .map(|review| u32::from(review.rating))
            .collect();

        if ratings.is_empty() {
            return SupplierRating::EMPTY;
        }

        let sum: u32 = ratings.iter().sum();
        let average = Decimal::from(sum) / Decimal::from(ratings.len());

        SupplierRating {
            average_rating: average
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
            total_reviews: ratings.len(),
        }
    }

    /// Count per star value over a supplier's non-reported reviews.
    #[must_use]
    pub fn rating_distribution(&self, supplier_id: &str) -> RatingDistribution {
        let mut distribution = RatingDistribution::default();

        for review in self.eligible_reviews(supplier_id) {
            distribution.record(review.rating);
        }

        distribution
    }

    /// Every review in the store, in insertion order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.state.reviews
    }

    fn eligible_reviews(&self, supplier_id: &str) -> impl Iterator<Item = &Review> {
        self.state
            .reviews
            .iter()
            .filter(move |review| review.supplier_id == supplier_id && !review.reported)
    }

    fn review_mut(&mut self, id: ReviewId) -> Result<&mut Review, ReviewsError> {
        self.state
            .reviews
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or(ReviewsError::NotFound)
    }

    fn persist(&self) {
        storage::persist_best_effort(self.storage.as_ref(), REVIEWS_NAMESPACE, &self.state);
    }
}

impl Debug for ReviewStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ReviewStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
