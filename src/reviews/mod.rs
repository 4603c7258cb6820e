//! Supplier reviews.

pub mod errors;
pub mod models;
pub mod store;

pub use errors::ReviewsError;
pub use models::{NewReview, RatingDistribution, Review, ReviewId, SupplierRating};
pub use store::ReviewStore;
