//! Session container.
//!
//! One [`Session`] per client session bundles the three stores with the
//! identity collaborator, replacing ambient global singletons. The stores
//! themselves never look at identity; the session reads the signed-in user
//! when an operation needs to attach one.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    cart::CartStore,
    groups::{GroupBuyEngine, GroupId, GroupsError, NewGroupBuy},
    identity::IdentityProvider,
    reviews::{NewReview, ReviewId, ReviewStore, ReviewsError},
    storage::KeyValueStore,
};

/// Errors raised by session operations that need a signed-in user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No user is signed in.
    #[error("please sign in first")]
    NotSignedIn,

    /// The reviews store rejected the operation.
    #[error(transparent)]
    Reviews(#[from] ReviewsError),

    /// The group-buy engine rejected the operation.
    #[error(transparent)]
    Groups(#[from] GroupsError),
}

/// A review as drafted in the rating dialog; the session attaches the
/// signed-in customer and marks it verified.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub order_id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub rating: u8,
    pub comment: String,
}

/// Explicitly constructed state container for one client session.
pub struct Session {
    /// Shopping cart, persisted per device.
    pub cart: CartStore,
    /// Supplier reviews, persisted per device.
    pub reviews: ReviewStore,
    /// Group-buy campaigns for this session.
    pub groups: GroupBuyEngine,
    identity: Arc<dyn IdentityProvider>,
}

impl Session {
    /// Builds a session on the given storage backend and identity provider,
    /// restoring whatever state the backend holds.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            cart: CartStore::restore(storage.clone()),
            reviews: ReviewStore::restore(storage),
            groups: GroupBuyEngine::new(),
            identity,
        }
    }

    /// Submits a review for a completed order as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotSignedIn`] without a signed-in user and
    /// profile; review validation errors pass through.
    pub fn submit_review(&mut self, draft: ReviewDraft) -> Result<ReviewId, SessionError> {
        let user = self.identity.current_user().ok_or(SessionError::NotSignedIn)?;
        let profile = self.identity.profile().ok_or(SessionError::NotSignedIn)?;

        let id = self.reviews.add_review(NewReview {
            order_id: draft.order_id,
            supplier_id: draft.supplier_id,
            supplier_name: draft.supplier_name,
            customer_id: user.uid,
            customer_name: profile.name,
            rating: draft.rating,
            comment: draft.comment,
            // Reviews submitted through an order are verified purchases.
            verified: true,
        })?;

        Ok(id)
    }

    /// Opens a group-buy campaign organized by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotSignedIn`] without a signed-in user and
    /// profile; campaign validation errors pass through.
    pub fn create_group(&mut self, new_group: NewGroupBuy) -> Result<GroupId, SessionError> {
        let user = self.identity.current_user().ok_or(SessionError::NotSignedIn)?;
        let profile = self.identity.profile().ok_or(SessionError::NotSignedIn)?;

        let id = self.groups.create_group(new_group, &user.uid, &profile.name)?;

        Ok(id)
    }

    /// Joins a group-buy campaign as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotSignedIn`] without a signed-in user;
    /// join rejections pass through.
    pub fn join_group(&mut self, id: GroupId) -> Result<(), SessionError> {
        let user = self.identity.current_user().ok_or(SessionError::NotSignedIn)?;

        self.groups.join_group(id, &user.uid)?;

        Ok(())
    }

    /// Whether the signed-in user organized or joined a campaign.
    #[must_use]
    pub fn in_group(&self, id: GroupId) -> bool {
        self.identity
            .current_user()
            .is_some_and(|user| self.groups.is_member(id, &user.uid))
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Session")
            .field("cart", &self.cart)
            .field("reviews", &self.reviews)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}
