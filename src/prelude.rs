//! Mandi prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartItem, CartItemId, CartStore, NewCartItem},
    groups::{GroupBuy, GroupBuyEngine, GroupId, GroupStatus, GroupsError, NewGroupBuy},
    identity::{FixedIdentity, IdentityProvider, User, UserProfile, UserType},
    reviews::{NewReview, Review, ReviewId, ReviewStore, ReviewsError, SupplierRating},
    session::{ReviewDraft, Session, SessionError},
    storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError},
};
