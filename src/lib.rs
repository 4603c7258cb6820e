//! Mandi
//!
//! Mandi is the client-side state engine for a street-food supply
//! marketplace: shopping cart, supplier reviews and group-buying campaigns,
//! with derived totals and durable local persistence.
//!
//! State lives in explicitly constructed containers, one [`Session`] per
//! client session, rather than ambient globals. The cart and review stores
//! restore themselves from a [`storage::KeyValueStore`] on construction and
//! persist after every mutation, tolerating missing or corrupt payloads by
//! starting empty.
//!
//! [`Session`]: session::Session

pub mod cart;
pub mod groups;
pub mod identity;
pub mod prelude;
pub mod reviews;
pub mod session;
pub mod storage;

mod uuids;

pub use uuids::TypedUuid;
