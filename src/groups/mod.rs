//! Group buying.

pub mod engine;
pub mod errors;
pub mod models;

pub use engine::GroupBuyEngine;
pub use errors::GroupsError;
pub use models::{GroupBuy, GroupId, GroupStatus, NewGroupBuy};
