//! Shopping cart.

pub mod models;
pub mod store;

pub use models::{CartItem, CartItemId, CartState, NewCartItem};
pub use store::CartStore;
