//! Cart store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    cart::models::{CartItem, CartItemId, CartState, NewCartItem},
    storage::{self, CART_NAMESPACE, KeyValueStore},
};

/// Shopping cart state container.
///
/// State is restored from storage on construction and persisted after every
/// mutation. Persistence is best effort: a failing backend degrades to an
/// unsaved cart, never to an error or a panic.
#[derive(Clone)]
pub struct CartStore {
    state: CartState,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Restores the cart persisted under [`CART_NAMESPACE`], or starts empty.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = storage::restore_or_default(storage.as_ref(), CART_NAMESPACE);

        Self { state, storage }
    }

    /// Adds an item, merging quantity into an existing (product, supplier)
    /// line. Returns the id of the affected line.
    pub fn add_to_cart(&mut self, new_item: NewCartItem) -> CartItemId {
        let product = new_item.product_id.clone();
        let supplier = new_item.supplier_id.clone();

        let id = self.state.add(new_item);

        debug!(%id, %product, %supplier, "added item to cart");
        self.persist();

        id
    }

    /// Removes a line by id. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, id: CartItemId) {
        self.state.remove(id);

        debug!(%id, "removed item from cart");
        self.persist();
    }

    /// Sets a line's quantity; a quantity below 1 removes the line.
    pub fn update_quantity(&mut self, id: CartItemId, quantity: u32) {
        self.state.set_quantity(id, quantity);

        debug!(%id, quantity, "updated cart quantity");
        self.persist();
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.state.clear();

        debug!("cleared cart");
        self.persist();
    }

    /// Quantity in the cart for a (product, supplier) pair, or 0.
    #[must_use]
    pub fn item_quantity(&self, product_id: &str, supplier_id: &str) -> u32 {
        self.state.quantity_of(product_id, supplier_id)
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.state.items
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.state.total_items
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.state.total_amount
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    fn persist(&self) {
        storage::persist_best_effort(self.storage.as_ref(), CART_NAMESPACE, &self.state);
    }
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
