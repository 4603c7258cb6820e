//! Cart models and pure state transitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Cart line item id, generated when the line is first added.
pub type CartItemId = TypedUuid<CartItem>;

/// A line in the cart: one product from one supplier.
///
/// Two additions of the same (product, supplier) pair merge into one line;
/// the id exists for display and targeted updates, not identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: String,
    pub product_name: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub unit: String,
    pub image: String,
    pub min_order: String,
    pub in_stock: bool,
}

/// A line item as submitted from the product page, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub product_id: String,
    pub product_name: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub unit: String,
    pub image: String,
    pub min_order: String,
    pub in_stock: bool,
}

/// Cart contents plus totals derived from them.
///
/// `total_items` and `total_amount` are recomputed from the item list after
/// every change; they are never mutated independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_amount: Decimal,
}

impl CartState {
    /// Adds a line, merging with an existing (product, supplier) line.
    ///
    /// Returns the id of the line the quantity landed on.
    pub(crate) fn add(&mut self, new_item: NewCartItem) -> CartItemId {
        let existing = self.items.iter_mut().find(|item| {
            item.product_id == new_item.product_id && item.supplier_id == new_item.supplier_id
        });

        let id = if let Some(item) = existing {
            item.quantity += new_item.quantity;
            item.id
        } else {
            let id = CartItemId::generate();
            self.items.push(CartItem {
                id,
                product_id: new_item.product_id,
                product_name: new_item.product_name,
                supplier_id: new_item.supplier_id,
                supplier_name: new_item.supplier_name,
                price: new_item.price,
                // a quantity below 1 never enters the list
                quantity: new_item.quantity.max(1),
                unit: new_item.unit,
                image: new_item.image,
                min_order: new_item.min_order,
                in_stock: new_item.in_stock,
            });
            id
        };

        self.recompute_totals();

        id
    }

    /// Removes a line by id. Unknown ids are a no-op.
    pub(crate) fn remove(&mut self, id: CartItemId) {
        self.items.retain(|item| item.id != id);
        self.recompute_totals();
    }

    /// Sets a line's quantity. A quantity below 1 removes the line.
    pub(crate) fn set_quantity(&mut self, id: CartItemId, quantity: u32) {
        if quantity < 1 {
            self.remove(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
            self.recompute_totals();
        }
    }

    /// Empties the cart.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Quantity currently in the cart for a (product, supplier) pair, or 0.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str, supplier_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id && item.supplier_id == supplier_id)
            .map_or(0, |item| item.quantity)
    }

    fn recompute_totals(&mut self) {
        self.total_items = self.items.iter().map(|item| item.quantity).sum();
        self.total_amount = self
            .items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn onions(quantity: u32) -> NewCartItem {
        NewCartItem {
            product_id: "onions".to_string(),
            product_name: "Onions".to_string(),
            supplier_id: "fresh-farms".to_string(),
            supplier_name: "Fresh Farms".to_string(),
            price: Decimal::new(2550, 2),
            quantity,
            unit: "kg".to_string(),
            image: "onions.jpg".to_string(),
            min_order: "5 kg".to_string(),
            in_stock: true,
        }
    }

    fn oil(quantity: u32) -> NewCartItem {
        NewCartItem {
            product_id: "sunflower-oil".to_string(),
            product_name: "Sunflower Oil".to_string(),
            supplier_id: "oil-depot".to_string(),
            supplier_name: "Oil Depot".to_string(),
            price: Decimal::new(120, 0),
            quantity,
            unit: "litre".to_string(),
            image: "oil.jpg".to_string(),
            min_order: "10 litre".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut state = CartState::default();

        let first = state.add(onions(2));
        let second = state.add(onions(3));
        let third = state.add(onions(1));

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.quantity_of("onions", "fresh-farms"), 6);
        assert_eq!(state.total_items, 6);
        assert_eq!(state.total_amount, Decimal::new(15300, 2));
    }

    #[test]
    fn same_product_from_another_supplier_is_a_separate_line() {
        let mut state = CartState::default();

        state.add(onions(2));
        let mut other_supplier = onions(2);
        other_supplier.supplier_id = "mandi-direct".to_string();
        state.add(other_supplier);

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total_items, 4);
    }

    #[test]
    fn totals_cover_all_lines() {
        let mut state = CartState::default();

        state.add(onions(2));
        state.add(oil(3));

        assert_eq!(state.total_items, 5);
        // 2 × 25.50 + 3 × 120
        assert_eq!(state.total_amount, Decimal::new(41100, 2));
    }

    #[test]
    fn set_quantity_zero_equals_remove() {
        let mut removed = CartState::default();
        let mut zeroed = CartState::default();

        let id_removed = removed.add(onions(2));
        removed.add(oil(1));
        let id_zeroed = zeroed.add(onions(2));
        zeroed.add(oil(1));

        removed.remove(id_removed);
        zeroed.set_quantity(id_zeroed, 0);

        assert_eq!(removed.items, zeroed.items);
        assert_eq!(removed.total_items, zeroed.total_items);
        assert_eq!(removed.total_amount, zeroed.total_amount);
    }

    #[test]
    fn set_quantity_updates_totals() {
        let mut state = CartState::default();

        let id = state.add(onions(2));
        state.set_quantity(id, 10);

        assert_eq!(state.total_items, 10);
        assert_eq!(state.total_amount, Decimal::new(25500, 2));
    }

    #[test]
    fn set_quantity_on_unknown_id_changes_nothing() {
        let mut state = CartState::default();
        state.add(onions(2));
        let before = state.clone();

        state.set_quantity(CartItemId::generate(), 5);

        assert_eq!(state, before);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut state = CartState::default();
        state.add(onions(2));
        let before = state.clone();

        state.remove(CartItemId::generate());

        assert_eq!(state, before);
    }

    #[test]
    fn clear_resets_to_empty_state() {
        let mut state = CartState::default();
        state.add(onions(2));
        state.add(oil(3));

        state.clear();

        assert_eq!(state, CartState::default());
        assert!(state.items.is_empty());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_amount, Decimal::ZERO);
    }

    #[test]
    fn quantity_of_unknown_pair_is_zero() {
        let state = CartState::default();

        assert_eq!(state.quantity_of("onions", "fresh-farms"), 0);
    }

    #[test]
    fn zero_quantity_add_still_enters_one_unit() {
        let mut state = CartState::default();

        state.add(onions(0));

        assert_eq!(state.quantity_of("onions", "fresh-farms"), 1);
    }
}
