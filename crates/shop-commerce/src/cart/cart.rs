//! Cart and cart item types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Snapshot of the product when it was added.
    pub product: Product,
    /// Units of the product; always positive.
    pub quantity: u32,
}

impl CartItem {
    /// Effective unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.effective_price().times(self.quantity)
    }
}

/// A shopping cart snapshot.
///
/// Items keep first-added order and hold at most one entry per product id.
/// `total` is recomputed inside every mutation, including deserialization,
/// so it can never drift from the items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "StoredCart")]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of every line total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: &str) -> bool {
        self.get_item(product_id).is_some()
    }

    /// Get the item for a product.
    pub fn get_item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Quantity of a product in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get_item(product_id).map_or(0, |i| i.quantity)
    }

    /// Add `quantity` units, appending a new item or incrementing the
    /// existing one. Returns whether the cart changed.
    pub(crate) fn add(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity,
            }),
        }
        self.recalculate();
        true
    }

    /// Remove a product. Returns whether it was present.
    pub(crate) fn remove(&mut self, product_id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.recalculate();
        }
        removed
    }

    /// Set an absolute quantity; `quantity <= 0` removes the item.
    /// Returns whether the cart changed.
    pub(crate) fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                self.recalculate();
                true
            }
            _ => false,
        }
    }

    /// Remove every item.
    pub(crate) fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        self.items.clear();
        self.recalculate();
        changed
    }

    fn recalculate(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

/// The persisted shape of a cart.
///
/// The stored total is ignored; duplicate product entries are merged and
/// zero-quantity entries dropped so restored carts satisfy the same
/// invariants as live ones.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartItem>,
    #[serde(default)]
    total: Option<Money>,
}

impl From<StoredCart> for Cart {
    fn from(stored: StoredCart) -> Self {
        let mut cart = Cart::new();
        for item in stored.items {
            cart.add(&item.product, item.quantity);
        }
        if stored.total.is_some_and(|t| t != cart.total) {
            tracing::debug!(
                stored = ?stored.total,
                recomputed = %cart.total,
                "stored cart total differed from items"
            );
        }
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_add_appends_then_increments() {
        let catalog = Catalog::seed();
        let headphones = catalog.get("1").unwrap();
        let mut cart = Cart::new();

        assert!(cart.add(headphones, 1));
        assert!(cart.add(headphones, 1));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
        assert_eq!(cart.total(), Money::new(39998));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        assert!(!cart.add(catalog.get("1").unwrap(), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_items_keep_first_added_order() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        for id in ["6", "1", "3"] {
            cart.add(catalog.get(id).unwrap(), 1);
        }
        cart.add(catalog.get("6").unwrap(), 2);

        let order: Vec<_> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(order, vec!["6", "1", "3"]);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(catalog.get("7").unwrap(), 1);

        assert!(cart.set_quantity("7", 4));
        assert_eq!(cart.total(), Money::new(9996));
        assert!(!cart.set_quantity("7", 4));
        assert!(!cart.set_quantity("99", 3));
        assert!(cart.set_quantity("7", -1));
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_line_total_uses_effective_price() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(catalog.get("8").unwrap(), 3);
        assert_eq!(cart.get_item("8").unwrap().line_total(), Money::new(8997));
    }

    #[test]
    fn test_serialized_shape() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(catalog.get("6").unwrap(), 2);

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["total"], serde_json::json!(59.98));
        assert_eq!(value["items"][0]["quantity"], 2);
        assert_eq!(value["items"][0]["product"]["id"], "6");
    }

    #[test]
    fn test_deserialize_recomputes_total() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(catalog.get("1").unwrap(), 2);

        let mut value = serde_json::to_value(&cart).unwrap();
        value["total"] = serde_json::json!(1.0);
        let restored: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(restored.total(), Money::new(39998));
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_deserialize_merges_duplicates() {
        let catalog = Catalog::seed();
        let item = serde_json::json!({
            "product": catalog.get("6").unwrap(),
            "quantity": 1,
        });
        let zero = serde_json::json!({
            "product": catalog.get("7").unwrap(),
            "quantity": 0,
        });
        let value = serde_json::json!({ "items": [item.clone(), zero, item] });

        let restored: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(restored.unique_item_count(), 1);
        assert_eq!(restored.quantity_of("6"), 2);
    }
}
