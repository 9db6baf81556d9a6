//! The persisted cart store.

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;
use shop_cache::Cache;

/// Key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Owns the current cart snapshot and keeps it persisted.
///
/// Every mutation builds the next snapshot, writes the whole cart under
/// [`CART_STORAGE_KEY`], and swaps it in only once the write succeeds. A
/// failed write leaves the current snapshot untouched. No-op mutations skip
/// the write.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    cache: Cache,
}

impl CartStore {
    /// Open the store, restoring the persisted cart.
    ///
    /// A missing or unparsable record yields an empty cart.
    pub fn open(cache: Cache) -> Self {
        let cart = match cache.get::<Cart>(CART_STORAGE_KEY) {
            Ok(Some(cart)) => {
                tracing::debug!(
                    items = cart.unique_item_count(),
                    total = %cart.total(),
                    "restored cart"
                );
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = CART_STORAGE_KEY, error = %e, "discarding unreadable cart");
                Cart::new()
            }
        };
        Self { cart, cache }
    }

    /// A store backed by a fresh in-memory cache.
    pub fn in_memory() -> Self {
        Self::open(Cache::in_memory())
    }

    /// The current snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Current cart total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Add `quantity` units of `product`. Stock is not checked here.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: u32,
    ) -> Result<&Cart, CommerceError> {
        let mut next = self.cart.clone();
        if !next.add(product, quantity) {
            return Ok(&self.cart);
        }
        tracing::debug!(product_id = %product.id, quantity, "add to cart");
        self.commit(next)
    }

    /// Remove a product; absent products are ignored.
    pub fn remove_from_cart(&mut self, product_id: &str) -> Result<&Cart, CommerceError> {
        let mut next = self.cart.clone();
        if !next.remove(product_id) {
            return Ok(&self.cart);
        }
        tracing::debug!(product_id, "remove from cart");
        self.commit(next)
    }

    /// Set a product's quantity. Zero or negative removes the item.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
    ) -> Result<&Cart, CommerceError> {
        let mut next = self.cart.clone();
        if !next.set_quantity(product_id, quantity) {
            return Ok(&self.cart);
        }
        tracing::debug!(product_id, quantity, "update cart quantity");
        self.commit(next)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Result<&Cart, CommerceError> {
        let mut next = self.cart.clone();
        if !next.clear() {
            return Ok(&self.cart);
        }
        tracing::debug!("clear cart");
        self.commit(next)
    }

    /// Check if a product is in the cart.
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.cart.contains(product_id)
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Quantity of a product, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.cart.quantity_of(product_id)
    }

    /// Release the store, returning the final snapshot.
    pub fn close(self) -> Cart {
        self.cart
    }

    fn commit(&mut self, next: Cart) -> Result<&Cart, CommerceError> {
        self.cache.set(CART_STORAGE_KEY, &next)?;
        self.cart = next;
        tracing::debug!(
            items = self.cart.unique_item_count(),
            total = %self.cart.total(),
            "cart persisted"
        );
        Ok(&self.cart)
    }
}
