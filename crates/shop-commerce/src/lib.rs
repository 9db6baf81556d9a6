//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront does that isn't I/O:
//!
//! - **Catalog**: Products, the seed catalog, stock helpers
//! - **Search**: The filter/sort query engine over the catalog
//! - **Cart**: Cart snapshots and the persisted cart store
//! - **Checkout**: Shipping/payment steps, order pricing and confirmation
//!
//! # Example
//!
//! ```rust
//! use shop_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let mut store = CartStore::in_memory();
//!
//! let headphones = catalog.get("1").unwrap();
//! let bottle = catalog.get("6").unwrap();
//! store.add_to_cart(headphones, 2).unwrap();
//! store.add_to_cart(bottle, 1).unwrap();
//! assert_eq!(store.total().display(), "$429.97");
//!
//! let wireless = catalog.query(&QueryParams::new().with_search("wireless"));
//! assert_eq!(wireless.len(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{clamp_to_stock, Catalog, Product, StockStatus};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartStore};

    // Checkout
    pub use crate::checkout::{
        CheckoutCustomer, CheckoutFlow, CheckoutStep, OrderConfirmation, OrderSummary,
        PaymentDetails, PricingPolicy, ShippingDetails,
    };

    // Search
    pub use crate::search::{CategoryFilter, PriceRange, QueryParams, SortOption};
}
