//! Shopping cart module.
//!
//! Contains the cart snapshot type and the store that persists it.

mod cart;
mod store;

pub use cart::{Cart, CartItem};
pub use store::{CartStore, CART_STORAGE_KEY};
