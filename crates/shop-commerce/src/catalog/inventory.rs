//! Stock level helpers for the UI layer.
//!
//! The cart store itself never clamps quantities; callers that offer
//! "+"/"-" controls bound the requested quantity with [`clamp_to_stock`]
//! before calling into the store.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock below this level is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Availability as shown next to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Plenty in stock.
    InStock,
    /// Fewer than [`LOW_STOCK_THRESHOLD`] units left.
    LowStock(u32),
    /// Nothing left.
    OutOfStock,
}

impl StockStatus {
    /// Derive the status from a product's stock.
    pub fn of(product: &Product) -> Self {
        match product.stock {
            0 => StockStatus::OutOfStock,
            n if n < LOW_STOCK_THRESHOLD => StockStatus::LowStock(n),
            _ => StockStatus::InStock,
        }
    }

    /// Check if the product can be purchased at all.
    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "In Stock"),
            StockStatus::LowStock(n) => write!(f, "In Stock (Only {} left)", n),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

/// Bound a requested quantity to what the product has in stock.
///
/// Returns 0 for out-of-stock products.
pub fn clamp_to_stock(product: &Product, requested: u32) -> u32 {
    requested.min(product.stock)
}

/// How many more units can be added given what is already in the cart.
pub fn remaining_stock(product: &Product, in_cart: u32) -> u32 {
    product.stock.saturating_sub(in_cart)
}
