//! Product catalog module.
//!
//! Contains the product type, the static seed catalog and its accessors,
//! stock helpers and back-office figures.

mod catalog;
mod inventory;
mod product;
mod seed;
mod stats;

pub use catalog::{Catalog, DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT};
pub use inventory::{clamp_to_stock, remaining_stock, StockStatus, LOW_STOCK_THRESHOLD};
pub use product::{Product, MAX_RATING};
pub use seed::seed_products;
pub use stats::CatalogStats;
