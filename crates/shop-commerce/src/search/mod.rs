//! Catalog query engine.
//!
//! Filters and orders products for display: free-text search, category,
//! price bracket and sort order, applied in that fixed order.

mod filter;
mod query;

pub use filter::{matches_admin_search, matches_search, CategoryFilter, PriceRange, PRICE_BRACKETS};
pub use query::{query, QueryParams, SortOption};
