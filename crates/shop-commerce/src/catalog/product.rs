//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Highest allowed product rating.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are immutable once loaded; the catalog owns them and every other
/// component reads or clones them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Base price.
    pub price: Money,
    /// Sale price, strictly below `price` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Money>,
    /// Category name.
    pub category: String,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URLs, first one is the primary image.
    pub images: Vec<String>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Units in stock.
    pub stock: u32,
    /// Highlighted in listings.
    #[serde(default)]
    pub featured: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price a customer actually pays: the discount price if present,
    /// else the base price.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Check if the product has a sale price.
    pub fn is_on_sale(&self) -> bool {
        self.discount_price.is_some()
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        let discount = self.discount_price?;
        if self.price.amount_cents <= 0 {
            return None;
        }
        let savings = self.price.amount_cents - discount.amount_cents;
        Some((savings as f64 / self.price.amount_cents as f64) * 100.0)
    }

    /// Primary image URL.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check if the product can be added to a cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check every catalog invariant.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.as_str().is_empty() {
            return Err(invalid("id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.price.is_negative() {
            return Err(invalid("price is negative"));
        }
        if let Some(discount) = self.discount_price {
            if discount.is_negative() {
                return Err(invalid("discount price is negative"));
            }
            if discount >= self.price {
                return Err(invalid("discount price must be below price"));
            }
        }
        if self.images.is_empty() {
            return Err(invalid("at least one image is required"));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid("rating must be between 0 and 5"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.tags.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(invalid(&format!("duplicate tag {:?}", dup)));
        }
        Ok(())
    }
}
