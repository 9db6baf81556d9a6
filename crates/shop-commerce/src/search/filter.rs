//! Search filter types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token meaning "no filter" for both category and price.
pub const ALL_TOKEN: &str = "all";

/// The storefront's price brackets as `(label, token)` pairs.
pub const PRICE_BRACKETS: &[(&str, &str)] = &[
    ("All Prices", "all"),
    ("Under $50", "0-50"),
    ("$50 - $100", "50-100"),
    ("$100 - $200", "100-200"),
    ("$200 - $500", "200-500"),
    ("Over $500", "500-9999"),
];

/// Case-insensitive substring match against name, description, category
/// or any tag. `needle` must already be lowercase.
pub fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// The back-office product search: name, description or category, but not
/// tags. `needle` must already be lowercase.
pub fn matches_admin_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl CategoryFilter {
    /// Parse a UI token: `"all"` (or blank) means no filter.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token == ALL_TOKEN {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    /// Check if a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &product.category == category,
        }
    }

    /// The UI token for this filter.
    pub fn as_token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_TOKEN,
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Inclusive price bracket evaluated against the effective price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceRange {
    /// Any price.
    #[default]
    All,
    /// `min <= effective price <= max`.
    Between { min: Money, max: Money },
}

impl PriceRange {
    /// Create a bracket from whole-dollar bounds.
    pub fn dollars(min: i64, max: i64) -> Self {
        PriceRange::Between {
            min: Money::new(min * 100),
            max: Money::new(max * 100),
        }
    }

    /// Parse a `"min-max"` token such as `"50-100"`.
    ///
    /// `"all"`, blank and malformed tokens (missing dash, non-numeric or
    /// negative bounds, `min > max`) all yield [`PriceRange::All`].
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token == ALL_TOKEN {
            return PriceRange::All;
        }
        match Self::parse_bounds(token) {
            Some((min, max)) => PriceRange::Between { min, max },
            None => {
                tracing::debug!(token, "ignoring malformed price range");
                PriceRange::All
            }
        }
    }

    fn parse_bounds(token: &str) -> Option<(Money, Money)> {
        let (min, max) = token.split_once('-')?;
        let min = Money::parse_decimal(min)?;
        let max = Money::parse_decimal(max)?;
        if min.is_negative() || min > max {
            return None;
        }
        Some((min, max))
    }

    /// Check if a product's effective price falls in the bracket.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Between { min, max } => {
                let price = product.effective_price();
                *min <= price && price <= *max
            }
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceRange::All => write!(f, "{}", ALL_TOKEN),
            PriceRange::Between { min, max } => {
                write!(f, "{}-{}", min.display_amount(), max.display_amount())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_price_range_parse() {
        assert_eq!(PriceRange::parse("all"), PriceRange::All);
        assert_eq!(PriceRange::parse("0-50"), PriceRange::dollars(0, 50));
        assert_eq!(PriceRange::parse("500-9999"), PriceRange::dollars(500, 9999));
        assert_eq!(
            PriceRange::parse("19.99-20.50"),
            PriceRange::Between {
                min: Money::new(1999),
                max: Money::new(2050)
            }
        );
    }

    #[test]
    fn test_price_range_malformed_is_all() {
        for token in ["", "cheap", "50", "-", "a-b", "100-50", "50-", "-50-100"] {
            assert_eq!(PriceRange::parse(token), PriceRange::All, "token {token:?}");
        }
    }

    #[test]
    fn test_price_range_is_inclusive_on_effective_price() {
        let catalog = Catalog::seed();
        // Wireless Charging Pad: $34.99, on sale for $29.99.
        let pad = catalog.get("8").unwrap();
        assert!(PriceRange::parse("0-29.99").matches(pad));
        assert!(PriceRange::parse("29.99-30").matches(pad));
        assert!(!PriceRange::parse("30-50").matches(pad));
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::seed();
        let chair = catalog.get("3").unwrap();
        assert!(CategoryFilter::parse("all").matches(chair));
        assert!(CategoryFilter::parse("Furniture").matches(chair));
        assert!(!CategoryFilter::parse("furniture").matches(chair));
        assert_eq!(CategoryFilter::parse("  ").as_token(), "all");
    }

    #[test]
    fn test_matches_search_fields() {
        let catalog = Catalog::seed();
        let bottle = catalog.get("6").unwrap();
        assert!(matches_search(bottle, "steel")); // name
        assert!(matches_search(bottle, "leak-proof")); // description
        assert!(matches_search(bottle, "home")); // category
        assert!(matches_search(bottle, "hydration")); // tag
        assert!(!matches_search(bottle, "wireless"));
    }

    #[test]
    fn test_admin_search_skips_tags() {
        let catalog = Catalog::seed();
        let headphones = catalog.get("1").unwrap();
        assert!(matches_search(headphones, "audio"));
        assert!(!matches_admin_search(headphones, "audio"));
        assert!(matches_admin_search(headphones, "noise cancellation"));
        assert!(matches_admin_search(headphones, "electronics"));
    }

    #[test]
    fn test_brackets_parse() {
        for (_, token) in PRICE_BRACKETS {
            let parsed = PriceRange::parse(token);
            assert_eq!(parsed == PriceRange::All, *token == "all");
        }
    }
}
