//! Query parameters and the filter/sort pipeline.

use crate::catalog::Product;
use crate::search::{matches_search, CategoryFilter, PriceRange};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Featured products first, newest first within each group.
    #[default]
    Featured,
    /// Effective price, low to high.
    PriceAsc,
    /// Effective price, high to low.
    PriceDesc,
    /// Newest first.
    Newest,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Newest,
    ];

    /// The UI token (e.g. `"price-asc"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Newest => "newest",
        }
    }

    /// Label shown in the sort menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
        }
    }

    /// Parse a UI token.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "featured" => Some(SortOption::Featured),
            "price-asc" => Some(SortOption::PriceAsc),
            "price-desc" => Some(SortOption::PriceDesc),
            "newest" => Some(SortOption::Newest),
            _ => None,
        }
    }

    /// Ordering of two products under this option.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.effective_price().cmp(&b.effective_price()),
            SortOption::PriceDesc => b.effective_price().cmp(&a.effective_price()),
            SortOption::Newest => b.created_at.cmp(&a.created_at),
            SortOption::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.created_at.cmp(&a.created_at)),
        }
    }
}

/// Filter and sort parameters for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryParams {
    /// Free-text search; empty disables the search stage.
    pub search: String,
    /// Category filter.
    pub category: CategoryFilter,
    /// Price bracket.
    pub price: PriceRange,
    /// Sort order.
    pub sort: SortOption,
}

impl QueryParams {
    /// Parameters that pass everything through in featured order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from the raw UI tokens.
    ///
    /// Unknown sort tokens fall back to [`SortOption::Featured`]; malformed
    /// price tokens fall back to [`PriceRange::All`].
    pub fn from_tokens(search: &str, category: &str, price: &str, sort: &str) -> Self {
        Self {
            search: search.to_string(),
            category: CategoryFilter::parse(category),
            price: PriceRange::parse(price),
            sort: SortOption::from_token(sort).unwrap_or_default(),
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.search = q.into();
        self
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(category.into());
        self
    }

    /// Restrict to a price bracket.
    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Lowercased search needle, or `None` when the search stage is off.
    ///
    /// Only the empty string turns the stage off. Whitespace is matched
    /// literally, so `"   "` finds nothing in the seed catalog.
    fn needle(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}

/// Filter and order `products` according to `params`.
///
/// Stages run in fixed order: search, category, price, then a stable sort.
/// The result borrows from the input, so feeding it back in with the same
/// parameters returns the same sequence.
pub fn query<'a, I>(products: I, params: &QueryParams) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = params.needle();

    let mut result: Vec<&Product> = products
        .into_iter()
        .filter(|p| needle.as_deref().map_or(true, |n| matches_search(p, n)))
        .filter(|p| params.category.matches(p))
        .filter(|p| params.price.matches(p))
        .collect();

    result.sort_by(|a, b| params.sort.compare(a, b));

    tracing::debug!(
        search = %params.search,
        category = params.category.as_token(),
        price = %params.price,
        sort = params.sort.as_str(),
        matched = result.len(),
        "catalog query"
    );

    result
}
