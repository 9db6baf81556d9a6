//! The read-only product collection and its accessors.
//!
//! Every accessor is a linear scan; the catalog is small enough that an
//! index would only add bookkeeping.

use crate::catalog::{seed_products, Product};
use crate::error::CommerceError;
use crate::search::{self, QueryParams};
use std::collections::HashSet;
use std::path::Path;

/// Default number of products in the featured strip.
pub const DEFAULT_FEATURED_LIMIT: usize = 4;

/// Default number of related products on a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// The static, read-only set of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut ids = HashSet::new();
        for product in &products {
            product.validate()?;
            if !ids.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The built-in demo catalog.
    pub fn seed() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing with [`CommerceError::ProductNotFound`].
    pub fn require(&self, id: &str) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products in exactly this category.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The first `limit` featured products, in catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).take(limit).collect()
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Up to `limit` other products sharing `product`'s category.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Back-office listing: every product in catalog order, narrowed by a
    /// case-insensitive match on name, description or category. An empty
    /// search lists everything.
    pub fn admin_search(&self, search: &str) -> Vec<&Product> {
        if search.is_empty() {
            return self.products.iter().collect();
        }
        let needle = search.to_lowercase();
        self.products
            .iter()
            .filter(|p| search::matches_admin_search(p, &needle))
            .collect()
    }

    /// Run the query engine over the whole catalog.
    pub fn query(&self, params: &QueryParams) -> Vec<&Product> {
        search::query(&self.products, params)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_seed_is_valid() {
        let seed = Catalog::seed();
        assert_eq!(seed.len(), 8);
        assert!(Catalog::new(seed.products().to_vec()).is_ok());
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get("6").unwrap().name, "Stainless Steel Water Bottle");
        assert!(catalog.get("99").is_none());
        assert!(matches!(
            catalog.require("99"),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::seed();
        assert_eq!(ids(&catalog.by_category("Fashion")), vec!["5", "7"]);
        assert!(catalog.by_category("fashion").is_empty());
    }

    #[test]
    fn test_featured() {
        let catalog = Catalog::seed();
        assert_eq!(ids(&catalog.featured(DEFAULT_FEATURED_LIMIT)), vec!["1", "2", "4"]);
        assert_eq!(ids(&catalog.featured(1)), vec!["1"]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::seed();
        assert_eq!(
            catalog.categories(),
            vec!["Electronics", "Furniture", "Photography", "Fashion", "Home"]
        );
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::seed();
        let headphones = catalog.get("1").unwrap();
        assert_eq!(
            ids(&catalog.related(headphones, DEFAULT_RELATED_LIMIT)),
            vec!["2", "8"]
        );
        let chair = catalog.get("3").unwrap();
        assert!(catalog.related(chair, DEFAULT_RELATED_LIMIT).is_empty());
    }

    #[test]
    fn test_admin_search() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.admin_search("").len(), catalog.len());
        assert_eq!(ids(&catalog.admin_search("FASHION")), vec!["5", "7"]);
        // Tag-only matches are not found.
        assert!(catalog.admin_search("hydration").is_empty());
        assert_eq!(ids(&catalog.query(&QueryParams::new().with_search("hydration"))), vec!["6"]);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut products = seed_products();
        products.push(products[0].clone());
        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::DuplicateProduct(id)) if id == "1"
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::seed();
        let json = serde_json::to_string(catalog.products()).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let subset: Vec<_> = seed_products().into_iter().take(2).collect();
        std::fs::write(&path, serde_json::to_string(&subset).unwrap()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(Catalog::load(dir.path().join("missing.json")).is_err());
    }
}
