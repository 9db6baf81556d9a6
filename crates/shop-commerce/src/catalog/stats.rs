//! Back-office catalog figures.

use crate::catalog::{Catalog, StockStatus};
use crate::money::Money;
use serde::Serialize;

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub categories: usize,
    pub featured: usize,
    pub on_sale: usize,
    /// In stock but under the low-stock threshold.
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Units across every product.
    pub units_in_stock: u64,
    /// Units in stock priced at the effective price.
    pub inventory_value: Money,
}

impl CatalogStats {
    /// Tally the catalog.
    pub fn of(catalog: &Catalog) -> Self {
        let products = catalog.products();
        let count = |f: fn(&StockStatus) -> bool| {
            products
                .iter()
                .filter(|p| f(&StockStatus::of(p)))
                .count()
        };

        Self {
            total_products: products.len(),
            categories: catalog.categories().len(),
            featured: products.iter().filter(|p| p.featured).count(),
            on_sale: products.iter().filter(|p| p.is_on_sale()).count(),
            low_stock: count(|s| matches!(s, StockStatus::LowStock(_))),
            out_of_stock: count(|s| matches!(s, StockStatus::OutOfStock)),
            units_in_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
            inventory_value: products
                .iter()
                .map(|p| p.effective_price() * p.stock)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_stats() {
        let stats = CatalogStats::of(&Catalog::seed());
        assert_eq!(stats.total_products, 8);
        assert_eq!(stats.categories, 5);
        assert_eq!(stats.featured, 3);
        assert_eq!(stats.on_sale, 3);
        assert_eq!(stats.low_stock, 0);
        assert_eq!(stats.out_of_stock, 0);
        assert_eq!(stats.units_in_stock, 305);
    }

    #[test]
    fn test_stock_buckets() {
        let mut products = Catalog::seed().products().to_vec();
        products[0].stock = 0;
        products[1].stock = 3;
        let catalog = Catalog::new(products).unwrap();

        let stats = CatalogStats::of(&catalog);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.units_in_stock, 305 - 45 - 28 + 3);
        let value: Money = catalog
            .products()
            .iter()
            .map(|p| p.effective_price() * p.stock)
            .sum();
        assert_eq!(stats.inventory_value, value);
    }
}
