//! Browse the catalog.

use anyhow::Result;
use shop_commerce::catalog::{Catalog, Product, StockStatus, DEFAULT_RELATED_LIMIT};
use shop_commerce::search::{QueryParams, SortOption, PRICE_BRACKETS};

use super::{FeaturedArgs, ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{price_label, price_text, rating_stars, stock_badge};

const LIST_WIDTHS: [usize; 5] = [4, 30, 22, 12, 6];

/// Run the products command.
pub async fn run_products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let params = QueryParams::from_tokens(&args.search, &args.category, &args.price, &args.sort);
    if SortOption::from_token(&args.sort).is_none() {
        ctx.output
            .warn(&format!("Unknown sort '{}', using featured", args.sort));
    }

    let products = catalog.query(&params);
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {})",
        products.len(),
        catalog.len()
    ));
    ctx.output.kv("Sort", params.sort.display_name());
    if products.is_empty() {
        ctx.output.info("No products match these filters.");
        ctx.output.kv("Categories", &catalog.categories().join(", "));
        let brackets: Vec<&str> = PRICE_BRACKETS.iter().map(|(_, token)| *token).collect();
        ctx.output.kv("Price brackets", &brackets.join(", "));
        return Ok(());
    }

    print_table(&products, ctx);
    Ok(())
}

/// Run the product command.
pub async fn run_product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let Some(product) = catalog.get(&args.id) else {
        ctx.output
            .warn(&format!("Product not found: {}. Showing all products.", args.id));
        return run_products(ProductsArgs::default(), ctx).await;
    };

    let cache = ctx.open_cache()?;
    let in_cart = ctx.cart_store(&cache).quantity_of(&args.id);
    let related = catalog.related(product, DEFAULT_RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "inCart": in_cart,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &price_label(product));
    if let Some(pct) = product.discount_percentage() {
        ctx.output.kv("Discount", &format!("{:.0}% off", pct));
    }
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Rating", &rating_stars(product.rating));
    ctx.output.kv("Availability", &stock_badge(StockStatus::of(product)));
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    if in_cart > 0 {
        ctx.output.kv("In cart", &in_cart.to_string());
    }
    ctx.output.blank();
    ctx.output.info(&product.description);

    if !related.is_empty() {
        ctx.output.header("You might also like");
        print_table(&related, ctx);
    }
    Ok(())
}

/// Run the categories command.
pub async fn run_categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let categories: Vec<(&str, usize)> = catalog
        .categories()
        .into_iter()
        .map(|c| (c, catalog.by_category(c).len()))
        .collect();

    if ctx.output.is_json() {
        let value: Vec<_> = categories
            .iter()
            .map(|(name, count)| serde_json::json!({ "name": name, "products": count }))
            .collect();
        ctx.output.json(&value);
        return Ok(());
    }

    ctx.output.header("Categories");
    for (name, count) in &categories {
        ctx.output.list_item(&format!("{} ({})", name, count));
    }
    Ok(())
}

/// Run the featured command.
pub async fn run_featured(args: FeaturedArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let featured = catalog.featured(args.limit);

    if ctx.output.is_json() {
        ctx.output.json(&featured);
        return Ok(());
    }

    ctx.output.header("Featured Products");
    print_table(&featured, ctx);
    Ok(())
}

fn print_table(products: &[&Product], ctx: &Context) {
    ctx.output
        .table_header(&["ID", "Name", "Price", "Category", "Rating"], &LIST_WIDTHS);
    for product in products {
        let name = truncate(&product.name, LIST_WIDTHS[1]);
        let price = price_text(product);
        let rating = format!("{:.1}", product.rating);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                name.as_str(),
                price.as_str(),
                product.category.as_str(),
                rating.as_str(),
            ],
            &LIST_WIDTHS,
        );
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Look up a product, failing with a message that names the id.
pub fn require_product<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Product> {
    Ok(catalog.require(id)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Smart Watch", 30), "Smart Watch");
        assert_eq!(truncate("Stainless Steel Water Bottle", 10), "Stainless…");
    }

    #[test]
    fn test_require_product() {
        let catalog = Catalog::seed();
        assert!(require_product(&catalog, "3").is_ok());
        let err = require_product(&catalog, "42").unwrap_err();
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}
