//! Back-office commands, for admins only.

use anyhow::{bail, Result};
use shop_auth::{AuthError, AuthSession};
use shop_commerce::catalog::{CatalogStats, StockStatus};

use super::{AdminArgs, AdminCommand};
use crate::context::Context;
use crate::output::price_text;

const ADMIN_WIDTHS: [usize; 6] = [4, 30, 14, 22, 6, 9];

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let session = ctx.auth_session(&cache);
    require_admin(&session)?;

    let catalog = ctx.catalog()?;
    match args.command {
        AdminCommand::Products { search } => {
            let products = catalog.admin_search(&search);
            if ctx.output.is_json() {
                ctx.output.json(&products);
                return Ok(());
            }

            ctx.output.header(&format!(
                "Products ({} of {})",
                products.len(),
                catalog.len()
            ));
            if products.is_empty() {
                ctx.output.info("No products match that search.");
                return Ok(());
            }
            ctx.output.table_header(
                &["ID", "Name", "Category", "Price", "Stock", "Featured"],
                &ADMIN_WIDTHS,
            );
            for product in products {
                let price = price_text(product);
                let stock = match StockStatus::of(product) {
                    StockStatus::OutOfStock => "out".to_string(),
                    _ => product.stock.to_string(),
                };
                ctx.output.table_row(
                    &[
                        product.id.as_str(),
                        product.name.as_str(),
                        product.category.as_str(),
                        price.as_str(),
                        stock.as_str(),
                        if product.featured { "yes" } else { "" },
                    ],
                    &ADMIN_WIDTHS,
                );
            }
        }
        AdminCommand::Stats => {
            let stats = CatalogStats::of(&catalog);
            if ctx.output.is_json() {
                ctx.output.json(&stats);
                return Ok(());
            }

            ctx.output.header("Admin Dashboard");
            ctx.output.kv("Products", &stats.total_products.to_string());
            ctx.output.kv("Categories", &stats.categories.to_string());
            ctx.output.kv("Featured", &stats.featured.to_string());
            ctx.output.kv("On sale", &stats.on_sale.to_string());
            ctx.output.kv("Low stock", &stats.low_stock.to_string());
            ctx.output.kv("Out of stock", &stats.out_of_stock.to_string());
            ctx.output.kv("Units", &stats.units_in_stock.to_string());
            ctx.output
                .kv("Inventory value", &stats.inventory_value.display());
        }
    }
    Ok(())
}

fn require_admin(session: &AuthSession) -> Result<()> {
    match session.require_admin() {
        Ok(_) => Ok(()),
        Err(AuthError::NotSignedIn) => bail!("Sign in as an admin first: `shop login`"),
        Err(e @ AuthError::Forbidden(_)) => bail!("{}", e),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_cache::Cache;
    use std::time::Duration;

    #[tokio::test]
    async fn test_require_admin() {
        let mut session = AuthSession::open(Cache::in_memory()).with_latency(Duration::ZERO);
        let err = require_admin(&session).unwrap_err();
        assert!(err.to_string().contains("shop login"));

        session.login("user@example.com", "user123").await.unwrap();
        let err = require_admin(&session).unwrap_err();
        assert_eq!(err.to_string(), "admin access required");

        session.login("admin@example.com", "admin123").await.unwrap();
        assert!(require_admin(&session).is_ok());
    }
}
