//! Manage the shopping cart.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shop_commerce::cart::{Cart, CartStore};
use shop_commerce::catalog::{clamp_to_stock, remaining_stock};
use shop_commerce::checkout::OrderSummary;

use super::catalog::require_product;
use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::money_or_free;

const CART_WIDTHS: [usize; 5] = [4, 30, 10, 5, 10];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let mut store = ctx.cart_store(&cache);

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, qty } => add(&mut store, &id, qty, ctx)?,
        CartCommand::Remove { id } => {
            if !store.is_in_cart(&id) {
                ctx.output.warn(&format!("{} is not in your cart", id));
                return Ok(());
            }
            store.remove_from_cart(&id)?;
            ctx.output.success(&format!("Removed {} from cart", id));
        }
        CartCommand::Update { id, qty } => update(&mut store, &id, qty, ctx)?,
        CartCommand::Clear { yes } => {
            if store.cart().is_empty() {
                ctx.output.info("Your cart is already empty");
                return Ok(());
            }
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every item from your cart?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Cart left unchanged");
                    return Ok(());
                }
            }
            store.clear_cart()?;
            ctx.output.success("Cart cleared");
        }
    }

    show(store.cart(), ctx);
    Ok(())
}

fn add(store: &mut CartStore, id: &str, qty: u32, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = require_product(&catalog, id)?;
    if qty == 0 {
        bail!("Quantity must be at least 1");
    }

    let in_cart = store.quantity_of(id);
    let allowed = qty.min(remaining_stock(product, in_cart));
    if allowed == 0 {
        if product.is_in_stock() {
            bail!("All {} units of {} are already in your cart", product.stock, product.name);
        }
        bail!("{} is out of stock", product.name);
    }
    if allowed < qty {
        ctx.output.warn(&format!(
            "Only {} left; adding {} instead of {}",
            product.stock, allowed, qty
        ));
    }

    store.add_to_cart(product, allowed)?;
    ctx.output
        .success(&format!("Added {} × {} to cart", allowed, product.name));
    Ok(())
}

fn update(store: &mut CartStore, id: &str, qty: i64, ctx: &Context) -> Result<()> {
    let Some(item) = store.cart().get_item(id) else {
        bail!("{} is not in your cart", id);
    };

    if qty <= 0 {
        store.update_quantity(id, qty)?;
        ctx.output.success(&format!("Removed {} from cart", id));
        return Ok(());
    }

    let requested = u32::try_from(qty).unwrap_or(u32::MAX);
    let allowed = clamp_to_stock(&item.product, requested);
    if allowed < requested {
        ctx.output
            .warn(&format!("Only {} in stock; quantity set to {}", allowed, allowed));
    }
    store.update_quantity(id, i64::from(allowed))?;
    ctx.output
        .success(&format!("Quantity of {} set to {}", id, allowed));
    Ok(())
}

fn show(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(cart);
        return;
    }

    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Try `shop products`.");
        return;
    }

    ctx.output
        .table_header(&["ID", "Product", "Price", "Qty", "Total"], &CART_WIDTHS);
    for item in cart.items() {
        let unit = item.product.effective_price().display();
        let qty = item.quantity.to_string();
        let total = item.line_total().display();
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                item.product.name.as_str(),
                unit.as_str(),
                qty.as_str(),
                total.as_str(),
            ],
            &CART_WIDTHS,
        );
    }

    let policy = ctx.config.checkout.policy();
    let summary = OrderSummary::for_cart(cart, &policy);
    ctx.output.blank();
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Shipping", &money_or_free(summary.shipping));
    ctx.output.kv("Tax", &summary.tax.display());
    ctx.output.kv("Total", &summary.total.display());
    if let Some(gap) = policy.free_shipping_gap(summary.subtotal) {
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            gap.display()
        ));
    }
}
