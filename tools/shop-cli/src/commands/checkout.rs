//! Interactive checkout.

use anyhow::{bail, Result};
use dialoguer::{Input, Password, Select};
use shop_commerce::cart::Cart;
use shop_commerce::checkout::{
    CheckoutFlow, CheckoutStep, OrderConfirmation, PaymentDetails, ShippingDetails,
};
use shop_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::money_or_free;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let session = ctx.auth_session(&cache);
    let mut store = ctx.cart_store(&cache);

    let mut flow = match CheckoutFlow::start(
        session.customer(),
        store.cart(),
        ctx.config.checkout.policy(),
    ) {
        Ok(flow) => flow,
        Err(CommerceError::NotAuthenticated) => {
            bail!("Sign in before checking out: `shop login`")
        }
        Err(CommerceError::EmptyCart) => bail!("Your cart is empty. Add something with `shop cart add <id>`"),
        Err(e) => return Err(e.into()),
    };

    print_summary(&flow, store.cart(), ctx);

    let payment = loop {
        if flow.step() == CheckoutStep::Shipping {
            step(CheckoutStep::Shipping, ctx);
            loop {
                let details = prompt_shipping(flow.shipping())?;
                match flow.submit_shipping(details) {
                    Ok(_) => break,
                    Err(CommerceError::CheckoutIncomplete(missing)) => {
                        ctx.output.warn(&format!("Please fill in: {}", missing));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        step(CheckoutStep::Payment, ctx);
        let payment = loop {
            let details = prompt_payment()?;
            let missing = details.missing_fields();
            if missing.is_empty() {
                break details;
            }
            ctx.output
                .warn(&format!("Please fill in: {}", missing.join(", ")));
        };

        if args.yes {
            break payment;
        }
        let total = flow.summary(store.cart()).total;
        let choice = Select::new()
            .with_prompt(format!("Pay {} with {}?", total, payment.masked_number()))
            .items(&["Place order", "Edit shipping", "Cancel"])
            .default(0)
            .interact()?;
        match choice {
            0 => break payment,
            1 => {
                flow.back_to_shipping()?;
            }
            _ => {
                ctx.output.warn("Checkout cancelled; your cart is unchanged");
                return Ok(());
            }
        }
    };

    let spinner = ctx.output.spinner("Processing payment...");
    tokio::time::sleep(ctx.config.checkout.processing_delay()).await;
    let placed = flow.submit_payment(
        payment,
        store.cart(),
        chrono::Local::now().date_naive(),
        &mut rand::thread_rng(),
    );
    spinner.finish_and_clear();
    placed?;

    let confirmation = flow.complete(&mut store)?;
    print_confirmation(&confirmation, ctx);
    Ok(())
}

fn step(step: CheckoutStep, ctx: &Context) {
    ctx.output.blank();
    ctx.output.step(
        usize::from(step.number()),
        CheckoutStep::ALL.len(),
        step.display_name(),
    );
}

fn ask(label: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

fn prompt_shipping(current: &ShippingDetails) -> Result<ShippingDetails> {
    Ok(ShippingDetails {
        full_name: ask("Full name", &current.full_name)?,
        email: ask("Email", &current.email)?,
        address: ask("Address", &current.address)?,
        city: ask("City", &current.city)?,
        state: ask("State", &current.state)?,
        postal_code: ask("Postal code", &current.postal_code)?,
        country: ask("Country", &current.country)?,
        phone: ask("Phone", &current.phone)?,
    })
}

fn prompt_payment() -> Result<PaymentDetails> {
    Ok(PaymentDetails {
        card_name: ask("Name on card", "")?,
        card_number: ask("Card number", "")?,
        expiry_date: ask("Expiry (MM/YY)", "")?,
        cvv: Password::new()
            .with_prompt("CVV")
            .allow_empty_password(true)
            .interact()?,
    })
}

fn print_summary(flow: &CheckoutFlow, cart: &Cart, ctx: &Context) {
    let summary = flow.summary(cart);
    ctx.output.header("Checkout");
    ctx.output.kv("Customer", &flow.customer().name);
    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} × {}  {}",
            item.quantity,
            item.product.name,
            item.line_total()
        ));
    }
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Shipping", &money_or_free(summary.shipping));
    ctx.output.kv("Tax", &summary.tax.display());
    ctx.output.kv("Total", &summary.total.display());
}

fn print_confirmation(confirmation: &OrderConfirmation, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(confirmation);
        return;
    }

    step(CheckoutStep::Confirmation, ctx);
    ctx.output.success(&format!(
        "Thank you, {}! Your order has been placed.",
        confirmation.customer.name
    ));
    ctx.output.kv("Order number", &confirmation.order_number);
    ctx.output
        .kv("Order date", &confirmation.order_date.format("%B %-d, %Y").to_string());
    ctx.output.kv(
        "Estimated delivery",
        &confirmation
            .estimated_delivery
            .format("%B %-d, %Y")
            .to_string(),
    );
    ctx.output.kv("Paid with", &confirmation.card);
    ctx.output.blank();
    ctx.output.info("Shipping to:");
    for line in confirmation.shipping.multi_line().lines() {
        ctx.output.list_item(line);
    }
    ctx.output.blank();
    ctx.output.kv("Subtotal", &confirmation.summary.subtotal.display());
    ctx.output
        .kv("Shipping", &money_or_free(confirmation.summary.shipping));
    ctx.output.kv("Tax", &confirmation.summary.tax.display());
    ctx.output.kv("Total", &confirmation.summary.total.display());
}
