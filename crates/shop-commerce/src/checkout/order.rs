//! Order summary and confirmation types.

use crate::cart::{Cart, CartItem};
use crate::checkout::{PricingPolicy, ShippingDetails};
use crate::ids::UserId;
use crate::money::Money;
use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix of generated order numbers.
pub const ORDER_NUMBER_PREFIX: &str = "ORD-";

/// Order numbers are drawn from `0..ORDER_NUMBER_RANGE`.
pub const ORDER_NUMBER_RANGE: u32 = 10_000;

/// The signed-in customer placing the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutCustomer {
    /// Account identifier.
    pub user_id: UserId,
    /// Display name, used to prefill the shipping form.
    pub name: String,
    /// Email, used to prefill the shipping form.
    pub email: String,
}

/// Money breakdown for an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Cart total.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus shipping plus tax.
    pub total: Money,
}

impl OrderSummary {
    /// Price a cart under a policy.
    pub fn for_cart(cart: &Cart, policy: &PricingPolicy) -> Self {
        Self::for_subtotal(cart.total(), policy)
    }

    /// Price a bare subtotal under a policy.
    pub fn for_subtotal(subtotal: Money, policy: &PricingPolicy) -> Self {
        let shipping = policy.shipping_for(subtotal);
        let tax = policy.tax_for(subtotal);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// A placed order as shown on the confirmation page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Human-facing order number, e.g. "ORD-4821".
    pub order_number: String,
    /// Day the order was placed.
    pub order_date: NaiveDate,
    /// Estimated delivery day.
    pub estimated_delivery: NaiveDate,
    /// Who placed the order.
    pub customer: CheckoutCustomer,
    /// Where it ships.
    pub shipping: ShippingDetails,
    /// Masked card number charged.
    pub card: String,
    /// Items as they were in the cart.
    pub items: Vec<CartItem>,
    /// Money breakdown.
    pub summary: OrderSummary,
}

/// Draw a random order number.
pub fn generate_order_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}",
        ORDER_NUMBER_PREFIX,
        rng.gen_range(0..ORDER_NUMBER_RANGE)
    )
}

/// Delivery estimate for an order placed on `order_date`.
pub fn estimate_delivery(order_date: NaiveDate, policy: &PricingPolicy) -> NaiveDate {
    order_date
        .checked_add_days(Days::new(u64::from(policy.delivery_days)))
        .unwrap_or(NaiveDate::MAX)
}
