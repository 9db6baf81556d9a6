//! Checkout module.
//!
//! Contains the checkout flow, shipping and payment forms, pricing rates,
//! and order confirmation types.

mod address;
mod flow;
mod order;
mod payment;
mod shipping;

pub use address::{ShippingDetails, DEFAULT_COUNTRY};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{
    estimate_delivery, generate_order_number, CheckoutCustomer, OrderConfirmation,
    OrderSummary, ORDER_NUMBER_PREFIX, ORDER_NUMBER_RANGE,
};
pub use payment::PaymentDetails;
pub use shipping::PricingPolicy;
