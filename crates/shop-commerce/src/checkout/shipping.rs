//! Shipping and tax rates applied to an order.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Rates used to price an order on top of the cart subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingPolicy {
    /// Subtotals at or above this ship free.
    pub free_shipping_threshold: Money,
    /// Shipping charged below the threshold.
    pub flat_shipping: Money,
    /// Tax as a fraction of the subtotal (0.07 = 7%).
    pub tax_rate: f64,
    /// Days from order to estimated delivery.
    pub delivery_days: u32,
}

impl PricingPolicy {
    /// Shipping charge for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }

    /// Tax on a subtotal, rounded to the cent.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.tax_rate * 100.0)
    }

    /// How much more the customer must spend for free shipping.
    pub fn free_shipping_gap(&self, subtotal: Money) -> Option<Money> {
        (subtotal < self.free_shipping_threshold).then(|| self.free_shipping_threshold - subtotal)
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::new(5000),
            flat_shipping: Money::new(499),
            tax_rate: 0.07,
            delivery_days: 7,
        }
    }
}
