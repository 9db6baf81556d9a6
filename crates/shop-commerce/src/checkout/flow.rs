//! Checkout flow state machine.

use crate::cart::{Cart, CartStore};
use crate::checkout::{
    estimate_delivery, generate_order_number, CheckoutCustomer, OrderConfirmation,
    OrderSummary, PaymentDetails, PricingPolicy, ShippingDetails,
};
use crate::CommerceError;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Shipping address and contact details.
    Shipping,
    /// Card details.
    Payment,
    /// Order placed.
    Confirmation,
}

impl CheckoutStep {
    /// Every step, in order.
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Confirmation,
    ];

    /// Lowercase step name used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    /// Title shown for the step.
    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Checkout flow state.
///
/// Moves forward only, except for stepping back from payment to shipping.
/// The cart itself is never held here; callers pass the current snapshot in
/// so the summary always reflects what the store holds.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    customer: CheckoutCustomer,
    policy: PricingPolicy,
    step: CheckoutStep,
    shipping: ShippingDetails,
    confirmation: Option<OrderConfirmation>,
}

impl CheckoutFlow {
    /// Begin checkout.
    ///
    /// Fails with [`CommerceError::NotAuthenticated`] without a customer and
    /// [`CommerceError::EmptyCart`] when there is nothing to buy.
    pub fn start(
        customer: Option<CheckoutCustomer>,
        cart: &Cart,
        policy: PricingPolicy,
    ) -> Result<Self, CommerceError> {
        let customer = customer.ok_or(CommerceError::NotAuthenticated)?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        tracing::info!(user_id = %customer.user_id, items = cart.item_count(), "checkout started");
        let shipping = ShippingDetails::prefilled(&customer.name, &customer.email);
        Ok(Self {
            customer,
            policy,
            step: CheckoutStep::Shipping,
            shipping,
            confirmation: None,
        })
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Who is checking out.
    pub fn customer(&self) -> &CheckoutCustomer {
        &self.customer
    }

    /// Rates in effect.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Shipping details entered so far, prefilled from the customer.
    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    /// The placed order, once payment has been accepted.
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Price the cart under this flow's policy.
    pub fn summary(&self, cart: &Cart) -> OrderSummary {
        OrderSummary::for_cart(cart, &self.policy)
    }

    /// Accept shipping details and advance to payment.
    pub fn submit_shipping(
        &mut self,
        details: ShippingDetails,
    ) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Shipping, CheckoutStep::Payment)?;
        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }
        self.shipping = details;
        self.step = CheckoutStep::Payment;
        tracing::debug!(step = self.step.as_str(), "checkout advanced");
        Ok(self.step)
    }

    /// Return from payment to shipping, keeping the entered details.
    pub fn back_to_shipping(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Shipping)?;
        self.step = CheckoutStep::Shipping;
        Ok(self.step)
    }

    /// Accept payment and place the order.
    ///
    /// The order is priced from `cart` as it is now. The cart is left alone
    /// until [`complete`](Self::complete) is called.
    pub fn submit_payment<R: Rng + ?Sized>(
        &mut self,
        details: PaymentDetails,
        cart: &Cart,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&OrderConfirmation, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Confirmation)?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        let summary = self.summary(cart);
        let confirmation = OrderConfirmation {
            order_number: generate_order_number(rng),
            order_date: today,
            estimated_delivery: estimate_delivery(today, &self.policy),
            customer: self.customer.clone(),
            shipping: self.shipping.clone(),
            card: details.masked_number(),
            items: cart.items().to_vec(),
            summary,
        };
        tracing::info!(
            order_number = %confirmation.order_number,
            total = %summary.total,
            "order placed"
        );

        self.step = CheckoutStep::Confirmation;
        Ok(&*self.confirmation.insert(confirmation))
    }

    /// Finish checkout: clear the cart and hand back the confirmation.
    pub fn complete(self, store: &mut CartStore) -> Result<OrderConfirmation, CommerceError> {
        let confirmation = match self.confirmation {
            Some(c) if self.step == CheckoutStep::Confirmation => c,
            _ => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "complete".to_string(),
                })
            }
        };
        store.clear_cart()?;
        Ok(confirmation)
    }

    fn expect_step(&self, at: CheckoutStep, to: CheckoutStep) -> Result<(), CommerceError> {
        if self.step == at {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::UserId;
    use crate::money::Money;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn customer() -> CheckoutCustomer {
        CheckoutCustomer {
            user_id: UserId::new("u2"),
            name: "Regular User".to_string(),
            email: "user@example.com".to_string(),
        }
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            phone: "555-0100".into(),
            ..ShippingDetails::prefilled("Regular User", "user@example.com")
        }
    }

    fn card() -> PaymentDetails {
        PaymentDetails {
            card_name: "Regular User".into(),
            card_number: "4242424242424242".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
        }
    }

    fn store_with_items() -> CartStore {
        let catalog = Catalog::seed();
        let mut store = CartStore::in_memory();
        store.add_to_cart(catalog.get("1").unwrap(), 2).unwrap();
        store.add_to_cart(catalog.get("6").unwrap(), 1).unwrap();
        store
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_start_preconditions() {
        let store = store_with_items();
        assert!(matches!(
            CheckoutFlow::start(None, store.cart(), PricingPolicy::default()),
            Err(CommerceError::NotAuthenticated)
        ));
        assert!(matches!(
            CheckoutFlow::start(Some(customer()), &Cart::new(), PricingPolicy::default()),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_start_prefills_shipping() {
        let store = store_with_items();
        let flow =
            CheckoutFlow::start(Some(customer()), store.cart(), PricingPolicy::default()).unwrap();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(flow.shipping().full_name, "Regular User");
        assert_eq!(flow.shipping().email, "user@example.com");
        assert_eq!(flow.shipping().country, "US");
    }

    #[test]
    fn test_incomplete_shipping_stays_put() {
        let store = store_with_items();
        let mut flow =
            CheckoutFlow::start(Some(customer()), store.cart(), PricingPolicy::default()).unwrap();
        let details = ShippingDetails {
            city: String::new(),
            ..shipping()
        };
        assert!(matches!(
            flow.submit_shipping(details),
            Err(CommerceError::CheckoutIncomplete(missing)) if missing == "city"
        ));
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_back_and_forth() {
        let store = store_with_items();
        let mut flow =
            CheckoutFlow::start(Some(customer()), store.cart(), PricingPolicy::default()).unwrap();

        assert!(flow.back_to_shipping().is_err());
        assert_eq!(flow.submit_shipping(shipping()).unwrap(), CheckoutStep::Payment);
        assert_eq!(flow.back_to_shipping().unwrap(), CheckoutStep::Shipping);
        assert_eq!(flow.shipping().city, "Springfield");
        assert_eq!(flow.submit_shipping(shipping()).unwrap(), CheckoutStep::Payment);
        assert!(flow.submit_shipping(shipping()).is_err());
    }

    #[test]
    fn test_payment_before_shipping_rejected() {
        let store = store_with_items();
        let mut flow =
            CheckoutFlow::start(Some(customer()), store.cart(), PricingPolicy::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            flow.submit_payment(card(), store.cart(), today(), &mut rng),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }

    #[test]
    fn test_full_flow_clears_cart() {
        let mut store = store_with_items();
        let mut flow =
            CheckoutFlow::start(Some(customer()), store.cart(), PricingPolicy::default()).unwrap();
        flow.submit_shipping(shipping()).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let confirmation = flow
            .submit_payment(card(), store.cart(), today(), &mut rng)
            .unwrap();
        assert!(confirmation.order_number.starts_with("ORD-"));
        assert_eq!(confirmation.summary.total, Money::new(46007));
        assert_eq!(
            confirmation.estimated_delivery,
            NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
        );
        assert_eq!(confirmation.card, "**** **** **** 4242");
        assert_eq!(flow.step(), CheckoutStep::Confirmation);
        assert!(!store.cart().is_empty());

        let placed = flow.complete(&mut store).unwrap();
        assert_eq!(placed.items.len(), 2);
        assert!(store.cart().is_empty());
        assert!(store.total().is_zero());
    }

    #[test]
    fn test_complete_requires_confirmation() {
        let mut store = store_with_items();
        let flow =
            CheckoutFlow::start(Some(customer()), store.cart(), PricingPolicy::default()).unwrap();
        assert!(flow.complete(&mut store).is_err());
        assert!(!store.cart().is_empty());
    }
}
