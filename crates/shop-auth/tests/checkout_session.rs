//! Sign-in and cart state shared through one on-disk store.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shop_auth::{AuthSession, Role, USER_STORAGE_KEY};
use shop_cache::Cache;
use shop_commerce::prelude::*;

fn shipping_for(flow: &CheckoutFlow) -> ShippingDetails {
    ShippingDetails {
        address: "1 Market St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        postal_code: "62701".to_string(),
        phone: "555-0100".to_string(),
        ..flow.shipping().clone()
    }
}

fn card() -> PaymentDetails {
    PaymentDetails {
        card_name: "Regular User".to_string(),
        card_number: "4111 1111 1111 1111".to_string(),
        expiry_date: "12/30".to_string(),
        cvv: "123".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn signed_in_user_checks_out_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::seed();

    // First process: sign in and fill the cart.
    {
        let cache = Cache::open_dir(dir.path()).unwrap();
        let mut session = AuthSession::open(cache.clone());
        session.login("user@example.com", "user123").await.unwrap();

        let mut store = CartStore::open(cache);
        store.add_to_cart(catalog.require("2").unwrap(), 1).unwrap();
        store.add_to_cart(catalog.require("5").unwrap(), 2).unwrap();
    }

    // Second process: both survive and checkout clears only the cart.
    let cache = Cache::open_dir(dir.path()).unwrap();
    let session = AuthSession::open(cache.clone());
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().role, Role::User);

    let mut store = CartStore::open(cache.clone());
    assert_eq!(store.item_count(), 3);
    let expected = OrderSummary::for_cart(store.cart(), &PricingPolicy::default());

    let mut flow =
        CheckoutFlow::start(session.customer(), store.cart(), PricingPolicy::default()).unwrap();
    assert_eq!(flow.shipping().full_name, "Regular User");
    assert_eq!(flow.shipping().email, "user@example.com");

    let details = shipping_for(&flow);
    flow.submit_shipping(details).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    flow.submit_payment(card(), store.cart(), today, &mut StdRng::seed_from_u64(9))
        .unwrap();
    let confirmation = flow.complete(&mut store).unwrap();

    assert_eq!(confirmation.customer.user_id, "u2");
    assert_eq!(confirmation.summary, expected);
    assert_eq!(confirmation.card, "**** **** **** 1111");
    assert!(store.cart().is_empty());

    let reopened = Cache::open_dir(dir.path()).unwrap();
    assert!(CartStore::open(reopened.clone()).cart().is_empty());
    assert!(reopened.exists(USER_STORAGE_KEY).unwrap());
}

#[tokio::test(start_paused = true)]
async fn checkout_requires_sign_in() {
    let cache = Cache::in_memory();
    let mut session = AuthSession::open(cache.clone());
    let mut store = CartStore::open(cache);
    store
        .add_to_cart(Catalog::seed().require("3").unwrap(), 1)
        .unwrap();

    assert!(matches!(
        CheckoutFlow::start(session.customer(), store.cart(), PricingPolicy::default()),
        Err(CommerceError::NotAuthenticated)
    ));

    session.login("admin@example.com", "admin123").await.unwrap();
    assert!(CheckoutFlow::start(session.customer(), store.cart(), PricingPolicy::default()).is_ok());

    session.logout().unwrap();
    assert!(session.customer().is_none());
}
