//! Cart invariants over arbitrary mutation sequences.

use proptest::prelude::*;
use shop_cache::Cache;
use shop_commerce::prelude::*;

const SEED_IDS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];

#[derive(Debug, Clone)]
enum CartOp {
    Add(usize, u32),
    Remove(usize),
    Update(usize, i64),
    Clear,
}

fn arb_op() -> impl Strategy<Value = CartOp> {
    let id = 0..SEED_IDS.len();
    prop_oneof![
        4 => (id.clone(), 0u32..5).prop_map(|(i, q)| CartOp::Add(i, q)),
        2 => id.clone().prop_map(CartOp::Remove),
        3 => (id, -3i64..6).prop_map(|(i, q)| CartOp::Update(i, q)),
        1 => Just(CartOp::Clear),
    ]
}

fn apply(store: &mut CartStore, catalog: &Catalog, op: &CartOp) {
    let result = match *op {
        CartOp::Add(i, q) => store.add_to_cart(catalog.require(SEED_IDS[i]).unwrap(), q),
        CartOp::Remove(i) => store.remove_from_cart(SEED_IDS[i]),
        CartOp::Update(i, q) => store.update_quantity(SEED_IDS[i], q),
        CartOp::Clear => store.clear_cart(),
    };
    result.unwrap();
}

fn assert_consistent(cart: &Cart) {
    let expected: Money = cart
        .items()
        .iter()
        .map(|item| item.product.effective_price() * item.quantity)
        .sum();
    assert_eq!(cart.total(), expected);

    let mut ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
    let len = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), len, "one item per product");
    assert!(cart.items().iter().all(|i| i.quantity > 0));
}

/// Reference model: product id to quantity, in first-added order.
fn model_step(model: &mut Vec<(usize, u32)>, op: &CartOp) {
    match *op {
        CartOp::Add(_, 0) => {}
        CartOp::Add(i, q) => match model.iter_mut().find(|(id, _)| *id == i) {
            Some((_, qty)) => *qty += q,
            None => model.push((i, q)),
        },
        CartOp::Remove(i) => model.retain(|(id, _)| *id != i),
        CartOp::Update(i, q) if q <= 0 => model.retain(|(id, _)| *id != i),
        CartOp::Update(i, q) => {
            if let Some((_, qty)) = model.iter_mut().find(|(id, _)| *id == i) {
                *qty = q as u32;
            }
        }
        CartOp::Clear => model.clear(),
    }
}

proptest! {
    /// The total is the sum of line totals after every step, and the cart
    /// agrees with a simple id-to-quantity model.
    #[test]
    fn prop_total_matches_items(ops in prop::collection::vec(arb_op(), 0..40)) {
        let catalog = Catalog::seed();
        let mut store = CartStore::in_memory();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut store, &catalog, op);
            model_step(&mut model, op);
            assert_consistent(store.cart());

            let seen: Vec<(usize, u32)> = store
                .items()
                .iter()
                .map(|item| {
                    let i = SEED_IDS.iter().position(|id| item.product.id == *id).unwrap();
                    (i, item.quantity)
                })
                .collect();
            prop_assert_eq!(&seen, &model);
        }
    }

    /// Reopening the store over the same cache restores the exact snapshot.
    #[test]
    fn prop_reopen_restores_snapshot(ops in prop::collection::vec(arb_op(), 1..25)) {
        let catalog = Catalog::seed();
        let cache = Cache::in_memory();
        let mut store = CartStore::open(cache.clone());
        for op in &ops {
            apply(&mut store, &catalog, op);
        }
        let before = store.close();

        let reopened = CartStore::open(cache);
        prop_assert_eq!(reopened.cart(), &before);
        assert_consistent(reopened.cart());
    }
}
