//! Cart consistency checks across mixed operation sequences.
//!
//! Every mutation must leave the aggregate with: no empty store group,
//! unique store ids across groups, unique product ids across the cart,
//! quantities >= 1, and totals that exactly re-derive from the line
//! items.

use bazaar_commerce::prelude::*;
use std::collections::HashSet;

fn descriptor(product: &str, store: &str, store_name: &str, cents: i64) -> NewLineItem {
    NewLineItem {
        product_id: ProductId::new(product),
        store_id: StoreId::new(store),
        store_name: store_name.to_string(),
        name: format!("{product} name"),
        price: Money::new(cents, Currency::USD),
        image: format!("/{product}.png"),
        category: Some("general".to_string()),
    }
}

fn assert_invariants(cart: &Cart) {
    let mut store_ids = HashSet::new();
    let mut product_ids = HashSet::new();
    let mut line_ids = HashSet::new();
    let mut expected_items = 0i64;
    let mut expected_amount = 0i64;

    for group in &cart.stores {
        assert!(!group.items.is_empty(), "empty store group survived");
        assert!(
            store_ids.insert(group.store_id.clone()),
            "duplicate store id across groups"
        );

        let mut group_total = 0i64;
        for item in &group.items {
            assert!(item.quantity >= 1, "quantity below 1");
            assert_eq!(item.store_id, group.store_id);
            assert_eq!(item.store_name, group.store_name);
            assert!(
                product_ids.insert(item.product_id.clone()),
                "duplicate product id in cart"
            );
            assert!(line_ids.insert(item.id.clone()), "duplicate line id");
            group_total += item.price.amount_cents * item.quantity;
            expected_items += item.quantity;
        }
        assert_eq!(group.total.amount_cents, group_total, "stale group total");
        expected_amount += group_total;
    }

    assert_eq!(cart.total_items, expected_items, "stale total_items");
    assert_eq!(
        cart.total_amount.amount_cents, expected_amount,
        "stale total_amount"
    );
    assert_eq!(cart.item_count(), cart.total_items);
    assert_eq!(cart.total_amount(), cart.total_amount);
}

#[test]
fn invariants_hold_through_mixed_sequence() {
    let mut cart = Cart::new();
    assert_invariants(&cart);

    let p1 = cart.add_item(descriptor("p1", "s1", "Store A", 1000));
    assert_invariants(&cart);
    cart.add_item(descriptor("p2", "s1", "Store A", 250));
    assert_invariants(&cart);
    let p3 = cart.add_item(descriptor("p3", "s2", "Store B", 500));
    assert_invariants(&cart);

    // Merge a few repeats.
    for _ in 0..3 {
        cart.add_item(descriptor("p1", "s1", "Store A", 1000));
        assert_invariants(&cart);
    }

    cart.update_quantity(&p3, 10);
    assert_invariants(&cart);
    cart.update_quantity(&p1, 0);
    assert_invariants(&cart);
    cart.remove_item(&p3);
    assert_invariants(&cart);

    // Group "s2" must be gone; "s1" survives through p2.
    assert_eq!(cart.store_count(), 1);
    assert_eq!(cart.stores[0].store_id, StoreId::new("s1"));

    cart.clear();
    assert_invariants(&cart);
    assert!(cart.is_empty());
}

#[test]
fn invariants_hold_through_add_remove_churn() {
    let mut cart = Cart::new();
    let mut ids = Vec::new();

    for round in 0..4 {
        for product in 0..6 {
            let store = product % 3;
            let id = cart.add_item(descriptor(
                &format!("p{product}"),
                &format!("s{store}"),
                &format!("Store {store}"),
                100 * (product as i64 + 1),
            ));
            ids.push(id);
            assert_invariants(&cart);
        }
        // Drop every other line touched so far.
        for id in ids.iter().step_by(2) {
            cart.remove_item(id);
            assert_invariants(&cart);
        }
        // Removing again is a no-op.
        for id in ids.iter().step_by(2) {
            assert!(cart.find_item(id).is_none() || cart.remove_item(id));
            assert_invariants(&cart);
        }
        if round == 2 {
            cart.clear();
            assert_invariants(&cart);
        }
    }
}

#[test]
fn invariants_hold_through_quantity_storm() {
    let mut cart = Cart::new();
    let a = cart.add_item(descriptor("p1", "s1", "Store A", 999));
    let b = cart.add_item(descriptor("p2", "s2", "Store B", 1));

    for quantity in [1, 50, 3, 1, 20] {
        cart.update_quantity(&a, quantity);
        assert_invariants(&cart);
        cart.update_quantity(&b, quantity * 2);
        assert_invariants(&cart);
    }

    cart.update_quantity(&a, -1);
    assert_invariants(&cart);
    cart.update_quantity(&b, 0);
    assert_invariants(&cart);
    assert!(cart.is_empty());
}

#[test]
fn snapshot_round_trip_preserves_aggregate() {
    let mut cart = Cart::new();
    cart.add_item(descriptor("p1", "s1", "Store A", 1000));
    cart.add_item(descriptor("p2", "s2", "Store B", 500));
    cart.add_item(descriptor("p1", "s1", "Store A", 1000));

    let json = serde_json::to_string(&cart).expect("serialize");
    let restored: Cart = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, cart);
    assert_invariants(&restored);
}
