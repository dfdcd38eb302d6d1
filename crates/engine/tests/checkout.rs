//! End-to-end cart and checkout lifecycle tests over an in-memory store.

#![allow(clippy::unwrap_used)]

use mini_pos_core::{Email, Money, ProductId};
use mini_pos_engine::store::{self, keys};
use mini_pos_engine::{
    CartEngine, Catalog, CheckoutError, History, MemoryStore, OrderEngine,
};

fn user() -> Email {
    Email::parse("shopper@example.com").unwrap()
}

#[test]
fn checkout_commits_cart_and_clears_it() {
    let store = MemoryStore::new();
    let cart = CartEngine::new(&store);
    let orders = OrderEngine::new(&store);
    let history = History::new(&store);
    let p1 = ProductId::new("p1");

    // Two adds of the same product merge into a single two-unit line.
    cart.add_item(&user(), &p1).unwrap();
    cart.add_item(&user(), &p1).unwrap();

    let lines = cart.lines(&user()).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().unwrap().quantity, 2);

    let totals_before = cart.compute_totals(&user()).unwrap();
    assert_eq!(totals_before.subtotal, Money::new(4400));
    assert_eq!(totals_before.tax, Money::new(440));
    assert_eq!(totals_before.grand_total, Money::new(4840));

    let order = orders.checkout(&user()).unwrap();

    // The committed order matches the totals reported just before checkout.
    assert_eq!(order.subtotal, totals_before.subtotal);
    assert_eq!(order.tax, totals_before.tax);
    assert_eq!(order.grand_total, totals_before.grand_total);

    let item = order.items.first().unwrap();
    assert_eq!(item.name, "Wireless Mouse");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.unit_price, Money::new(2200));
    assert_eq!(item.line_subtotal, Money::new(4400));

    // Cart transitioned back to empty; history gained exactly one order.
    assert!(cart.is_empty(&user()).unwrap());
    let past = history.for_user(&user()).unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past.first().unwrap().id, order.id);
}

#[test]
fn checkout_of_empty_cart_fails_and_writes_nothing() {
    let store = MemoryStore::new();
    let orders = OrderEngine::new(&store);

    let err = orders.checkout(&user()).unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
    assert!(History::new(&store).for_user(&user()).unwrap().is_empty());
}

#[test]
fn checkout_after_removing_last_line_fails_empty() {
    let store = MemoryStore::new();
    let cart = CartEngine::new(&store);

    cart.add_item(&user(), &ProductId::new("p3")).unwrap();
    cart.remove_line(&user(), 0).unwrap();
    assert!(cart.is_empty(&user()).unwrap());

    let err = OrderEngine::new(&store).checkout(&user()).unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
}

#[test]
fn checkout_with_dangling_line_is_atomic() {
    let store = MemoryStore::new();
    let cart = CartEngine::new(&store);
    let catalog = Catalog::new(&store);
    let p1 = ProductId::new("p1");

    cart.add_item(&user(), &p1).unwrap();

    // Delete the product from the catalog after it was carted.
    let remaining: Vec<_> = catalog
        .list_products()
        .unwrap()
        .into_iter()
        .filter(|p| p.id != p1)
        .collect();
    store::set_typed(&store, keys::PRODUCTS, &remaining).unwrap();

    let err = OrderEngine::new(&store).checkout(&user()).unwrap_err();
    assert!(matches!(err, CheckoutError::CorruptCart { .. }));

    // Neither side of the transition happened.
    assert_eq!(cart.lines(&user()).unwrap().len(), 1);
    assert!(History::new(&store).for_user(&user()).unwrap().is_empty());
}

#[test]
fn history_is_chronological_and_per_user() {
    let store = MemoryStore::new();
    let cart = CartEngine::new(&store);
    let orders = OrderEngine::new(&store);
    let history = History::new(&store);
    let other = Email::parse("other@example.com").unwrap();

    cart.add_item(&user(), &ProductId::new("p1")).unwrap();
    let first = orders.checkout(&user()).unwrap();

    cart.add_item(&user(), &ProductId::new("p2")).unwrap();
    let second = orders.checkout(&user()).unwrap();

    let past = history.for_user(&user()).unwrap();
    let ids: Vec<_> = past.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    assert!(history.for_user(&other).unwrap().is_empty());
    assert_eq!(history.find(&user(), second.id).unwrap().unwrap().id, second.id);
    assert!(history.find(&other, second.id).unwrap().is_none());
}

#[test]
fn committed_orders_survive_later_catalog_edits() {
    let store = MemoryStore::new();
    let cart = CartEngine::new(&store);
    let catalog = Catalog::new(&store);
    let p2 = ProductId::new("p2");

    cart.add_item(&user(), &p2).unwrap();
    let order = OrderEngine::new(&store).checkout(&user()).unwrap();

    // Reprice the keyboard after the sale.
    let repriced: Vec<_> = catalog
        .list_products()
        .unwrap()
        .into_iter()
        .map(|mut p| {
            if p.id == p2 {
                p.price = Money::new(1);
            }
            p
        })
        .collect();
    store::set_typed(&store, keys::PRODUCTS, &repriced).unwrap();

    let stored = History::new(&store)
        .find(&user(), order.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.items.first().unwrap().unit_price, Money::new(9800));
    assert_eq!(stored.grand_total, order.grand_total);
}
