//! End-to-end storefront scenarios: catalog → cart store → subscribers,
//! exercised the way the presentation layer drives them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use nebula_core::money::Money;
use nebula_store::{
    seeded_catalog, CartSnapshot, CartStore, ContactMessage, SubmissionError, Transmitter,
};

/// Records every snapshot a subscriber sees.
fn recording_subscriber(store: &CartStore) -> Arc<Mutex<Vec<CartSnapshot>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));
    seen
}

#[test]
fn full_shopping_session() {
    let catalog = seeded_catalog();
    let store = CartStore::new();
    let seen = recording_subscriber(&store);

    let holo = catalog.get("1").unwrap(); // $299
    let cube = catalog.get("2").unwrap(); // $145

    // Add the Holo-Plant twice: one line, quantity 2.
    store.add_item(holo);
    store.add_item(holo);
    {
        let snapshot = store.snapshot();
        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.lines[0].quantity, 2);
        assert_eq!(snapshot.total_price, Money::from_credits(598));
    }

    // Second artifact lands after the first.
    store.add_item(cube);
    {
        let snapshot = store.snapshot();
        let ids: Vec<&str> = snapshot.lines.iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(snapshot.total_items, 3);
        assert_eq!(snapshot.total_price, Money::from_credits(743));
    }

    // Decrement to the floor: second decrement clamps.
    store.update_quantity("1", -1);
    store.update_quantity("1", -1);
    {
        let snapshot = store.snapshot();
        assert_eq!(snapshot.lines[0].quantity, 1);
        assert_eq!(snapshot.total_price, Money::from_credits(444));
    }

    // Remove the first line: order collapses to the survivor; a repeat
    // removal is a harmless no-op.
    store.remove_item("1");
    store.remove_item("1");
    {
        let snapshot = store.snapshot();
        let ids: Vec<&str> = snapshot.lines.iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    store.clear();
    {
        let snapshot = store.snapshot();
        assert!(snapshot.lines.is_empty());
        assert_eq!(snapshot.total_items, 0);
        assert_eq!(snapshot.total_price, Money::zero());
    }

    // One delivery per mutation: 3 adds + 2 updates + 2 removes + 1 clear.
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 8);

    // Every published snapshot was internally consistent.
    for snapshot in seen.iter() {
        let items: i64 = snapshot.lines.iter().map(|l| l.quantity).sum();
        let price: i64 = snapshot.lines.iter().map(|l| l.line_total().credits()).sum();
        assert_eq!(snapshot.total_items, items);
        assert_eq!(snapshot.total_price.credits(), price);
    }
}

#[test]
fn sidebar_toggle_shares_the_snapshot_stream() {
    let catalog = seeded_catalog();
    let store = CartStore::new();
    let seen = recording_subscriber(&store);

    store.add_item(catalog.get("5").unwrap());
    store.toggle_visibility();
    store.toggle_visibility();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(!seen[0].is_open);
    assert!(seen[1].is_open);
    assert!(!seen[2].is_open);

    // Toggling never touches line data.
    for snapshot in seen.iter() {
        assert_eq!(snapshot.total_items, 1);
        assert_eq!(snapshot.total_price, Money::from_credits(420));
    }
}

#[test]
fn badge_and_sidebar_render_from_the_same_delivery() {
    // Two independent views subscribed to one store, as in the real page
    // (navbar badge + cart sidebar).
    let catalog = seeded_catalog();
    let store = CartStore::new();

    let badge = Arc::new(AtomicUsize::new(0));
    let badge_sink = Arc::clone(&badge);
    store.subscribe(move |snapshot| {
        badge_sink.store(snapshot.total_items as usize, Ordering::SeqCst);
    });

    let sidebar_total = Arc::new(AtomicUsize::new(0));
    let sidebar_sink = Arc::clone(&sidebar_total);
    store.subscribe(move |snapshot| {
        sidebar_sink.store(snapshot.total_price.credits() as usize, Ordering::SeqCst);
    });

    store.add_item(catalog.get("6").unwrap()); // $89
    store.add_item(catalog.get("6").unwrap());

    // Synchronous delivery: both views are current the moment the call returns.
    assert_eq!(badge.load(Ordering::SeqCst), 2);
    assert_eq!(sidebar_total.load(Ordering::SeqCst), 178);
}

#[test]
fn unknown_ids_never_disturb_state_or_skip_notification() {
    let store = CartStore::new();
    let seen = recording_subscriber(&store);

    store.remove_item("ghost");
    store.update_quantity("ghost", 7);

    let seen = seen.lock().unwrap();
    // No-op mutations still publish: the contract is one snapshot per
    // operation, and both snapshots show the untouched empty cart.
    assert_eq!(seen.len(), 2);
    for snapshot in seen.iter() {
        assert!(snapshot.lines.is_empty());
        assert_eq!(snapshot.total_items, 0);
    }
}

#[tokio::test]
async fn contact_uplink_accepts_a_valid_transmission() {
    let uplink = Transmitter::with_delay(Duration::ZERO);
    let receipt = uplink
        .submit(&ContactMessage {
            name: "Lyra Vance".to_string(),
            email: "lyra@nebulacraft.io".to_string(),
            message: "The Holo-Plant needs a firmware update.".to_string(),
        })
        .await
        .expect("valid message is always accepted");

    assert!(!receipt.id.is_nil());
}

#[tokio::test]
async fn contact_uplink_reports_every_bad_field() {
    let uplink = Transmitter::with_delay(Duration::ZERO);
    let err = uplink
        .submit(&ContactMessage {
            name: String::new(),
            email: "bad-frequency".to_string(),
            message: String::new(),
        })
        .await
        .unwrap_err();

    let SubmissionError::Invalid(errors) = err;
    let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["name", "email", "message"]);
}
