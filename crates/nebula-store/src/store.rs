//! # Cart Store
//!
//! The session-wide cart state container: a [`Cart`] plus the sidebar
//! visibility flag, guarded by a mutex, with synchronous snapshot fan-out
//! to subscribers after every mutation.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Notification Flow                          │
//! │                                                                         │
//! │  Frontend Action         Store Call              Subscribers            │
//! │  ───────────────         ──────────              ───────────            │
//! │                                                                         │
//! │  Click Product ────────► add_item() ──┐                                 │
//! │  Change Quantity ──────► update_quantity() ─┐                           │
//! │  Click Remove ─────────► remove_item() ──┐  │                           │
//! │  "Empty Cargo Bay" ────► clear() ─────┐  │  │                           │
//! │  Cart icon / backdrop ─► toggle_visibility()│                           │
//! │                                       │  │  │                           │
//! │                                       ▼  ▼  ▼                           │
//! │                              mutate under lock                          │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                              build CartSnapshot                         │
//! │                                       │                                 │
//! │                        ┌──────────────┼──────────────┐                  │
//! │                        ▼              ▼              ▼                  │
//! │                  navbar badge   cart sidebar   anything else            │
//! │                                                                         │
//! │  Delivery is SYNCHRONOUS: by the time a mutating call returns, every   │
//! │  subscriber has seen the new state. Displayed totals never go stale.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The session runs on a single logical UI thread, but the store is still
//! `Mutex`-guarded so it can be shared as `Arc<CartStore>` without `unsafe`
//! and stays correct if a host embeds it differently. There is exactly one
//! writer path (the mutating methods below); readers get snapshots.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use nebula_core::cart::{Cart, CartLine};
use nebula_core::money::Money;
use nebula_core::types::CatalogItem;

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable view of the cart state, published after every mutation.
///
/// ## Design Notes
/// Subscribers get a full snapshot rather than a diff: the storefront is
/// small enough that re-rendering from scratch is cheaper than diff
/// bookkeeping, and a snapshot can never be internally inconsistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Cart lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Sum of all line quantities (the navbar badge).
    pub total_items: i64,

    /// Sum of price × quantity across lines.
    pub total_price: Money,

    /// Whether the cart sidebar is open.
    pub is_open: bool,
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Opaque handle identifying a subscriber, returned by [`CartStore::subscribe`].
pub type SubscriberId = u64;

type Listener = Box<dyn Fn(&CartSnapshot) + Send>;

/// Subscriber registry. Kept separate from the session state so snapshots
/// are built and the session lock released before listeners run.
struct Subscribers {
    next_id: SubscriberId,
    listeners: Vec<(SubscriberId, Listener)>,
}

// =============================================================================
// Cart Store
// =============================================================================

/// Session state guarded as one unit: the line data and the sidebar flag
/// belong to the same snapshot stream.
struct Session {
    cart: Cart,
    is_open: bool,
}

/// The cart state container.
///
/// Constructed once at application start, shared with the presentation
/// layer as `Arc<CartStore>`, and discarded when the session ends. No
/// persistence: a fresh session always starts with an empty, closed cart.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use nebula_store::CartStore;
/// use nebula_core::types::{CatalogItem, Category};
///
/// let store = Arc::new(CartStore::new());
/// let id = store.subscribe(|snapshot| {
///     // re-render badge + sidebar from `snapshot`
///     let _ = snapshot.total_items;
/// });
///
/// let cube = CatalogItem::new("2", "Quantum Cube", 145, Category::Tech);
/// store.add_item(&cube);
/// assert_eq!(store.snapshot().total_price.credits(), 145);
///
/// store.unsubscribe(id);
/// ```
pub struct CartStore {
    session: Mutex<Session>,
    subscribers: Mutex<Subscribers>,
}

impl CartStore {
    /// Creates a new store with an empty cart and a closed sidebar.
    pub fn new() -> Self {
        CartStore {
            session: Mutex::new(Session {
                cart: Cart::new(),
                is_open: false,
            }),
            subscribers: Mutex::new(Subscribers {
                next_id: 0,
                listeners: Vec::new(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a listener invoked synchronously after every mutation.
    ///
    /// The listener receives the post-mutation [`CartSnapshot`]. It MUST NOT
    /// call mutating store methods (or `subscribe`/`unsubscribe`) from
    /// inside the callback; deliveries happen while the registry is
    /// borrowed, so re-entrant calls would deadlock. A view layer that only
    /// renders from the snapshot satisfies this trivially.
    ///
    /// Returns an id for [`CartStore::unsubscribe`].
    pub fn subscribe<F>(&self, listener: F) -> SubscriberId
    where
        F: Fn(&CartSnapshot) + Send + 'static,
    {
        let mut subs = self.subscribers.lock().expect("subscriber registry poisoned");
        let id = subs.next_id;
        subs.next_id += 1;
        subs.listeners.push((id, Box::new(listener)));
        debug!(subscriber_id = id, count = subs.listeners.len(), "subscriber added");
        id
    }

    /// Removes a listener. Returns `false` if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subs = self.subscribers.lock().expect("subscriber registry poisoned");
        let before = subs.listeners.len();
        subs.listeners.retain(|(sub_id, _)| *sub_id != id);
        let removed = subs.listeners.len() != before;
        debug!(subscriber_id = id, removed, "subscriber removed");
        removed
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("subscriber registry poisoned")
            .listeners
            .len()
    }

    // -------------------------------------------------------------------------
    // Mutations (each one notifies)
    // -------------------------------------------------------------------------

    /// Adds one unit of an item to the cart.
    ///
    /// Re-adding an id already in the cart bumps that line's quantity;
    /// otherwise a new line is appended. Always succeeds.
    pub fn add_item(&self, item: &CatalogItem) {
        debug!(item_id = %item.id, name = %item.name, "add_item");
        self.mutate(|session| session.cart.add_item(item));
    }

    /// Removes the line with the given id. Absent ids are a no-op: a
    /// double-clicked trash icon must degrade gracefully, not fail.
    pub fn remove_item(&self, id: &str) {
        debug!(item_id = %id, "remove_item");
        self.mutate(|session| session.cart.remove_item(id));
    }

    /// Adjusts a line's quantity by a signed delta, clamping at 1.
    /// Absent ids are a no-op.
    pub fn update_quantity(&self, id: &str, delta: i64) {
        debug!(item_id = %id, delta, "update_quantity");
        self.mutate(|session| session.cart.update_quantity(id, delta));
    }

    /// Empties the cart unconditionally.
    pub fn clear(&self) {
        debug!("clear");
        self.mutate(|session| session.cart.clear());
    }

    /// Flips the sidebar visibility flag. Line data is untouched, but the
    /// flag is part of the shared state, so subscribers are notified the
    /// same as for any other mutation.
    pub fn toggle_visibility(&self) {
        debug!("toggle_visibility");
        self.mutate(|session| session.is_open = !session.is_open);
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Builds a snapshot of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        let session = self.session.lock().expect("cart session poisoned");
        Self::snapshot_of(&session)
    }

    /// Whether the sidebar is currently open.
    pub fn is_open(&self) -> bool {
        self.session.lock().expect("cart session poisoned").is_open
    }

    /// Executes a function with read access to the underlying cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store.with_cart(|cart| cart.line_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let session = self.session.lock().expect("cart session poisoned");
        f(&session.cart)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Applies a mutation under the session lock, then publishes the
    /// resulting snapshot with the lock already released.
    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut Session),
    {
        let snapshot = {
            let mut session = self.session.lock().expect("cart session poisoned");
            f(&mut session);
            Self::snapshot_of(&session)
        };
        self.publish(&snapshot);
    }

    fn snapshot_of(session: &Session) -> CartSnapshot {
        CartSnapshot {
            lines: session.cart.lines().to_vec(),
            total_items: session.cart.total_items(),
            total_price: session.cart.total_price(),
            is_open: session.is_open,
        }
    }

    /// Delivers a snapshot to every subscriber, in subscription order.
    fn publish(&self, snapshot: &CartSnapshot) {
        let subs = self.subscribers.lock().expect("subscriber registry poisoned");
        for (_, listener) in subs.listeners.iter() {
            listener(snapshot);
        }
        debug!(
            receivers = subs.listeners.len(),
            total_items = snapshot.total_items,
            total_price = %snapshot.total_price,
            is_open = snapshot.is_open,
            "snapshot published"
        );
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_core::types::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn artifact(id: &str, price_credits: i64) -> CatalogItem {
        CatalogItem::new(id, format!("Artifact {}", id), price_credits, Category::Art)
    }

    #[test]
    fn test_every_mutation_notifies_once() {
        let store = CartStore::new();
        let deliveries = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&deliveries);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_item(&artifact("1", 299)); // 1
        store.update_quantity("1", 1); // 2
        store.toggle_visibility(); // 3
        store.remove_item("1"); // 4
        store.clear(); // 5

        assert_eq!(deliveries.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_snapshots_are_consistent() {
        let store = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::<CartSnapshot>::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |snapshot| {
            sink.lock().unwrap().push(snapshot.clone());
        });

        store.add_item(&artifact("a", 100));
        store.add_item(&artifact("a", 100));
        store.add_item(&artifact("b", 45));

        let seen = seen.lock().unwrap();
        for snapshot in seen.iter() {
            let items: i64 = snapshot.lines.iter().map(|l| l.quantity).sum();
            let price: i64 = snapshot
                .lines
                .iter()
                .map(|l| l.line_total().credits())
                .sum();
            assert_eq!(snapshot.total_items, items);
            assert_eq!(snapshot.total_price.credits(), price);
        }
        let last = seen.last().unwrap();
        assert_eq!(last.total_items, 3);
        assert_eq!(last.total_price.credits(), 245);
    }

    #[test]
    fn test_toggle_visibility_leaves_lines_alone() {
        let store = CartStore::new();
        store.add_item(&artifact("1", 299));
        assert!(!store.is_open());

        store.toggle_visibility();
        let snapshot = store.snapshot();
        assert!(snapshot.is_open);
        assert_eq!(snapshot.total_items, 1);
        assert_eq!(snapshot.total_price.credits(), 299);

        store.toggle_visibility();
        assert!(!store.is_open());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let store = CartStore::new();
        let kept = Arc::new(AtomicUsize::new(0));
        let dropped = Arc::new(AtomicUsize::new(0));

        let kept_counter = Arc::clone(&kept);
        store.subscribe(move |_| {
            kept_counter.fetch_add(1, Ordering::SeqCst);
        });
        let dropped_counter = Arc::clone(&dropped);
        let id = store.subscribe(move |_| {
            dropped_counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_item(&artifact("1", 10));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id)); // second removal reports false
        store.add_item(&artifact("2", 20));

        assert_eq!(kept.load(Ordering::SeqCst), 2);
        assert_eq!(dropped.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_with_cart_read_access() {
        let store = CartStore::new();
        store.add_item(&artifact("1", 299));
        let count = store.with_cart(|cart| cart.line_count());
        assert_eq!(count, 1);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let store = CartStore::new();
        store.add_item(&artifact("1", 299));
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert!(json.get("totalItems").is_some());
        assert!(json.get("totalPrice").is_some());
        assert!(json.get("isOpen").is_some());
    }
}
