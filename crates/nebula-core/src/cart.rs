//! # Cart
//!
//! The shopping cart and its line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Frontend Action          Store Call              Cart Change           │
//! │  ───────────────          ──────────              ───────────           │
//! │                                                                         │
//! │  Click "Add to Bay" ─────► add_item() ──────────► qty += 1 or new line │
//! │                                                                         │
//! │  Click +/- stepper ──────► update_quantity() ───► qty = max(1, qty+Δ)  │
//! │                                                                         │
//! │  Click trash icon ───────► remove_item() ───────► line removed         │
//! │                                                                         │
//! │  "Empty Cargo Bay" ──────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  NOTE: Every operation succeeds. Unknown ids are no-ops and            │
//! │        over-decrements clamp, because UI double-invocations are        │
//! │        expected and must degrade gracefully.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A given item id appears on at most one line; re-adding increments
//!   the existing line's quantity.
//! - Line order is insertion order (the order items were first added).
//! - Every line's quantity is at least [`MIN_LINE_QUANTITY`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CatalogItem;
use crate::MIN_LINE_QUANTITY;

// =============================================================================
// Cart Line
// =============================================================================

/// One catalog item plus a quantity, unique per item id within a cart.
///
/// ## Design Notes
/// The full `CatalogItem` is copied into the line. The catalog is immutable
/// for the session, so this is a cheap way to let the sidebar render name,
/// price, and image without a lookup round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The item this line holds.
    pub item: CatalogItem,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line with quantity 1.
    fn first_of(item: &CatalogItem) -> Self {
        CartLine {
            item: item.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.item.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Pure data + logic: no locking, no notification. The stateful wrapper
/// with subscriptions lives in `nebula-store`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of an item to the cart.
    ///
    /// ## Behavior
    /// - If the item is already in the cart: its quantity increases by 1
    /// - Otherwise: a new line with quantity 1 is appended at the end,
    ///   preserving the order items were first added
    ///
    /// Always succeeds. A catalog item with an empty id is a collaborator
    /// bug (the catalog validates on construction), so it only trips a
    /// debug assertion here.
    pub fn add_item(&mut self, item: &CatalogItem) {
        debug_assert!(!item.id.is_empty(), "catalog item is missing an id");

        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::first_of(item));
    }

    /// Removes the line with the given item id, regardless of quantity.
    ///
    /// Removing an absent id is a no-op, not an error: a double-clicked
    /// trash icon must not fail.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.item.id != id);
    }

    /// Adjusts a line's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - Absent id: no-op
    /// - Resulting quantity below the floor: clamped to [`MIN_LINE_QUANTITY`]
    ///   (the line is NOT removed; removal is always an explicit action)
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == id) {
            line.quantity = (line.quantity + delta).max(MIN_LINE_QUANTITY);
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the navbar badge).
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart total (sum of line totals).
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
