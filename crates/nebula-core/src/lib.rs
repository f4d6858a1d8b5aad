//! # nebula-core: Pure Domain Logic for the NebulaCraft Storefront
//!
//! This crate is the **heart** of the storefront. It contains all domain
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     NebulaCraft Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (storefront page)                   │   │
//! │  │    Navbar badge ──► Product grid ──► Cart sidebar ──► Contact  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / calls                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    nebula-store                                 │   │
//! │  │    CartStore, Catalog, contact Transmitter                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nebula-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ CatalogItem│ │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │Testimonial│  │  credits  │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, Category, Testimonial)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and CartLine with the storefront's quantity rules
//! - [`error`] - Validation error types
//! - [`validation`] - Field validation for catalog items and contact forms
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole credits (i64), never floats
//! 4. **Forgiving Operations**: Cart mutations never fail for ordinary misuse -
//!    unknown ids are no-ops and over-decrements clamp, so a double-clicking
//!    user can never crash the session
//!
//! ## Example Usage
//!
//! ```rust
//! use nebula_core::cart::Cart;
//! use nebula_core::types::{CatalogItem, Category};
//!
//! let visor = CatalogItem::new("3", "Cyber-Visor X1", 599, Category::Tech);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&visor);
//! cart.add_item(&visor); // same id: quantity bumps, no duplicate line
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().credits(), 1198);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use nebula_core::Money` instead of
// `use nebula_core::money::Money`

pub use cart::{Cart, CartLine};
pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum quantity a cart line may hold.
///
/// ## Why a floor instead of auto-removal?
/// The storefront's decrement control disables at quantity 1; dropping a
/// line requires the explicit remove action. Decrements that would go below
/// this floor clamp to it rather than deleting the line.
pub const MIN_LINE_QUANTITY: i64 = 1;
