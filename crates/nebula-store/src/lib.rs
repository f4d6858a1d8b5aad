//! # nebula-store: Stateful Storefront Layer
//!
//! Owns all mutable session state for the NebulaCraft storefront and
//! publishes it to the presentation layer.
//!
//! ## Module Organization
//! ```text
//! nebula_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: cart + sidebar flag + subscriptions
//! ├── catalog.rs      ◄─── Read-only catalog + seeded storefront content
//! ├── contact.rs      ◄─── Contact form + simulated uplink
//! └── bin/
//!     └── session.rs  ◄─── Scripted dev walkthrough
//! ```
//!
//! ## State Management
//! Instead of a single `AppState` struct, the storefront uses focused
//! objects that each own one concern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartStore   │  │   Catalog    │  │   Transmitter    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Mutex<Cart> │  │  read-only   │  │  fixed-delay     │              │
//! │  │  + is_open   │  │  item set    │  │  fake submit     │              │
//! │  │  + listeners │  │              │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  OWNERSHIP:                                                             │
//! │  • All three are constructed at startup and torn down with the session │
//! │  • The presentation layer holds shared references (Arc) and never      │
//! │    owns state of its own beyond what snapshots carry                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod contact;
pub mod store;

pub use catalog::{seeded_catalog, seeded_testimonials, Catalog};
pub use contact::{ContactMessage, SubmissionError, SubmissionReceipt, Transmitter};
pub use store::{CartSnapshot, CartStore, SubscriberId};
