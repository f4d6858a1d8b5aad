//! # Domain Types
//!
//! Core domain types used throughout the NebulaCraft storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    Category     │   │  Testimonial    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  Organic        │   │  id             │       │
//! │  │  name           │   │  Tech           │   │  name / role    │       │
//! │  │  price_credits  │   │  Art            │   │  content        │       │
//! │  │  features[]     │   └─────────────────┘   │  avatar         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CatalogItem` ids are opaque strings supplied by the catalog; the cart
//! treats them as the sole identity of a line. The category tag drives the
//! product-grid filter tabs and is not part of the cart's own data model.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Category tag for catalog filtering.
///
/// The product grid shows one tab per category plus an "All" tab; "All" is
/// the absence of a filter, not a category, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Living (or convincingly living-looking) artifacts.
    Organic,
    /// Gadgets and wearables.
    Tech,
    /// Sculpture, light pieces, collectibles.
    Art,
}

impl Category {
    /// All categories in display order (the filter tab order).
    pub const ALL: [Category; 3] = [Category::Organic, Category::Tech, Category::Art];

    /// Human-readable label used by the filter tabs.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Organic => "Organic",
            Category::Tech => "Tech",
            Category::Art => "Art",
        }
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable artifact in the storefront catalog.
///
/// Immutable once constructed: the catalog is static for the lifetime of a
/// session and the cart stores full item copies, so there is nothing to
/// keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Opaque unique identifier.
    pub id: String,

    /// Display name shown on cards and cart lines.
    pub name: String,

    /// One-line teaser shown on the product card.
    pub short_description: String,

    /// Full copy shown in the detail modal.
    pub full_description: String,

    /// Price in whole credits. Never negative.
    pub price_credits: i64,

    /// Image URI reference.
    pub image: String,

    /// Ordered feature bullets for the detail modal.
    pub features: Vec<String>,

    /// Category tag used by the grid filter.
    pub category: Category,
}

impl CatalogItem {
    /// Creates a minimal catalog item.
    ///
    /// Descriptions, image, and features start empty; builders below fill
    /// them in. Primarily a convenience for the seeded catalog and tests.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_credits: i64,
        category: Category,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            short_description: String::new(),
            full_description: String::new(),
            price_credits,
            image: String::new(),
            features: Vec::new(),
            category,
        }
    }

    /// Sets both descriptions.
    pub fn with_descriptions(
        mut self,
        short: impl Into<String>,
        full: impl Into<String>,
    ) -> Self {
        self.short_description = short.into();
        self.full_description = full.into();
        self
    }

    /// Sets the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the feature bullets.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_credits(self.price_credits)
    }
}

// =============================================================================
// Testimonial
// =============================================================================

/// A customer transmission log shown in the reviews carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    /// Avatar image URI.
    pub avatar: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
