//! # Catalog
//!
//! The static, read-only set of purchasable artifacts, plus the seeded
//! storefront content (the six demo artifacts and the testimonial
//! transmissions).
//!
//! ## Catalog Lookup Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Queries                                    │
//! │                                                                         │
//! │  Product grid ("All" tab) ──────► items()                              │
//! │  Product grid (category tab) ───► filter(Some(Category::Tech))         │
//! │  Detail modal / add-to-cart ────► get("3")                             │
//! │                                                                         │
//! │  The catalog validates on construction (unique, non-empty ids,         │
//! │  non-negative prices) and is immutable afterwards, so every query      │
//! │  is a plain slice walk with no failure modes beyond Option::None.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use nebula_core::error::ValidationError;
use nebula_core::types::{CatalogItem, Category, Testimonial};
use nebula_core::validation::validate_catalog_item;

// =============================================================================
// Catalog
// =============================================================================

/// A validated, ordered, read-only collection of catalog items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, validating every item.
    ///
    /// ## Errors
    /// - Any item failing [`validate_catalog_item`] (empty id or name,
    ///   negative price)
    /// - Duplicate ids: two items with the same id would make cart lines
    ///   ambiguous, so construction fails fast instead
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for item in &items {
            validate_catalog_item(item)?;
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.clone(),
                });
            }
        }
        // HashSet borrows from `items`; drop it before moving them.
        drop(seen);
        Ok(Catalog { items })
    }

    /// All items in seeded (display) order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items matching a category filter, order preserved.
    ///
    /// `None` is the "All" tab: no filter, every item.
    pub fn filter(&self, category: Option<Category>) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Seeded Storefront Content
// =============================================================================

/// The demo artifact catalog shipped with the storefront.
///
/// Six artifacts across the three categories, priced in whole credits.
pub fn seeded_catalog() -> Catalog {
    let items = vec![
        CatalogItem::new("1", "Holo-Plant v2", 299, Category::Organic)
            .with_descriptions(
                "Self-sustaining holographic flora.",
                "A maintenance-free botanical marvel. This unit projects a high-fidelity \
                 hologram of various rare species. Includes a calming ambient soundscape \
                 generator.",
            )
            .with_image("https://picsum.photos/seed/holo/600/600")
            .with_features(["12 Plant Species", "Ambient Audio", "Night Mode"]),
        CatalogItem::new("2", "Quantum Cube", 145, Category::Tech)
            .with_descriptions(
                "Interactive stress-relief artifact.",
                "A tactile cube that shifts weight and temperature based on your \
                 bio-feedback. The perfect desk companion for high-stress intergalactic \
                 trading.",
            )
            .with_image("https://picsum.photos/seed/cube/600/600")
            .with_features(["Haptic Feedback", "Temp Control", "Bluetooth 9.0"]),
        CatalogItem::new("3", "Cyber-Visor X1", 599, Category::Tech)
            .with_descriptions(
                "Augmented reality streetwear.",
                "Style meets function. Displays real-time social stats and weather \
                 overlays without obstructing vision. Frame made from recycled starship \
                 hull.",
            )
            .with_image("https://picsum.photos/seed/visor/600/600")
            .with_features(["Heads-up Display", "UV Protection", "Neural Link"]),
        CatalogItem::new("4", "Neon Bonsai", 850, Category::Art)
            .with_descriptions(
                "Hand-sculpted light sculpture.",
                "Each branch is hand-bent neon glass charged with noble gases. A timeless \
                 piece that bathes your room in a calming magenta glow.",
            )
            .with_image("https://picsum.photos/seed/bonsai/600/600")
            .with_features(["Hand-blown Glass", "50,000h Life", "Dimmable"]),
        CatalogItem::new("5", "Void Sphere", 420, Category::Art)
            .with_descriptions(
                "Vantablack decorative orb.",
                "Absorbs 99.9% of light. Staring into it is said to calm the mind and \
                 reset the soul. Comes with a magnetic levitation base.",
            )
            .with_image("https://picsum.photos/seed/void/600/600")
            .with_features(["Levitation Base", "Zero Reflection", "Silence Aura"]),
        CatalogItem::new("6", "Synth-Wave Vinyl", 89, Category::Art)
            .with_descriptions(
                "Limited edition transparent record.",
                "A compilation of the galaxy's best synth-wave tracks. The vinyl itself \
                 glows when spinning.",
            )
            .with_image("https://picsum.photos/seed/vinyl/600/600")
            .with_features(["Glow-in-dark", "180g Vinyl", "Digital Download"]),
    ];

    Catalog::new(items).expect("seeded catalog is valid by construction")
}

/// The customer transmissions shown in the reviews carousel.
pub fn seeded_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Lyra Vance".to_string(),
            role: "Cyber-Botanist".to_string(),
            content: "The Holo-Plant v2 completely transformed my bunker. It feels like \
                      I'm back on Earth pre-collapse. Stunning visuals."
                .to_string(),
            avatar: "https://picsum.photos/seed/person1/100/100".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            name: "Jax Orion".to_string(),
            role: "Starship Pilot".to_string(),
            content: "NebulaCraft gets it. The build quality of the Cyber-Visor is \
                      military grade, but the aesthetics are pure art. Highly recommended."
                .to_string(),
            avatar: "https://picsum.photos/seed/person2/100/100".to_string(),
        },
        Testimonial {
            id: "3".to_string(),
            name: "Dr. Aris Thorne".to_string(),
            role: "Quantum Physicist".to_string(),
            content: "I use the Void Sphere for meditation before complex calculations. \
                      The silence it generates is... profound."
                .to_string(),
            avatar: "https://picsum.photos/seed/person3/100/100".to_string(),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_shape() {
        let catalog = seeded_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());

        // Ids are the display order
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = seeded_catalog();
        let visor = catalog.get("3").unwrap();
        assert_eq!(visor.name, "Cyber-Visor X1");
        assert_eq!(visor.price_credits, 599);

        assert!(catalog.get("ghost").is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = seeded_catalog();

        let all = catalog.filter(None);
        assert_eq!(all.len(), 6);

        let tech = catalog.filter(Some(Category::Tech));
        let ids: Vec<&str> = tech.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);

        let art = catalog.filter(Some(Category::Art));
        assert_eq!(art.len(), 3);

        let organic = catalog.filter(Some(Category::Organic));
        assert_eq!(organic.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            CatalogItem::new("1", "First", 10, Category::Art),
            CatalogItem::new("1", "Second", 20, Category::Tech),
        ];
        assert!(matches!(
            Catalog::new(items),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_malformed_items_rejected() {
        let items = vec![CatalogItem::new("", "Nameless", 10, Category::Art)];
        assert!(matches!(
            Catalog::new(items),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_seeded_testimonials() {
        let logs = seeded_testimonials();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].name, "Lyra Vance");
        assert!(logs.iter().all(|t| !t.content.is_empty()));
    }
}
