//! # Validation Module
//!
//! Field validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback next to each field                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Contact form field rules                                          │
//! │  └── Catalog construction rules (non-empty ids, non-negative prices)   │
//! │                                                                         │
//! │  Cart mutations have NO validation layer: unknown ids and              │
//! │  over-decrements are defined behavior, not errors.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nebula_core::validation::{validate_contact_name, validate_email};
//!
//! assert!(validate_contact_name("Lyra Vance").is_ok());
//! assert!(validate_email("lyra@nebulacraft.io").is_ok());
//! assert!(validate_email("not-a-frequency").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::CatalogItem;

/// Contact name length cap.
const MAX_NAME_LEN: usize = 100;

/// Contact message length cap.
const MAX_MESSAGE_LEN: usize = 2000;

// =============================================================================
// Contact Form Validators
// =============================================================================

/// Validates the contact form's name field.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_contact_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the contact form's email field.
///
/// ## Rules
/// - Must not be empty
/// - Must look like `local@domain.tld` (one `@`, a dot in the domain,
///   no whitespace) - the same shallow shape check the original form
///   applies; real deliverability is not this system's problem
///
/// ## Example
/// ```rust
/// use nebula_core::validation::validate_email;
///
/// assert!(validate_email("jax@orion.dev").is_ok());
/// assert!(validate_email("").is_err());
/// assert!(validate_email("jax@orion").is_err());
/// assert!(validate_email("jax orion@space.io").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let malformed = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "expected name@domain.tld".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(malformed());
    }

    let (local, domain) = email.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(malformed());
    }

    // The domain needs an interior dot: "a.b", not ".b" or "a."
    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(malformed()),
    }
}

/// Validates the contact form's message field.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 2000 characters
pub fn validate_message(message: &str) -> ValidationResult<()> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ValidationError::Required {
            field: "message".to_string(),
        });
    }

    if message.len() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong {
            field: "message".to_string(),
            max: MAX_MESSAGE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a catalog item before it is admitted to a catalog.
///
/// A failing item is a collaborator bug, not a user error: the catalog is
/// static data shipped with the storefront, so this runs once at startup
/// and fails fast instead of letting a malformed item corrupt cart state.
///
/// ## Rules
/// - `id` must not be empty
/// - `name` must not be empty
/// - `price_credits` must not be negative
pub fn validate_catalog_item(item: &CatalogItem) -> ValidationResult<()> {
    if item.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if item.price_credits < 0 {
        return Err(ValidationError::Negative {
            field: "priceCredits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_validate_contact_name() {
        assert!(validate_contact_name("Lyra Vance").is_ok());
        assert!(validate_contact_name("  ").is_err());
        assert!(validate_contact_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("lyra@nebulacraft.io").is_ok());
        assert!(validate_email("dr.aris.thorne@lab.quantum.edu").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@signs.io").is_err());
        assert!(validate_email("@domain.io").is_err());
        assert!(validate_email("local@").is_err());
        assert!(validate_email("local@domain").is_err());
        assert!(validate_email("spaced out@domain.io").is_err());
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("The Void Sphere is profound.").is_ok());
        assert!(validate_message("").is_err());
        assert!(validate_message(&"x".repeat(2001)).is_err());
    }

    #[test]
    fn test_validate_catalog_item() {
        let good = CatalogItem::new("1", "Holo-Plant v2", 299, Category::Organic);
        assert!(validate_catalog_item(&good).is_ok());

        let no_id = CatalogItem::new("", "Nameless", 10, Category::Art);
        assert!(matches!(
            validate_catalog_item(&no_id),
            Err(ValidationError::Required { .. })
        ));

        let no_name = CatalogItem::new("9", "", 10, Category::Art);
        assert!(validate_catalog_item(&no_name).is_err());

        let negative = CatalogItem::new("9", "Debt Orb", -5, Category::Art);
        assert!(matches!(
            validate_catalog_item(&negative),
            Err(ValidationError::Negative { .. })
        ));
    }
}
