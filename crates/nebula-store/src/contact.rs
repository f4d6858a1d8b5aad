//! # Contact Uplink
//!
//! The contact form message type, its aggregate validation, and the
//! simulated submission backend.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Contact Submission Flow                            │
//! │                                                                         │
//! │  Form submit                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ContactMessage::validate ── field errors? ──► rendered per-field      │
//! │      │                                                                  │
//! │      ▼ (valid)                                                          │
//! │  Transmitter::submit                                                    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  fixed delay (2 s) ──► SubmissionReceipt { id, received_at }           │
//! │                                                                         │
//! │  The delay is a stand-in for a network call. There is no retry and no  │
//! │  cancellation: once validation passes, the simulated backend always    │
//! │  accepts.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use nebula_core::error::ValidationError;
use nebula_core::validation::{validate_contact_name, validate_email, validate_message};

/// How long the simulated backend "thinks" before accepting.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Contact Message
// =============================================================================

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validates all fields, collecting every failure.
    ///
    /// The form renders one error per offending field, so this returns all
    /// of them at once instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            validate_contact_name(&self.name),
            validate_email(&self.email),
            validate_message(&self.message),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Submission Error
// =============================================================================

/// Why a submission was not accepted.
///
/// The simulated backend never fails, so validation is the only rejection.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    /// One or more fields failed validation.
    #[error("contact message rejected: {} invalid field(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

// =============================================================================
// Submission Receipt
// =============================================================================

/// Proof of acceptance returned by the uplink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Uplink-assigned reference id.
    pub id: Uuid,

    /// When the transmission was accepted.
    pub received_at: DateTime<Utc>,
}

// =============================================================================
// Transmitter
// =============================================================================

/// The simulated contact-form backend.
///
/// ## Usage
/// ```rust,no_run
/// use std::time::Duration;
/// use nebula_store::{ContactMessage, Transmitter};
///
/// # async fn demo() {
/// let uplink = Transmitter::with_delay(Duration::from_millis(10));
/// let receipt = uplink
///     .submit(&ContactMessage {
///         name: "Jax Orion".into(),
///         email: "jax@orion.dev".into(),
///         message: "Does the visor fit over a flight helmet?".into(),
///     })
///     .await
///     .unwrap();
/// println!("accepted as {}", receipt.id);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Transmitter {
    delay: Duration,
}

impl Transmitter {
    /// Creates a transmitter with the storefront's standard 2 s delay.
    pub fn new() -> Self {
        Transmitter {
            delay: DEFAULT_SUBMIT_DELAY,
        }
    }

    /// Creates a transmitter with a custom delay. Tests use zero.
    pub fn with_delay(delay: Duration) -> Self {
        Transmitter { delay }
    }

    /// Validates and "sends" a contact message.
    ///
    /// ## Behavior
    /// - Invalid fields: rejected immediately with every field error
    /// - Valid: resolves to a [`SubmissionReceipt`] after the fixed delay,
    ///   unconditionally
    pub async fn submit(
        &self,
        message: &ContactMessage,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        message.validate().map_err(|errors| {
            debug!(fields = errors.len(), "contact message failed validation");
            SubmissionError::Invalid(errors)
        })?;

        debug!(delay_ms = self.delay.as_millis() as u64, "transmitting");
        tokio::time::sleep(self.delay).await;

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        };
        info!(receipt_id = %receipt.id, from = %message.email, "transmission received");
        Ok(receipt)
    }
}

impl Default for Transmitter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
