//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// A checkout transition that the state machine does not allow.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Price cannot be represented in minor units.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}
