//! Booking domain error types.

use thiserror::Error;

/// Errors that can occur in hotel booking operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// No booking matches a confirmation code.
    #[error("No booking for confirmation code: {0}")]
    UnknownConfirmationCode(String),

    /// Check-out date is not after check-in date.
    #[error("Invalid stay: check-out {check_out} is not after check-in {check_in}")]
    InvalidStay {
        check_in: String,
        check_out: String,
    },

    /// Invalid booking flow state transition.
    #[error("Invalid booking flow transition from {from} to {to}")]
    InvalidFlowTransition { from: String, to: String },

    /// Booking flow step entered without its required data.
    #[error("Booking flow incomplete: missing {0}")]
    FlowIncomplete(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BookingError {
    fn from(e: serde_json::Error) -> Self {
        BookingError::SerializationError(e.to_string())
    }
}
