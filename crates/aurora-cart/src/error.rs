//! Cart store error types.

use thiserror::Error;

/// Errors from a durable-storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize or deserialize the cart.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend I/O failure (file unreadable, quota exceeded, ...).
    #[error("Storage backend error: {0}")]
    Backend(#[from] std::io::Error),
}

/// Errors from cart store operations.
///
/// A mutation that returns `Err` has still been applied in memory; only the
/// write-through to durable storage failed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The cart changed in memory but could not be persisted.
    #[error("Cart persistence failed: {0}")]
    Persist(#[from] StorageError),

    /// A derived computation failed (overflow, mixed currencies).
    #[error("Cart pricing failed: {0}")]
    Pricing(#[from] aurora_commerce::BookingError),
}
