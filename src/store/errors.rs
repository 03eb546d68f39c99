//! # Store Errors
//!
//! Failures raised by the record store adapters. Driver failures are
//! carried unchanged; nothing here is retried.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier is not a 24-character hex ObjectId
    #[error("Invalid student id: {0}")]
    InvalidId(String),

    /// Driver or transport failure reported by MongoDB
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Record could not be encoded as BSON
    #[error("Encoding error: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// Insert returned an identifier that is not an ObjectId
    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),

    /// In-memory store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}
