//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Catalog is at capacity.
    #[error("Catalog is full: at most {capacity} products can be stored")]
    CatalogFull { capacity: usize },

    /// A product with the same ID already exists.
    #[error("Product ID already exists: {0}")]
    DuplicateId(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The manager declined the deletion prompt.
    #[error("Deletion cancelled for product: {0}")]
    DeletionCancelled(String),

    /// Insufficient inventory.
    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// Reading or writing a backing file failed.
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// I/O error outside of persistence (e.g. writing a listing).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Io(e.to_string())
    }
}
