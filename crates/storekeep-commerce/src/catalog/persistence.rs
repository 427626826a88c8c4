//! Catalog persistence.
//!
//! The whole catalog is written as one document on every save. Writes
//! truncate the destination; a failed write may leave a partial file behind
//! but never touches the in-memory catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default catalog file name.
pub const DEFAULT_CATALOG_FILE: &str = "Product_Data.txt";

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// Storage backend for the full product collection.
pub trait CatalogCodec {
    /// Replace the stored collection with `products`.
    fn save(&mut self, products: &[Product]) -> Result<(), CommerceError>;

    /// Read the stored collection, in stored order.
    fn load(&self) -> Result<Vec<Product>, CommerceError>;

    /// Human-readable location, used in log messages.
    fn location(&self) -> String;
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    format_version: u32,
    saved_at: String,
    products: &'a [Product],
}

#[derive(Deserialize)]
struct StoredCatalog {
    format_version: u32,
    #[serde(default)]
    #[allow(dead_code)]
    saved_at: Option<String>,
    products: Vec<Product>,
}

/// JSON file codec.
#[derive(Debug, Clone)]
pub struct JsonFileCodec {
    path: PathBuf,
}

impl JsonFileCodec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode products into the document format.
    pub fn encode(products: &[Product]) -> Result<Vec<u8>, CommerceError> {
        let document = CatalogDocument {
            format_version: FORMAT_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            products,
        };
        Ok(serde_json::to_vec_pretty(&document)?)
    }

    /// Decode a document produced by [`JsonFileCodec::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Vec<Product>, CommerceError> {
        let stored: StoredCatalog = serde_json::from_slice(bytes)?;
        if stored.format_version != FORMAT_VERSION {
            return Err(CommerceError::SerializationError(format!(
                "unsupported catalog format version {}",
                stored.format_version
            )));
        }
        Ok(stored.products)
    }
}

impl Default for JsonFileCodec {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }
}

impl CatalogCodec for JsonFileCodec {
    fn save(&mut self, products: &[Product]) -> Result<(), CommerceError> {
        let bytes = Self::encode(products)?;
        fs::write(&self.path, bytes).map_err(|e| {
            CommerceError::PersistenceError(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), count = products.len(), "catalog written");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Product>, CommerceError> {
        let bytes = fs::read(&self.path).map_err(|e| {
            CommerceError::PersistenceError(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Self::decode(&bytes)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory codec for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCodec {
    stored: Option<Vec<Product>>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryCodec {
    /// An empty codec; `load` fails as if the file were missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A codec preloaded with products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            stored: Some(products),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The last saved collection, if any.
    pub fn stored(&self) -> Option<&[Product]> {
        self.stored.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl CatalogCodec for InMemoryCodec {
    fn save(&mut self, products: &[Product]) -> Result<(), CommerceError> {
        if self.fail_saves {
            return Err(CommerceError::PersistenceError(
                "in-memory codec configured to fail".to_string(),
            ));
        }
        self.stored = Some(products.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Product>, CommerceError> {
        self.stored
            .clone()
            .ok_or_else(|| CommerceError::PersistenceError("nothing stored".to_string()))
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
