//! Product catalog module.
//!
//! Contains product records, the capacity-bounded catalog store, and
//! catalog persistence.

pub mod persistence;
mod product;
mod store;

pub use persistence::{CatalogCodec, InMemoryCodec, JsonFileCodec, DEFAULT_CATALOG_FILE};
pub use product::{
    Category, CategoryFilter, Product, ProductDraft, ProductKind, LOW_STOCK_THRESHOLD,
    MAX_PRICE_PENCE,
};
pub use store::{CatalogObserver, CatalogStore, Confirm, EMPTY_CATALOG_MESSAGE, MAX_PRODUCTS};
