//! Catalog management and cart discount engine for Storekeep.
//!
//! This crate provides the domain logic behind the Storekeep shop:
//!
//! - **Catalog**: Clothing and electronics products, a catalog capped at
//!   [`MAX_PRODUCTS`](catalog::MAX_PRODUCTS) entries, and file persistence
//! - **Cart**: Line items merged by product name, category counts, and the
//!   first-purchase and same-category discounts
//! - **Customer**: The username ledger that decides first purchases
//! - **Session**: A shopper's cart tied to catalog stock
//!
//! # Example
//!
//! ```rust
//! use storekeep_commerce::prelude::*;
//!
//! let mut store = CatalogStore::open(InMemoryCodec::new());
//! store
//!     .add(Product::electronics("PC1", "Dell PC", 5, Money::from_decimal(550.0), "Dell", 2))
//!     .unwrap();
//!
//! let mut session = ShoppingSession::new("alice", true);
//! let product = store.find_by_id("PC1").unwrap();
//! let pricing = session.add_product(product, &mut NoopCartObserver).unwrap();
//! assert_eq!(pricing.final_price, Money::from_decimal(495.0));
//! println!("{}", pricing);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod session;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        CatalogCodec, CatalogObserver, CatalogStore, Category, CategoryFilter, Confirm,
        InMemoryCodec, JsonFileCodec, Product, ProductDraft, ProductKind, MAX_PRODUCTS,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartPricing, CategoryCounts, DiscountEngine, DiscountRule, DiscountState,
    };

    // Customer and session
    pub use crate::customer::UsernameLedger;
    pub use crate::session::{CartObserver, NoopCartObserver, ShoppingSession};
}
