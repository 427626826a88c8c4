//! Shopping cart module.
//!
//! Contains the cart ledger, pricing breakdown, and discount rules.

mod cart;
mod discount;
mod pricing;

pub use cart::{Cart, CartLine};
pub use discount::{
    CategoryCounts, DiscountEngine, DiscountRule, DiscountState, CATEGORY_DISCOUNT_THRESHOLD,
};
pub use pricing::CartPricing;
