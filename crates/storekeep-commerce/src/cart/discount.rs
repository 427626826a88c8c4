//! Discount rules and their evaluation.

use crate::cart::{CartLine, CartPricing};
use crate::catalog::Category;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Lines of one category needed for the category discount.
pub const CATEGORY_DISCOUNT_THRESHOLD: usize = 3;

/// A discount rule the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountRule {
    /// 10% off for a shopper's first purchase.
    FirstPurchase,
    /// 20% off when one category has at least three lines.
    SameCategory,
}

impl DiscountRule {
    /// Percentage off the cart total.
    pub fn percent(&self) -> f64 {
        match self {
            DiscountRule::FirstPurchase => 10.0,
            DiscountRule::SameCategory => 20.0,
        }
    }

    /// Label used in the price breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountRule::FirstPurchase => "First Purchase Discount",
            DiscountRule::SameCategory => "Three items in the same Category Discount",
        }
    }

    /// Amount this rule takes off `total`, or zero when not eligible.
    pub fn amount(&self, total: Money, eligible: bool) -> Money {
        if eligible {
            total.percentage(self.percent())
        } else {
            Money::zero()
        }
    }
}

/// Number of cart lines per category.
///
/// Counts lines, not units: three units of one product are one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub electronics_lines: usize,
    pub clothing_lines: usize,
}

impl CategoryCounts {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        lines.iter().fold(Self::default(), |mut counts, line| {
            match line.category {
                Category::Electronics => counts.electronics_lines += 1,
                Category::Clothing => counts.clothing_lines += 1,
            }
            counts
        })
    }

    pub fn qualifies_for_category_discount(&self) -> bool {
        self.electronics_lines >= CATEGORY_DISCOUNT_THRESHOLD
            || self.clothing_lines >= CATEGORY_DISCOUNT_THRESHOLD
    }
}

/// Discount eligibility derived from a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountState {
    pub counts: CategoryCounts,
    pub first_purchase_eligible: bool,
    pub category_discount_eligible: bool,
}

impl DiscountState {
    pub fn derive(lines: &[CartLine], first_purchase_eligible: bool) -> Self {
        let counts = CategoryCounts::from_lines(lines);
        Self {
            counts,
            first_purchase_eligible,
            category_discount_eligible: counts.qualifies_for_category_discount(),
        }
    }
}

/// Stateless discount calculator.
pub struct DiscountEngine;

impl DiscountEngine {
    /// Price a set of cart lines.
    ///
    /// Both discounts are percentages of the undiscounted total and are
    /// subtracted independently. The final price is not clamped at zero.
    pub fn evaluate(lines: &[CartLine], first_purchase_eligible: bool) -> CartPricing {
        let state = DiscountState::derive(lines, first_purchase_eligible);
        let total: Money = lines.iter().map(|l| &l.accumulated_price).sum();

        let first_purchase_discount =
            DiscountRule::FirstPurchase.amount(total, state.first_purchase_eligible);
        let category_discount =
            DiscountRule::SameCategory.amount(total, state.category_discount_eligible);

        CartPricing {
            total,
            first_purchase_discount,
            category_discount,
            final_price: total - first_purchase_discount - category_discount,
            state,
        }
    }
}
