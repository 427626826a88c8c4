//! Cart pricing breakdown.

use crate::cart::{DiscountRule, DiscountState};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line prices before discounts.
    pub total: Money,
    /// First-purchase discount amount.
    pub first_purchase_discount: Money,
    /// Same-category discount amount.
    pub category_discount: Money,
    /// Total minus both discounts.
    pub final_price: Money,
    /// Eligibility the amounts were derived from.
    pub state: DiscountState,
}

impl CartPricing {
    /// Combined discount amount.
    pub fn savings(&self) -> Money {
        self.first_purchase_discount + self.category_discount
    }

    /// Check if any discount applies.
    pub fn has_discounts(&self) -> bool {
        !self.savings().is_zero()
    }

    /// Get discount percentage of the total.
    pub fn discount_percentage(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        (self.savings().amount_cents as f64 / self.total.amount_cents as f64) * 100.0
    }
}

/// Four-line breakdown: total, both discounts, final price.
impl fmt::Display for CartPricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        writeln!(
            f,
            "{}: {}",
            DiscountRule::FirstPurchase.label(),
            self.first_purchase_discount
        )?;
        writeln!(
            f,
            "{}: {}",
            DiscountRule::SameCategory.label(),
            self.category_discount
        )?;
        write!(f, "Final Price: {}", self.final_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing(total: i64, first: i64, category: i64) -> CartPricing {
        CartPricing {
            total: Money::new(total),
            first_purchase_discount: Money::new(first),
            category_discount: Money::new(category),
            final_price: Money::new(total - first - category),
            state: DiscountState::default(),
        }
    }

    #[test]
    fn test_breakdown_format() {
        let text = pricing(30000, 0, 6000).to_string();
        assert_eq!(
            text,
            "Total: \u{00a3}300.00\n\
             First Purchase Discount: \u{00a3}0.00\n\
             Three items in the same Category Discount: \u{00a3}60.00\n\
             Final Price: \u{00a3}240.00"
        );
    }

    #[test]
    fn test_discount_percentage() {
        let p = pricing(10000, 1000, 2000);
        assert!(p.has_discounts());
        assert_eq!(p.savings(), Money::new(3000));
        assert!((p.discount_percentage() - 30.0).abs() < 0.01);
        assert_eq!(pricing(0, 0, 0).discount_percentage(), 0.0);
    }
}
