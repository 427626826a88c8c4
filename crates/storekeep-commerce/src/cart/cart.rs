//! Cart and cart line types.

use crate::cart::{CartPricing, DiscountEngine};
use crate::catalog::Category;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Lines are keyed by product name. Adding a name that is already present
/// bumps its quantity by one and adds the unit price to the line's
/// accumulated price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in the order they were first added.
    lines: Vec<CartLine>,
    /// Whether the shopper qualifies for the first-purchase discount.
    first_purchase_eligible: bool,
}

impl Cart {
    /// Create an empty cart for a returning shopper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with an explicit first-purchase flag.
    pub fn with_first_purchase(first_purchase_eligible: bool) -> Self {
        Self {
            lines: Vec::new(),
            first_purchase_eligible,
        }
    }

    pub fn first_purchase_eligible(&self) -> bool {
        self.first_purchase_eligible
    }

    /// Add one unit of a product to the cart and return the new pricing.
    pub fn add_line(
        &mut self,
        product_name: impl Into<String>,
        unit_price: Money,
        category: Category,
    ) -> Result<CartPricing, CommerceError> {
        let product_name = product_name.into();
        if product_name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "product name must not be empty".to_string(),
            ));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "unit price must not be negative, got {}",
                unit_price
            )));
        }

        // Every line is non-negative, so a total that fits means each line fits.
        let overflow = || {
            CommerceError::ValidationError(format!(
                "cart total overflows when adding {}",
                unit_price
            ))
        };
        self.checked_total()
            .and_then(|total| total.checked_add(&unit_price))
            .ok_or_else(overflow)?;

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_name == product_name)
        {
            existing.accumulated_price = existing
                .accumulated_price
                .checked_add(&unit_price)
                .ok_or_else(overflow)?;
            existing.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_name,
                quantity: 1,
                accumulated_price: unit_price,
                category,
            });
        }

        Ok(self.pricing())
    }

    /// Sum of every line's accumulated price.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| &l.accumulated_price).sum()
    }

    fn checked_total(&self) -> Option<Money> {
        self.lines
            .iter()
            .try_fold(Money::zero(), |acc, l| acc.checked_add(&l.accumulated_price))
    }

    /// Recompute discounts and the final price from the current lines.
    pub fn pricing(&self) -> CartPricing {
        DiscountEngine::evaluate(&self.lines, self.first_purchase_eligible)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product name.
    pub fn get_line(&self, product_name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_name == product_name)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One merged cart entry for a distinct product name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product name; the merge key.
    pub product_name: String,
    /// Units of this product, at least 1.
    pub quantity: u32,
    /// Sum of the unit prices of every unit added.
    pub accumulated_price: Money,
    /// Category of the product.
    pub category: Category,
}
