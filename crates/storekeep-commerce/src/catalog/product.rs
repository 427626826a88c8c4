//! Product record types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 3;

/// Highest unit price a product may carry, in pence (one million pounds).
pub const MAX_PRICE_PENCE: i64 = 100_000_000;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
        }
    }

    /// Parse a category label, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "clothing" => Some(Category::Clothing),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific attributes of a product.
///
/// The `category` tag is written alongside the shared fields when a product
/// is persisted, so both variants round-trip without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum ProductKind {
    Clothing {
        size: String,
        color: String,
    },
    Electronics {
        brand: String,
        #[serde(rename = "warrantyMonths")]
        warranty_months: u32,
    },
}

impl ProductKind {
    pub fn category(&self) -> Category {
        match self {
            ProductKind::Clothing { .. } => Category::Clothing,
            ProductKind::Electronics { .. } => Category::Electronics,
        }
    }

    /// Variant detail string, e.g. `"M, Black"` or `"Samsung, 2"`.
    pub fn info(&self) -> String {
        match self {
            ProductKind::Clothing { size, color } => format!("{}, {}", size, color),
            ProductKind::Electronics {
                brand,
                warranty_months,
            } => format!("{}, {}", brand, warranty_months),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier, chosen by the manager.
    #[serde(rename = "productID")]
    pub id: ProductId,
    /// Product name.
    #[serde(rename = "productName")]
    pub name: String,
    /// Units in stock.
    #[serde(rename = "numAvailable")]
    pub quantity_available: u32,
    /// Unit price.
    pub price: Money,
    /// Category-specific attributes.
    #[serde(flatten)]
    pub kind: ProductKind,
}

impl Product {
    /// Create a clothing product.
    pub fn clothing(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity_available: u32,
        price: Money,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity_available,
            price,
            kind: ProductKind::Clothing {
                size: size.into(),
                color: color.into(),
            },
        }
    }

    /// Create an electronics product.
    pub fn electronics(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity_available: u32,
        price: Money,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity_available,
            price,
            kind: ProductKind::Electronics {
                brand: brand.into(),
                warranty_months,
            },
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn info(&self) -> String {
        self.kind.info()
    }

    /// Check if stock is below [`LOW_STOCK_THRESHOLD`].
    pub fn is_low_stock(&self) -> bool {
        self.is_low_stock_at(LOW_STOCK_THRESHOLD)
    }

    /// Check if stock is below a custom threshold.
    pub fn is_low_stock_at(&self, threshold: u32) -> bool {
        self.quantity_available < threshold
    }

    /// Check if at least `quantity` units can be sold.
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.quantity_available >= quantity
    }

    /// Check a record that did not come through [`ProductDraft::validate`],
    /// e.g. one read back from storage.
    pub fn check(&self) -> Result<(), CommerceError> {
        if self.id.is_blank() {
            return Err(CommerceError::ValidationError(
                "product ID must not be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product name must not be empty for {}",
                self.id
            )));
        }
        check_price(self.price)
    }

    /// Multi-line description shown when a shopper selects the product.
    pub fn details(&self) -> String {
        format!(
            "Selected product details:\n\
             Product ID - {}\n\
             Category - {}\n\
             Name - {}\n\
             Price - {}\n\
             Info - {}\n",
            self.id,
            self.category(),
            self.name,
            self.price.display_amount(),
            self.info()
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{productID='{}', productName='{}', numOfItemsAvailable={}, price={}}}",
            self.id,
            self.name,
            self.quantity_available,
            self.price.display_amount()
        )
    }
}

/// Category filter for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category() == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::parse(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown category '{}'", s)))
    }
}

/// Unvalidated product input, as collected from a manager.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub quantity_available: i64,
    pub price: f64,
    pub kind: ProductKind,
}

impl ProductDraft {
    /// Validate the draft and build a [`Product`].
    ///
    /// Text fields are trimmed and must be non-empty. Quantity, price and
    /// warranty must be positive.
    pub fn validate(self) -> Result<Product, CommerceError> {
        let id = non_empty("product ID", &self.id)?;
        let name = non_empty("product name", &self.name)?;

        if self.quantity_available <= 0 {
            return Err(CommerceError::ValidationError(format!(
                "number of items available must be positive, got {}",
                self.quantity_available
            )));
        }
        let quantity_available = u32::try_from(self.quantity_available).map_err(|_| {
            CommerceError::ValidationError(format!(
                "number of items available is too large: {}",
                self.quantity_available
            ))
        })?;

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CommerceError::ValidationError(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        if self.price * 100.0 > MAX_PRICE_PENCE as f64 {
            return Err(CommerceError::ValidationError(format!(
                "price must not exceed {}, got {}",
                Money::new(MAX_PRICE_PENCE),
                self.price
            )));
        }
        let price = Money::from_decimal(self.price);
        if !price.is_positive() {
            return Err(CommerceError::ValidationError(format!(
                "price rounds to zero: {}",
                self.price
            )));
        }

        let kind = match self.kind {
            ProductKind::Clothing { size, color } => ProductKind::Clothing {
                size: non_empty("size", &size)?,
                color: non_empty("color", &color)?,
            },
            ProductKind::Electronics {
                brand,
                warranty_months,
            } => {
                if warranty_months == 0 {
                    return Err(CommerceError::ValidationError(
                        "warranty period must be positive".to_string(),
                    ));
                }
                ProductKind::Electronics {
                    brand: non_empty("brand", &brand)?,
                    warranty_months,
                }
            }
        };

        Ok(Product {
            id: ProductId::new(id),
            name,
            quantity_available,
            price,
            kind,
        })
    }
}

fn check_price(price: Money) -> Result<(), CommerceError> {
    if !price.is_positive() {
        return Err(CommerceError::ValidationError(format!(
            "price must be positive, got {}",
            price
        )));
    }
    if price.amount_cents > MAX_PRICE_PENCE {
        return Err(CommerceError::ValidationError(format!(
            "price must not exceed {}, got {}",
            Money::new(MAX_PRICE_PENCE),
            price
        )));
    }
    Ok(())
}

fn non_empty(field: &str, value: &str) -> Result<String, CommerceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CommerceError::ValidationError(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}
