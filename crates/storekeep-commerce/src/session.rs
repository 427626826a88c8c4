//! Shopping sessions.
//!
//! A session ties one shopper's cart to their first-purchase status and to
//! the catalog's stock levels.

use crate::cart::{Cart, CartLine, CartPricing};
use crate::catalog::Product;
use crate::customer::UsernameLedger;
use crate::error::CommerceError;
use tracing::debug;

/// Receives cart updates, e.g. to mirror cart rows and the price breakdown.
pub trait CartObserver {
    fn on_line_updated(&mut self, _line: &CartLine) {}

    fn on_pricing(&mut self, _pricing: &CartPricing) {}
}

/// Observer that ignores every notification.
pub struct NoopCartObserver;

impl CartObserver for NoopCartObserver {}

/// One shopper's visit.
#[derive(Debug, Clone)]
pub struct ShoppingSession {
    username: String,
    cart: Cart,
}

impl ShoppingSession {
    pub fn new(username: impl Into<String>, first_purchase_eligible: bool) -> Self {
        Self {
            username: username.into(),
            cart: Cart::with_first_purchase(first_purchase_eligible),
        }
    }

    /// Start a session, registering the shopper in the ledger.
    ///
    /// The shopper gets the first-purchase discount iff the ledger had not
    /// seen their username before.
    pub fn start(username: &str, ledger: &mut UsernameLedger) -> Result<Self, CommerceError> {
        let first_purchase = ledger.register(username)?;
        Ok(Self::new(username.trim(), first_purchase))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn first_purchase_eligible(&self) -> bool {
        self.cart.first_purchase_eligible()
    }

    /// Put one unit of a catalog product into the cart.
    ///
    /// Fails with `InsufficientInventory` if the product is out of stock.
    pub fn add_product(
        &mut self,
        product: &Product,
        observer: &mut dyn CartObserver,
    ) -> Result<CartPricing, CommerceError> {
        if !product.has_stock_for(1) {
            return Err(CommerceError::InsufficientInventory {
                product_id: product.id.to_string(),
                requested: 1,
                available: product.quantity_available,
            });
        }

        let pricing = self
            .cart
            .add_line(product.name.clone(), product.price, product.category())?;
        debug!(
            username = %self.username,
            product = %product.id,
            total = %pricing.total,
            "added to cart"
        );

        if let Some(line) = self.cart.get_line(&product.name) {
            observer.on_line_updated(line);
        }
        observer.on_pricing(&pricing);
        Ok(pricing)
    }

    /// Current pricing breakdown.
    pub fn pricing(&self) -> CartPricing {
        self.cart.pricing()
    }
}
