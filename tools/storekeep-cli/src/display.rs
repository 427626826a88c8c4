//! Console observers for catalog and cart changes.

use storekeep_commerce::cart::{CartLine, CartPricing};
use storekeep_commerce::catalog::{CatalogObserver, Product};
use storekeep_commerce::session::CartObserver;

use crate::output::Output;

/// Mirrors catalog row changes to the console in verbose mode.
pub struct ConsoleCatalogObserver {
    output: Output,
}

impl ConsoleCatalogObserver {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl CatalogObserver for ConsoleCatalogObserver {
    fn on_product_added(&mut self, product: &Product) {
        self.output
            .debug(&format!("Row added: {} ({})", product.id, product.name));
    }

    fn on_product_removed(&mut self, product: &Product) {
        self.output
            .debug(&format!("Row removed: {} ({})", product.id, product.name));
    }

    fn on_catalog_changed(&mut self, products: &[Product]) {
        self.output
            .debug(&format!("Catalog now holds {} product(s)", products.len()));
    }
}

/// Prints each updated cart line and the price breakdown.
pub struct ConsoleCartObserver {
    output: Output,
}

impl ConsoleCartObserver {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl CartObserver for ConsoleCartObserver {
    fn on_line_updated(&mut self, line: &CartLine) {
        self.output.table_row(
            &[
                &line.product_name,
                &format!("x{}", line.quantity),
                &line.accumulated_price.to_string(),
            ],
            &[24, 6, 12],
        );
    }

    fn on_pricing(&mut self, pricing: &CartPricing) {
        for line in pricing.to_string().lines() {
            self.output.plain(&format!("  {}", line));
        }
    }
}
