//! List catalog products as a table.

use anyhow::{Context as _, Result};
use storekeep_commerce::catalog::CategoryFilter;

use super::ListArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let filter: CategoryFilter = args
        .category
        .parse()
        .context("Invalid --category")?;
    let catalog = ctx.open_catalog();
    let products = catalog.list_by_category(filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products to show");
        return Ok(());
    }

    let threshold = ctx.config.catalog.low_stock_threshold;
    ctx.output.header(&format!("Products ({})", products.len()));
    ctx.output.product_header();
    for product in &products {
        ctx.output.product_row(product, threshold);
    }

    let low: Vec<_> = products
        .iter()
        .filter(|p| p.is_low_stock_at(threshold))
        .collect();
    if !low.is_empty() {
        ctx.output.info("");
        ctx.output.warn(&format!("{} product(s) running low:", low.len()));
        for product in low {
            ctx.output.list_item(&format!(
                "{} {}",
                product.id,
                stock_badge(product.quantity_available, threshold)
            ));
        }
    }

    Ok(())
}
