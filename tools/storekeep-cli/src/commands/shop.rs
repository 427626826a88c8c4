//! Shopping center: pick products into a cart and see the discounts.

use anyhow::{Context as _, Result};
use storekeep_commerce::session::ShoppingSession;
use storekeep_commerce::CommerceError;

use super::ShopArgs;
use crate::context::{Context, FileCatalog};
use crate::display::ConsoleCartObserver;
use crate::output::stock_badge;
use crate::prompt;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog();
    shop(args.user, ctx, &catalog)
}

/// Run one shopping session against the catalog.
pub fn shop(user: Option<String>, ctx: &Context, catalog: &FileCatalog) -> Result<()> {
    let username = match user {
        Some(user) => user,
        None => prompt::text("Username")?,
    };

    let mut ledger = ctx.open_ledger()?;
    let mut session =
        ShoppingSession::start(&username, &mut ledger).context("Could not start session")?;

    if session.first_purchase_eligible() {
        ctx.output.success(&format!(
            "Welcome, {}! Your first purchase gets 10% off.",
            session.username()
        ));
    } else {
        ctx.output
            .info(&format!("Welcome back, {}.", session.username()));
    }

    if catalog.is_empty() {
        ctx.output.warn("The catalog is empty, nothing to buy");
        return Ok(());
    }

    let threshold = ctx.config.catalog.low_stock_threshold;
    let products = catalog.sorted_view();
    let mut items: Vec<String> = products
        .iter()
        .map(|p| {
            format!(
                "{:10} {:24} {:>10}  {}",
                p.id.as_str(),
                p.name,
                p.price.display(),
                stock_badge(p.quantity_available, threshold)
            )
        })
        .collect();
    items.push("Checkout".to_string());

    let mut observer = ConsoleCartObserver::new(ctx.output.clone());
    loop {
        let choice = prompt::select("Add to cart", &items)?;
        let Some(product) = products.get(choice) else {
            break;
        };

        ctx.output.plain(&product.details());
        match session.add_product(product, &mut observer) {
            Ok(_) => {}
            Err(CommerceError::InsufficientInventory { product_id, .. }) => {
                ctx.output
                    .warn(&format!("{} is out of stock", product_id));
            }
            Err(e) => ctx.output.warn(&format!("Could not add {}: {}", product.id, e)),
        }
    }

    let pricing = session.pricing();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "username": session.username(),
            "lines": session.cart().lines(),
            "pricing": pricing,
        }));
        return Ok(());
    }

    ctx.output.header("Shopping Cart");
    if session.cart().is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }
    for line in session.cart().lines() {
        ctx.output.table_row(
            &[
                &line.product_name,
                &format!("x{}", line.quantity),
                &line.accumulated_price.to_string(),
            ],
            &[24, 6, 12],
        );
    }
    ctx.output.plain("");
    ctx.output.plain(&pricing.to_string());
    if pricing.has_discounts() {
        ctx.output
            .success(&format!("You saved {}", pricing.savings()));
    }
    Ok(())
}
