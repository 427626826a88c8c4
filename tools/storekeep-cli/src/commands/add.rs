//! Add a product to the catalog.

use anyhow::{Context as _, Result};
use storekeep_commerce::catalog::{ProductDraft, ProductKind};

use super::{AddArgs, CategoryArg};
use crate::context::{Context, FileCatalog};
use crate::prompt;

/// Run the add command.
pub fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.open_catalog();
    add_product(args, ctx, &mut catalog)
}

/// Add one product, prompting for anything `args` leaves out.
pub fn add_product(args: AddArgs, ctx: &Context, catalog: &mut FileCatalog) -> Result<()> {
    let draft = collect_draft(args)?;
    let product = draft.validate().context("Invalid product")?;
    let id = product.id.clone();

    catalog
        .add(product)
        .with_context(|| format!("Could not add product {}", id))?;

    if ctx.output.is_json() {
        if let Some(product) = catalog.find_by_id(id.as_str()) {
            ctx.output.json(product);
        }
        return Ok(());
    }

    ctx.output.success(&format!(
        "Added {} ({} of {} slots left)",
        id,
        catalog.remaining_capacity(),
        storekeep_commerce::catalog::MAX_PRODUCTS
    ));
    Ok(())
}

fn collect_draft(args: AddArgs) -> Result<ProductDraft> {
    let category = match args.category {
        Some(category) => category,
        None => {
            let items = vec!["Clothing".to_string(), "Electronics".to_string()];
            match prompt::select("Product type", &items)? {
                0 => CategoryArg::Clothing,
                _ => CategoryArg::Electronics,
            }
        }
    };

    let id = or_prompt(args.id, || prompt::text("Product ID"))?;
    let name = or_prompt(args.name, || prompt::text("Product name"))?;
    let quantity_available = or_prompt(args.quantity, || {
        prompt::positive_count("Number of items available").map(i64::from)
    })?;
    let price = or_prompt(args.price, || prompt::price("Price"))?;

    let kind = match category {
        CategoryArg::Clothing => ProductKind::Clothing {
            size: or_prompt(args.size, || prompt::text("Size"))?,
            color: or_prompt(args.color, || prompt::text("Color"))?,
        },
        CategoryArg::Electronics => ProductKind::Electronics {
            brand: or_prompt(args.brand, || prompt::text("Brand"))?,
            warranty_months: or_prompt(args.warranty, || {
                prompt::positive_count("Warranty period (months)")
            })?,
        },
    };

    Ok(ProductDraft {
        id,
        name,
        quantity_available,
        price,
        kind,
    })
}

fn or_prompt<T>(value: Option<T>, ask: impl FnOnce() -> Result<T>) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => ask(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_flags() {
        let args = AddArgs {
            category: Some(CategoryArg::Electronics),
            id: Some("PC1".to_string()),
            name: Some("Dell PC".to_string()),
            quantity: Some(5),
            price: Some(550.0),
            brand: Some("Dell".to_string()),
            warranty: Some(24),
            ..Default::default()
        };

        let draft = collect_draft(args).unwrap();
        assert_eq!(draft.id, "PC1");
        assert_eq!(
            draft.kind,
            ProductKind::Electronics {
                brand: "Dell".to_string(),
                warranty_months: 24
            }
        );
    }

    #[test]
    fn test_invalid_flags_rejected_by_validation() {
        let args = AddArgs {
            category: Some(CategoryArg::Clothing),
            id: Some("C1".to_string()),
            name: Some("Shirt".to_string()),
            quantity: Some(-1),
            price: Some(10.0),
            size: Some("M".to_string()),
            color: Some("Red".to_string()),
            ..Default::default()
        };

        assert!(collect_draft(args).unwrap().validate().is_err());
    }
}
