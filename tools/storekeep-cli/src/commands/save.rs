//! Save the catalog to disk.

use anyhow::{Context as _, Result};
use storekeep_commerce::catalog::{CatalogCodec, JsonFileCodec};

use super::SaveArgs;
use crate::context::{Context, FileCatalog};

/// Run the save command.
pub fn run(args: SaveArgs, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.open_catalog();
    match args.output {
        Some(path) => save_copy(ctx, &catalog, &path),
        None => save_catalog(ctx, &mut catalog),
    }
}

/// Rewrite the configured catalog file.
pub fn save_catalog(ctx: &Context, catalog: &mut FileCatalog) -> Result<()> {
    catalog.save().context("Failed to save products")?;
    ctx.output.success(&format!(
        "Saved {} product(s) to {}",
        catalog.len(),
        catalog.codec().path().display()
    ));
    Ok(())
}

/// Write the catalog to another file, leaving the configured one alone.
fn save_copy(ctx: &Context, catalog: &FileCatalog, path: &str) -> Result<()> {
    let target = ctx.resolve_path(path);
    let mut codec = JsonFileCodec::new(&target);
    codec
        .save(catalog.list())
        .with_context(|| format!("Failed to save products to {}", target.display()))?;
    ctx.output.success(&format!(
        "Saved {} product(s) to {}",
        catalog.len(),
        target.display()
    ));
    Ok(())
}
