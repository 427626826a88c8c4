//! Print the catalog sorted by product ID.

use std::io::{self, Write};

use anyhow::{Context as _, Result};

use crate::context::{Context, FileCatalog};

/// Run the print command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut catalog = ctx.open_catalog();
    print_catalog(ctx, &mut catalog)
}

/// Write every record to stdout, sorted by ID.
///
/// JSON mode emits the sorted records instead of the text listing; storage
/// is resynced the same way in both modes.
pub fn print_catalog(ctx: &Context, catalog: &mut FileCatalog) -> Result<()> {
    let count = if ctx.output.is_json() {
        let count = catalog
            .print_sorted(&mut io::sink())
            .context("Failed to print catalog")?;
        ctx.output.json(&catalog.sorted_view());
        count
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let count = catalog
            .print_sorted(&mut out)
            .context("Failed to print catalog")?;
        out.flush()?;
        count
    };
    ctx.output.debug(&format!("Printed {} product(s)", count));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use storekeep_commerce::catalog::Product;
    use storekeep_commerce::Money;

    fn json_context(dir: &std::path::Path) -> Context {
        Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_json_print_resyncs_storage() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = json_context(dir.path());
        let mut catalog = ctx.open_catalog();
        catalog
            .add(Product::clothing("C1", "Shirt", 4, Money::new(1500), "M", "Red"))
            .unwrap();
        std::fs::remove_file(ctx.catalog_path()).unwrap();

        print_catalog(&ctx, &mut catalog).unwrap();
        assert!(ctx.catalog_path().exists());
    }

    #[test]
    fn test_json_print_of_empty_catalog_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = json_context(dir.path());
        let mut catalog = ctx.open_catalog();
        std::fs::remove_file(ctx.catalog_path()).unwrap();

        print_catalog(&ctx, &mut catalog).unwrap();
        assert!(!ctx.catalog_path().exists());
    }
}
