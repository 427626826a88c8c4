//! Delete a product from the catalog.

use anyhow::Result;
use storekeep_commerce::catalog::Confirm;
use storekeep_commerce::CommerceError;

use super::DeleteArgs;
use crate::context::{Context, FileCatalog};
use crate::prompt::{AssumeYes, DialoguerConfirm};

/// Run the delete command.
pub fn run(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.open_catalog();
    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(DialoguerConfirm)
    };
    delete_product(&args.id, ctx, &mut catalog, confirm.as_mut())
}

/// Delete one product after confirmation.
///
/// A declined confirmation is reported, not treated as a failure.
pub fn delete_product(
    id: &str,
    ctx: &Context,
    catalog: &mut FileCatalog,
    confirm: &mut dyn Confirm,
) -> Result<()> {
    match catalog.delete_by_id(id.trim(), confirm) {
        Ok(removed) => {
            if ctx.output.is_json() {
                ctx.output.json(&removed);
            } else {
                ctx.output.success(&format!(
                    "Product deleted: {} ({}). {} product(s) left in the catalog.",
                    removed.id,
                    removed.category(),
                    catalog.len()
                ));
            }
            Ok(())
        }
        Err(CommerceError::DeletionCancelled(id)) => {
            ctx.output.info(&format!("Deletion of {} cancelled", id));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
