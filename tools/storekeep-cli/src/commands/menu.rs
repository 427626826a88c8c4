//! Interactive numeric menu.

use anyhow::Result;

use super::{add, delete, print, save, shop, AddArgs};
use crate::context::{Context, FileCatalog};
use crate::prompt::{self, DialoguerConfirm};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    ManagerConsole,
    ShoppingCenter,
    Exit,
}

impl MainChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::ManagerConsole),
            2 => Some(Self::ShoppingCenter),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Manager console entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManagerChoice {
    Add,
    Delete,
    Print,
    Save,
    MainPage,
}

impl ManagerChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::Delete),
            3 => Some(Self::Print),
            4 => Some(Self::Save),
            5 => Some(Self::MainPage),
            _ => None,
        }
    }
}

/// Run the menu until the user exits.
pub fn run(ctx: &Context) -> Result<()> {
    let mut catalog = ctx.open_catalog();

    loop {
        ctx.output.header("Storekeep");
        ctx.output.plain("1. Manager Console");
        ctx.output.plain("2. Shopping Center");
        ctx.output.plain("3. Exit");

        match MainChoice::from_number(prompt::menu_choice(3)?) {
            Some(MainChoice::ManagerConsole) => manager_console(ctx, &mut catalog)?,
            Some(MainChoice::ShoppingCenter) => {
                if let Err(e) = shop::shop(None, ctx, &catalog) {
                    ctx.output.error(&format!("{:#}", e));
                }
            }
            Some(MainChoice::Exit) | None => break,
        }
    }

    ctx.output.info("Goodbye");
    Ok(())
}

fn manager_console(ctx: &Context, catalog: &mut FileCatalog) -> Result<()> {
    loop {
        ctx.output.header("Manager Console");
        ctx.output.plain("1. Add a new product");
        ctx.output.plain("2. Delete a product");
        ctx.output.plain("3. Print the list of products");
        ctx.output.plain("4. Save products to file");
        ctx.output.plain("5. Main page");

        let result = match ManagerChoice::from_number(prompt::menu_choice(5)?) {
            Some(ManagerChoice::Add) => add::add_product(AddArgs::default(), ctx, catalog),
            Some(ManagerChoice::Delete) => prompt::text("Product ID to delete")
                .and_then(|id| delete::delete_product(&id, ctx, catalog, &mut DialoguerConfirm)),
            Some(ManagerChoice::Print) => print::print_catalog(ctx, catalog),
            Some(ManagerChoice::Save) => save::save_catalog(ctx, catalog),
            Some(ManagerChoice::MainPage) | None => return Ok(()),
        };

        if let Err(e) = result {
            ctx.output.error(&format!("{:#}", e));
        }
    }
}
