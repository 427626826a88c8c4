//! Output formatting for the CLI.

use console::style;
use storekeep_commerce::catalog::Product;

/// Column widths for product tables.
pub const PRODUCT_COLUMNS: [usize; 6] = [10, 24, 12, 8, 10, 20];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print plain text as-is.
    pub fn plain(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print the product table header.
    pub fn product_header(&self) {
        if self.json {
            return;
        }
        let header = format_row(
            &["ID", "Name", "Category", "Stock", "Price", "Info"],
            &PRODUCT_COLUMNS,
        );
        println!("  {}", style(header).bold());
    }

    /// Print one product as a table row, highlighting low stock.
    pub fn product_row(&self, product: &Product, low_stock_threshold: u32) {
        if self.json {
            return;
        }
        let quantity = product.quantity_available.to_string();
        let price = product.price.display_amount();
        let info = product.info();
        let row = format_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category().as_str(),
                &quantity,
                &price,
                &info,
            ],
            &PRODUCT_COLUMNS,
        );
        if product.is_low_stock_at(low_stock_threshold) {
            println!("  {}", style(row).red());
        } else {
            println!("  {}", row);
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

/// Stock badge for a product's availability.
pub fn stock_badge(quantity: u32, low_stock_threshold: u32) -> String {
    if quantity == 0 {
        style("out of stock").red().to_string()
    } else if quantity < low_stock_threshold {
        style(format!("{} left", quantity)).yellow().to_string()
    } else {
        style("in stock").green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["a", "bb"], &[3, 3]), "a    bb");
    }

    #[test]
    fn test_stock_badge_text() {
        console::set_colors_enabled(false);
        assert_eq!(stock_badge(0, 3), "out of stock");
        assert_eq!(stock_badge(2, 3), "2 left");
        assert_eq!(stock_badge(3, 3), "in stock");
    }
}
