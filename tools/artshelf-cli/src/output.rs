//! Output formatting for the CLI.

use artshelf_catalog::catalog::Product;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

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
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(spinner_style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price column: the discounted price, with the list price and deal when on
/// sale.
pub fn price_label(product: &Product) -> String {
    if product.is_on_sale() {
        format!(
            "{} (was {}, -{}%)",
            product.discounted_price(),
            product.list_price(),
            product.deal_percent()
        )
    } else {
        product.list_price().to_string()
    }
}

/// Listing columns for a product: id, card name, brand and price.
pub fn product_columns(product: &Product) -> [String; 4] {
    [
        product.id.to_string(),
        product.short_name(),
        product.brand.clone(),
        price_label(product),
    ]
}

/// Heart marker for favorited products.
pub fn favorite_marker(favorite: bool) -> String {
    if favorite {
        style("♥").red().to_string()
    } else {
        " ".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        let plain = Product::new("1", "Brush", "A", 4.0);
        assert_eq!(price_label(&plain), "$4.00");

        let sale = Product::new("2", "Easel", "A", 20.0).with_deal(0.25);
        assert_eq!(price_label(&sale), "$15.00 (was $20.00, -25%)");
    }

    #[test]
    fn test_product_columns_use_card_name() {
        let product = Product::new("7", "Watercolor Pencils", "Faber", 3.0);
        let cols = product_columns(&product);
        assert_eq!(cols[0], "7");
        assert_eq!(cols[1], "Watercolo");
        assert_eq!(cols[2], "Faber");
        assert_eq!(cols[3], "$3.00");
    }
}
