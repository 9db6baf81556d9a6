//! Output formatting for the CLI.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use shop_commerce::catalog::{Product, StockStatus};
use shop_commerce::Money;

/// Terminal output for commands.
///
/// In JSON mode every human-facing line is suppressed so stdout carries only
/// the JSON document; errors still go to stderr as `{"error": ...}`.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn line(&self, text: impl std::fmt::Display) {
        if !self.json {
            println!("{}", text);
        }
    }

    fn note(&self, text: impl std::fmt::Display) {
        if !self.json {
            eprintln!("{}", text);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(format_args!("{} {}", style("ℹ").cyan(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.line(format_args!("{} {}", style("✓").green().bold(), msg));
    }

    /// Warnings go to stderr.
    pub fn warn(&self, msg: &str) {
        self.note(format_args!("{} {}", style("!").yellow().bold(), style(msg).yellow()));
    }

    /// Errors go to stderr, as a JSON object in JSON mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red().bold(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.note(style(format!("· {}", msg)).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        self.line(format_args!("\n{}", style(msg).bold().underlined()));
    }

    /// A numbered step such as `[2/3] Payment`.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        self.line(format_args!(
            "{} {}",
            style(format!("[{}/{}]", num, total)).cyan(),
            style(msg).bold()
        ));
    }

    pub fn blank(&self) {
        self.line("");
    }

    /// Pretty JSON to stdout, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{}", text),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.line(format_args!("  {:<18} {}", style(format!("{}:", key)).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.line(format_args!("  - {}", item));
    }

    pub fn table_header(&self, cols: &[&str], widths: &[usize]) {
        self.line(format_args!("  {}", style(pad_columns(cols, widths)).bold()));
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        self.line(format_args!("  {}", pad_columns(cols, widths)));
    }

    /// Spinner for a wait of unknown length; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        let pb = if self.json {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn pad_columns(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths)
        .map(|(col, &width)| format!("{:<width$}", col))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Price label showing the sale price next to the list price.
pub fn price_label(product: &Product) -> String {
    match product.discount_price {
        Some(sale) => format!(
            "{} {}",
            style(sale.display()).green(),
            style(format!("was {}", product.price.display())).dim()
        ),
        None => product.price.display(),
    }
}

/// Plain price text, for fixed-width tables.
pub fn price_text(product: &Product) -> String {
    match product.discount_price {
        Some(sale) => format!("{} (was {})", sale.display(), product.price.display()),
        None => product.price.display(),
    }
}

/// Colored availability badge.
pub fn stock_badge(status: StockStatus) -> String {
    let text = status.to_string();
    match status {
        StockStatus::InStock => style(text).green().to_string(),
        StockStatus::LowStock(_) => style(text).yellow().to_string(),
        StockStatus::OutOfStock => style(text).red().to_string(),
    }
}

/// Star rating, e.g. "★★★★☆ 4.4".
pub fn rating_stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

/// The amount, or "Free" when it is zero.
pub fn money_or_free(amount: Money) -> String {
    if amount.is_zero() {
        "Free".to_string()
    } else {
        amount.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::catalog::Catalog;

    #[test]
    fn test_price_text() {
        let catalog = Catalog::seed();
        assert_eq!(price_text(catalog.get("1").unwrap()), "$199.99 (was $249.99)");
        assert_eq!(price_text(catalog.get("2").unwrap()), "$299.99");
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.4), "★★★★☆ 4.4");
        assert_eq!(rating_stars(4.8), "★★★★★ 4.8");
    }

    #[test]
    fn test_pad_columns() {
        assert_eq!(pad_columns(&["1", "Mug", "$5.00"], &[3, 5, 6]), "1    Mug    $5.00 ");
    }

    #[test]
    fn test_money_or_free() {
        assert_eq!(money_or_free(Money::zero()), "Free");
        assert_eq!(money_or_free(Money::new(499)), "$4.99");
    }
}
