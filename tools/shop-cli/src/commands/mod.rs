//! CLI command implementations.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Free-text search over name, description, category and tags.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category name, or "all".
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Price bracket as "min-max" in dollars (e.g. "50-100"), or "all".
    #[arg(short, long, default_value = "all")]
    pub price: String,

    /// Sort order: featured, price-asc, price-desc or newest.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

impl Default for ProductsArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            price: "all".to_string(),
            sort: "featured".to_string(),
        }
    }
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the featured command.
#[derive(Args)]
pub struct FeaturedArgs {
    /// Show at most this many products.
    #[arg(short, long, default_value = "4")]
    pub limit: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a product's quantity (0 or less removes it).
    Update {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_hyphen_values = true)]
        qty: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email (prompted if omitted).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password (prompted if omitted).
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name (prompted if omitted).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Account email (prompted if omitted).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password (prompted if omitted).
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Place the order without the final confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List products, optionally narrowed by name, description or category.
    Products {
        /// Case-insensitive search text (tags are not searched).
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show catalog figures.
    Stats,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Show where configuration and state live.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
