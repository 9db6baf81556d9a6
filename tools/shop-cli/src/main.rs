//! Shop CLI - a terminal storefront.
//!
//! Commands:
//! - `shop products` - Search, filter and sort the catalog
//! - `shop product <id>` - Show one product with related items
//! - `shop categories` / `shop featured` - Browse shortcuts
//! - `shop cart` - Show and change the persistent cart
//! - `shop login` / `shop register` / `shop logout` / `shop whoami` - Mock sign-in
//! - `shop checkout` - Shipping, payment and order confirmation
//! - `shop admin` - Product listing and catalog figures for admins
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AdminArgs, CartArgs, CheckoutArgs, ConfigArgs, FeaturedArgs, LoginArgs, ProductArgs,
    ProductsArgs, RegisterArgs,
};
use config::LogConfig;

/// Shop CLI - Browse products, fill a cart and check out
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a search, category, price bracket and sort
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Show featured products
    Featured(FeaturedArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Sign in
    Login(LoginArgs),

    /// Create an account and sign in
    Register(RegisterArgs),

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Admin tools (admin sign-in required)
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    init_tracing(&ctx.config.log, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::catalog::run_products(args, &ctx).await,
        Commands::Product(args) => commands::catalog::run_product(args, &ctx).await,
        Commands::Categories => commands::catalog::run_categories(&ctx).await,
        Commands::Featured(args) => commands::catalog::run_featured(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Login(args) => commands::auth::login(args, &ctx).await,
        Commands::Register(args) => commands::auth::register(args, &ctx).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `--verbose` wins over RUST_LOG, which wins over the config.
fn init_tracing(log: &LogConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init only happens in tests; keep the first subscriber.
    let _ = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
