//! CLI administration tool for product-catalog.
//!
//! Manages products and the product cache without going through the HTTP
//! API. Product changes are made through the catalog service against the
//! Redis cache the servers share, so they keep the same cache guarantees as
//! API requests.
//!
//! Commands that change products or cache entries refuse to run unless that
//! Redis cache is configured and reachable. A server without `REDIS_URL`
//! caches in its own memory, which no other process can update; change its
//! products through the HTTP API instead.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- product list
//! cargo run --bin admin -- product show 42
//! cargo run --bin admin -- product create --name "Laptop" --price 1200
//! cargo run --bin admin -- product update 42 --name "Laptop Pro" --price 1300
//! cargo run --bin admin -- product delete 42
//! cargo run --bin admin -- cache evict 42
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components) is required,
//! `REDIS_URL` (or `REDIS_*` components) is required for writing commands and
//! must point at the servers' cache.

use product_catalog::application::dto::ProductDto;
use product_catalog::config;
use product_catalog::server;
use product_catalog::state::PgCatalogService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rust_decimal::Decimal;
use validator::Validate;

/// CLI tool for managing product-catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Manage the product cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

impl Commands {
    /// True for commands that change products or cache entries, which must go
    /// through the cache the servers read from.
    fn writes_shared_state(&self) -> bool {
        match self {
            Commands::Product { action } => !matches!(
                action,
                ProductAction::List | ProductAction::Show { .. }
            ),
            Commands::Cache { .. } => true,
            Commands::Db { .. } => false,
        }
    }
}

/// Product management subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List,

    /// Show a single product
    Show { id: i64 },

    /// Create a product
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        price: Decimal,
    },

    /// Replace the name and price of a product
    Update {
        id: i64,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        price: Decimal,
    },

    /// Delete a product
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Evict a single product entry
    Evict { id: i64 },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    let cache = if cli.command.writes_shared_state() {
        server::connect_shared_cache(&config).await?
    } else {
        server::connect_cache(&config).await
    };
    let pool = server::connect_database(&config).await?;

    let catalog = server::build_catalog_service(pool, cache);

    match cli.command {
        Commands::Product { action } => handle_product_action(action, &catalog).await?,
        Commands::Cache { action } => handle_cache_action(action, &catalog).await?,
        Commands::Db { action } => handle_db_action(action, &catalog).await?,
    }

    Ok(())
}

/// Dispatches product management commands.
async fn handle_product_action(action: ProductAction, catalog: &PgCatalogService) -> Result<()> {
    match action {
        ProductAction::List => list_products(catalog).await?,
        ProductAction::Show { id } => {
            let product = catalog
                .get(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            print_product(&product);
        }
        ProductAction::Create { name, price } => {
            let dto = ProductDto::new(None, name, price);
            dto.validate().context("Invalid product")?;

            let product = catalog
                .create(dto)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create product: {}", e))?;

            println!("{}", "✅ Product created".green().bold());
            print_product(&product);
        }
        ProductAction::Update { id, name, price } => {
            let dto = ProductDto::new(Some(id), name, price);
            dto.validate().context("Invalid product")?;

            let product = catalog
                .update(dto)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to update product: {}", e))?;

            println!("{}", "✅ Product updated".green().bold());
            print_product(&product);
        }
        ProductAction::Delete { id, yes } => delete_product(catalog, id, yes).await?,
    }

    Ok(())
}

/// Lists all products in a table.
///
/// # Output Format
///
/// ```text
/// 📦 Products
///
///   ID     Name                           Price
///   ──────────────────────────────────────────────────
///   1      Laptop                         1200
/// ```
async fn list_products(catalog: &PgCatalogService) -> Result<()> {
    println!("{}", "📦 Products".bright_blue().bold());
    println!();

    let products = catalog
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

    if products.is_empty() {
        println!("{}", "  No products found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(50).bright_black());

    for product in &products {
        println!(
            "  {:<6} {:<30} {}",
            product
                .id
                .map(|id| id.to_string())
                .unwrap_or_default()
                .bright_black(),
            product.name.cyan(),
            product.price.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        products.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a product after confirmation (default: No).
async fn delete_product(catalog: &PgCatalogService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Product".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete product {}?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    catalog
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete product: {}", e))?;

    println!("{}", "✅ Product deleted".green().bold());
    Ok(())
}

/// Handles cache commands.
async fn handle_cache_action(action: CacheAction, catalog: &PgCatalogService) -> Result<()> {
    match action {
        CacheAction::Evict { id } => {
            catalog
                .evict_cached(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to evict cache entry: {}", e))?;

            println!(
                "{} product {} ({})",
                "✅ Evicted".green().bold(),
                id,
                catalog.cache_backend().bright_black()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, catalog: &PgCatalogService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !catalog.store_healthy().await {
                anyhow::bail!("Database query failed");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

fn print_product(product: &ProductDto) {
    println!(
        "  ID:    {}",
        product
            .id
            .map(|id| id.to_string())
            .unwrap_or_default()
            .bright_black()
    );
    println!("  Name:  {}", product.name.cyan());
    println!("  Price: {}", product.price.to_string().bright_green());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("admin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_writing_commands_need_shared_cache() {
        assert!(parse(&["product", "create", "-n", "Laptop", "-p", "1200"])
            .command
            .writes_shared_state());
        assert!(parse(&["product", "update", "1", "-n", "Laptop", "-p", "1300"])
            .command
            .writes_shared_state());
        assert!(parse(&["product", "delete", "1", "-y"])
            .command
            .writes_shared_state());
        assert!(parse(&["cache", "evict", "1"]).command.writes_shared_state());
    }

    #[test]
    fn test_reading_commands_use_any_cache() {
        assert!(!parse(&["product", "list"]).command.writes_shared_state());
        assert!(!parse(&["product", "show", "1"]).command.writes_shared_state());
        assert!(!parse(&["db", "check"]).command.writes_shared_state());
    }

    #[test]
    fn test_price_parsed_exactly() {
        let cli = parse(&["product", "create", "-n", "Server", "-p", "12345678901234.56789"]);

        let Commands::Product {
            action: ProductAction::Create { price, .. },
        } = cli.command
        else {
            panic!("expected product create");
        };
        assert_eq!(price.to_string(), "12345678901234.56789");
    }
}
