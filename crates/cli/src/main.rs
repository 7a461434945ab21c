//! eStore CLI — browse and filter the product catalog from the terminal.
//!
//! Calls `estore-core` directly: one catalog fetch per invocation, then the
//! same filter evaluation the desktop app uses.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use estore_core::card::{price_label, rating_label, ProductCard};
use estore_core::catalog::{categories, CatalogSource, HttpCatalog};
use estore_core::filter::{evaluate, parse_price_input};
use estore_core::store::FilterStore;
use estore_core::types::{FilterState, Product, StoreConfig};
use estore_core::{load_store_config, load_store_config_from};
use tracing::{debug, error, warn};

/// eStore CLI — list, filter, and inspect catalog products.
#[derive(Parser)]
#[command(name = "estore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Catalog API base URL (overrides config)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Config file (default: ./.estore.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the given filters
    List(ListArgs),
    /// Show one product's details
    Product {
        /// Product id
        id: u64,
    },
    /// List distinct categories in catalog order
    Categories,
    /// List the configured quick-filter keywords
    Keywords,
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive text matched against title and description
    #[arg(long)]
    search: Option<String>,

    /// Exact category name
    #[arg(long)]
    category: Option<String>,

    /// Inclusive lower price bound
    #[arg(long, value_parser = parse_finite_price)]
    min_price: Option<f64>,

    /// Inclusive upper price bound
    #[arg(long, value_parser = parse_finite_price)]
    max_price: Option<f64>,

    /// Quick-filter keyword matched against the title
    #[arg(long)]
    keyword: Option<String>,
}

/// Price flags accept only finite numbers, like the desktop price boxes.
fn parse_finite_price(text: &str) -> Result<f64, String> {
    parse_price_input(text).ok_or_else(|| format!("'{text}' is not a finite price"))
}

/// Build the filter store the same way the sidebar would, one setter per flag.
fn filters_from_args(args: ListArgs) -> FilterStore {
    let mut store = FilterStore::new();
    if let Some(s) = args.search {
        store.set_search_query(s);
    }
    if let Some(c) = args.category {
        store.set_selected_category(c);
    }
    store.set_min_price(args.min_price);
    store.set_max_price(args.max_price);
    if let Some(k) = args.keyword {
        store.set_keyword(k);
    }
    store
}

/// Rendered result of `estore list`.
struct ListOutput {
    stdout: String,
    stderr: String,
    exit_code: i32,
}

/// Filter `products` and render them. No match is exit status 1 in both output modes.
fn render_list(products: &[Product], state: &FilterState, json: bool) -> ListOutput {
    let matches = evaluate(products, state);
    let exit_code = if matches.is_empty() { 1 } else { 0 };

    if json {
        let items: Vec<serde_json::Value> = matches.iter().map(|p| product_json(p)).collect();
        let stdout = serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string());
        return ListOutput { stdout, stderr: String::new(), exit_code };
    }

    if matches.is_empty() {
        return ListOutput {
            stdout: String::new(),
            stderr: "No products match the current filters".to_string(),
            exit_code,
        };
    }
    let mut stdout = String::new();
    for p in &matches {
        let card = ProductCard::from_product(p);
        stdout.push_str(&format!(
            "{:>5}  {:<40} {:>16}  {}\n",
            card.id,
            card.title,
            card.price_label(),
            p.category
        ));
    }
    let stderr = format!("\n{} of {} products", matches.len(), products.len());
    ListOutput { stdout, stderr, exit_code }
}

fn resolve_config(cli: &Cli) -> StoreConfig {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                warn!(path = %path.display(), "Config file not found, using defaults");
            }
            load_store_config_from(path)
        }
        None => match std::env::current_dir() {
            Ok(cwd) => load_store_config(&cwd),
            Err(e) => {
                warn!(error = %e, "Could not determine current directory, using defaults");
                StoreConfig::default()
            }
        },
    };
    if let Some(base) = &cli.api_base {
        config.api_base = base.trim_end_matches('/').to_string();
    }
    config
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not encode output: {e}");
            std::process::exit(1);
        }
    }
}

fn product_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id,
        "title": p.title,
        "description": p.description,
        "price": p.price,
        "rating": p.rating,
        "category": p.category,
        "images": p.images,
    })
}

fn build_client(config: &StoreConfig) -> HttpCatalog {
    HttpCatalog::new(config).unwrap_or_else(|e| {
        eprintln!("Could not create HTTP client: {e}");
        std::process::exit(1);
    })
}

async fn fetch_catalog(client: &HttpCatalog) -> Vec<Product> {
    match client.fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            error!(error = %e, "Error fetching products");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("estore=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);
    debug!(api_base = config.api_base.as_str(), "Using catalog");

    match cli.command {
        Commands::List(args) => {
            let store = filters_from_args(args);
            let state = store.state();
            if state.has_inverted_range() {
                warn!(min = ?state.min_price, max = ?state.max_price, "Minimum price exceeds maximum; nothing can match");
            }

            let products = fetch_catalog(&build_client(&config)).await;
            let out = render_list(&products, state, cli.json);
            if !out.stdout.is_empty() {
                print!("{}", out.stdout);
                if cli.json {
                    println!();
                }
            }
            if !out.stderr.is_empty() {
                eprintln!("{}", out.stderr);
            }
            if out.exit_code != 0 {
                std::process::exit(out.exit_code);
            }
        }
        Commands::Product { id } => {
            let product = match build_client(&config).fetch_product(id).await {
                Ok(p) => p,
                Err(e) => {
                    error!(id, error = %e, "Error fetching product");
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            };

            if cli.json {
                print_json(&product_json(&product));
            } else {
                println!("{}", product.title);
                println!();
                println!("{}", product.description);
                println!();
                println!("{}", price_label(product.price));
                println!("Rating: {}", rating_label(product.rating));
                if !product.category.is_empty() {
                    println!("Category: {}", product.category);
                }
                if let Some(image) = product.primary_image() {
                    println!("Image: {image}");
                }
            }
        }
        Commands::Categories => {
            let products = fetch_catalog(&build_client(&config)).await;
            let cats = categories(&products);
            if cli.json {
                print_json(&serde_json::json!(cats));
            } else {
                for c in &cats {
                    println!("{c}");
                }
            }
        }
        Commands::Keywords => {
            if cli.json {
                print_json(&serde_json::json!(config.keywords));
            } else {
                for k in &config.keywords {
                    println!("{k}");
                }
            }
        }
    }
}
