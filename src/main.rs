//! paapi-search - Amazon Product Advertising API 5.0 search CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use paapi_search::commands::SearchCommand;
use paapi_search::config::{Config, OutputFormat};
use paapi_search::paapi::request::SORT_KEYS;
use paapi_search::{Marketplace, SearchQuery};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "paapi-search",
    version,
    about = "Amazon Product Advertising API 5.0 product search CLI",
    long_about = "Searches the Amazon product catalog through the signed Product Advertising API \
                  and prints normalized results."
)]
struct Cli {
    /// Marketplace to search (overrides the config file)
    #[arg(short, long, global = true, env = "PAAPI_MARKETPLACE")]
    marketplace: Option<Marketplace>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    #[command(alias = "s")]
    Search {
        /// Search keywords
        keywords: String,

        /// Search index (category) filter
        #[arg(long)]
        category: Option<String>,

        /// Minimum price filter in major currency units
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price filter in major currency units
        #[arg(long)]
        max_price: Option<f64>,

        /// Sort key (e.g. Featured, Price:LowToHigh)
        #[arg(long)]
        sort: Option<String>,
    },

    /// List supported marketplaces
    Marketplaces,
}

/// Caller-facing query validation; the search client itself does not
/// re-validate these invariants.
fn validate_query(query: &SearchQuery) -> Result<()> {
    if query.keywords.trim().is_empty() {
        anyhow::bail!("Keywords must not be empty");
    }

    for (name, price) in [("--min-price", query.min_price), ("--max-price", query.max_price)] {
        if let Some(value) = price {
            if value < 0.0 {
                anyhow::bail!("{} must not be negative", name);
            }
        }
    }

    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if min > max {
            anyhow::bail!("--min-price must not exceed --max-price");
        }
    }

    if let Some(sort) = &query.sort_by {
        if !SORT_KEYS.contains(&sort.as_str()) {
            anyhow::bail!("Unknown sort key '{}'. Valid keys: {}", sort, SORT_KEYS.join(", "));
        }
    }

    Ok(())
}

/// Flags that were not supplied leave the loaded config untouched.
fn apply_cli_overrides(
    mut config: Config,
    marketplace: Option<Marketplace>,
    format: Option<OutputFormat>,
) -> Config {
    if let Some(marketplace) = marketplace {
        config.marketplace = marketplace;
    }
    if let Some(format) = format {
        config.format = format;
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let config = Config::load(cli.config.as_deref())?.with_env();
    let config = apply_cli_overrides(config, cli.marketplace, cli.format);

    match cli.command {
        Commands::Search { keywords, category, min_price, max_price, sort } => {
            let query = SearchQuery { keywords, category, min_price, max_price, sort_by: sort };

            validate_query(&query)?;
            config.ensure_credentials()?;

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query).await?;
            println!("{}", output);
        }

        Commands::Marketplaces => {
            println!("Supported marketplaces:\n");
            println!("{:<6} {:<30} {:<12}", "Code", "Endpoint host", "Region");
            println!("{:-<6} {:-<30} {:-<12}", "", "", "");

            for marketplace in Marketplace::all() {
                println!(
                    "{:<6} {:<30} {:<12}",
                    marketplace.to_string(),
                    marketplace.host(),
                    marketplace.region()
                );
            }
        }
    }

    Ok(())
}
