//! CLI Adapter.

mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::app::api;
use crate::domain::{AppError, CatalogClientConfig, FilterCriteria};

#[derive(Parser)]
#[command(name = "polyprice")]
#[command(version)]
#[command(about = "Browse live polymer prices and manage favorite grades", long_about = None)]
struct Cli {
    /// Path to a polyprice.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Catalog service base URL (overrides config and POLYPRICE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Log requests and state changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List prices matching the given filters
    #[clap(visible_alias = "ls")]
    List {
        /// Case-insensitive substring of the product name
        #[arg(short, long, default_value = "")]
        search: String,
        /// Case-insensitive substring of location
        #[arg(short, long, default_value = "")]
        location: String,
        /// Product prefix, e.g. PP or HD
        #[arg(short = 't', long = "type", default_value = "")]
        polymer_type: String,
        /// Only show favorited products
        #[arg(short, long)]
        favorites: bool,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a product in the favorites set
    #[clap(visible_alias = "fav")]
    Favorite {
        /// Product name, e.g. "PP RAFFIA"
        product: String,
    },
    /// List known delivery locations
    Locations,
    /// List known polymer type prefixes
    Types,
    /// Show recent price history for a product
    History {
        product: String,
    },
    /// Show catalog service status
    Status,
}

/// Entry point for the CLI.
pub async fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match api::load_config(cli.config.as_deref(), cli.api_url.as_deref()) {
        Ok(config) => execute(cli.command, &config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

async fn execute(command: Commands, config: &CatalogClientConfig) -> Result<(), AppError> {
    match command {
        Commands::List { search, location, polymer_type, favorites, json } => {
            let criteria = FilterCriteria::new()
                .with_search_query(search)
                .with_location(location)
                .with_polymer_type_prefix(polymer_type)
                .with_favorites_only(favorites);
            run_list(config, criteria, json).await
        }
        Commands::Favorite { product } => run_favorite(config, &product).await,
        Commands::Locations => {
            let mut session = api::session(config)?;
            session.reload_locations().await;
            print!("{}", render::names(session.snapshot().locations(), "No locations available"));
            Ok(())
        }
        Commands::Types => {
            let mut session = api::session(config)?;
            session.reload_polymer_types().await;
            print!(
                "{}",
                render::names(session.snapshot().polymer_types(), "No polymer types available")
            );
            Ok(())
        }
        Commands::History { product } => {
            let history = api::price_history(config, &product).await?;
            print!("{}", render::history(&history));
            Ok(())
        }
        Commands::Status => {
            let status = api::service_status(config).await?;
            println!("{} ({})", status.message, status.status);
            Ok(())
        }
    }
}

async fn run_list(
    config: &CatalogClientConfig,
    criteria: FilterCriteria,
    json: bool,
) -> Result<(), AppError> {
    let mut session = api::open_session(config).await?;
    session.set_criteria(criteria);

    if json {
        let body = serde_json::to_string_pretty(session.view()).map_err(std::io::Error::from)?;
        println!("{}", body);
    } else {
        print!("{}", render::view(session.view(), session.criteria()));
    }
    Ok(())
}

async fn run_favorite(config: &CatalogClientConfig, product: &str) -> Result<(), AppError> {
    let mut session = api::session(config)?;
    session.reload_favorites().await;

    let was_favorite = session.snapshot().is_favorite(product);
    let toggle = session.toggle_favorite(product).await;
    if toggle.state.is_favorite() == was_favorite {
        eprintln!("⚠️  {} unchanged: the catalog service rejected the change", toggle.product);
        return Ok(());
    }
    if toggle.state.is_favorite() {
        println!("★ Added {} to favorites", toggle.product);
    } else {
        println!("☆ Removed {} from favorites", toggle.product);
    }
    if !toggle.remote_synced {
        eprintln!("⚠️  The catalog service did not confirm this change");
    }
    Ok(())
}
