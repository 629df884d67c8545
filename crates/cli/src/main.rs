//! Khubsurat CLI - Terminal front-end for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Show the home page grid
//! khubsurat catalog
//!
//! # Show one category, first four products
//! khubsurat catalog --category Fashion --limit 4
//!
//! # Search names, categories and descriptions
//! khubsurat search "blue"
//!
//! # Replay a scripted shopping session
//! khubsurat session demos/session.yaml
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product grid
//! - `categories` - Print the category navigation
//! - `search` - Print search results
//! - `session` - Dispatch scripted intents and print the cart and wishlist

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "khubsurat")]
#[command(author, version, about = "Khubsurat storefront in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product grid
    Catalog {
        /// Only show this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Show at most this many products
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the category navigation
    Categories,
    /// Search the catalog
    Search {
        /// Text to look for in names, categories and descriptions
        query: String,
    },
    /// Replay a YAML script of intents through a fresh session
    Session {
        /// Path to the script
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "khubsurat=info,khubsurat_storefront=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let state = commands::load_state().await?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Catalog { category, limit } => {
            commands::browse::catalog(&state, category.as_deref(), limit, &mut out)?;
        }
        Commands::Categories => commands::browse::categories(&state, &mut out)?,
        Commands::Search { query } => commands::browse::search(&state, &query, &mut out)?,
        Commands::Session { script } => {
            let mut state = state;
            commands::session::run(&mut state, &script, &mut out).await?;
        }
    }
    Ok(())
}
