//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::list::ListOptions;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "List blog and portfolio content newest first, featured-only or by page", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a collection newest first
    #[command(alias = "ls")]
    List {
        /// Collection to list (posts, projects, ...)
        #[arg(default_value = "posts")]
        collection: String,

        /// Show only this 1-based page, using the collection's page size
        #[arg(short, long)]
        page: Option<usize>,

        /// Only featured entries
        #[arg(short, long)]
        featured: bool,

        /// Include drafts
        #[arg(long)]
        drafts: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the collections in the content directory
    Collections,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            collection,
            page,
            featured,
            drafts,
            json,
        } => {
            let folio = folio::Folio::new(&base_dir)?;
            let options = ListOptions {
                collection,
                page,
                featured,
                drafts,
                json,
            };
            folio.list(&options)?;
        }

        Commands::Collections => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::collections::run(&folio)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
