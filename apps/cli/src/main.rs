//! # Shopfront Shell
//!
//! Interactive storefront client for the hosted mock backend.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Startup                                          │
//! │                                                                         │
//! │  parse flags/env ──► init tracing ──► build API client                 │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                      read persisted login flag (Session::init)         │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                      rustyline loop until quit/EOF (shell::run)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod shell;
mod state;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::StoreConfig;
use crate::shell::Shell;
use crate::state::Session;

/// Storefront shell for the hosted mock backend.
#[derive(Debug, Parser)]
#[command(name = "shopfront", version, about)]
struct Args {
    /// Base URL of the mock backend.
    #[arg(long, env = "SHOPFRONT_API_URL", default_value = shopfront_api::DEFAULT_BASE_URL)]
    base_url: String,

    /// Products fetched per catalog page.
    #[arg(long, env = "SHOPFRONT_PAGE_SIZE", default_value_t = 10)]
    page_size: u32,

    /// Run without reading or writing any local files (session flag,
    /// shell history). Useful on shared machines.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG controls verbosity, warnings by default
    // so log lines don't interleave with shell output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = StoreConfig::new(&args.base_url, args.page_size);
    info!(base_url = %config.base_url, "starting shopfront shell");

    let client = shopfront_api::Client::with_base_url(&config.base_url)?;

    // Session start: read the persisted login flag (the only local state).
    let data_dir = if args.ephemeral {
        None
    } else {
        config::data_dir()
    };
    let session = Session::init(data_dir.as_deref());

    Shell::new(config, client, session, data_dir)?.run().await
}
