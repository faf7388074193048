//! Pokedex - an interactive PokeAPI client
//!
//! Reads commands from stdin; logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, ExpiringCache, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the expiring cache (starts its reaper)
/// 4. Create the API client around the cache
/// 5. Run the command loop until `exit` or EOF
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs do not interleave with the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        base_url = %config.base_url,
        cache_interval = config.cache_interval,
        page_size = config.page_size,
        "Configuration loaded"
    );

    let cache = Arc::new(
        ExpiringCache::new(config.cache_interval()).context("failed to create response cache")?,
    );
    let client = PokeApiClient::new(cache, config.base_url.clone())
        .context("failed to create HTTP client")?;

    let mut session = Session::new(client, config.page_size);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    session
        .run(stdin, &mut stdout)
        .await
        .context("terminal I/O failed")?;

    info!("Pokedex closed");
    Ok(())
}
