//! Clima - current temperature of a city
//!
//! Asks for a city name and prints its current temperature.

use std::io;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clima::{App, Config};

/// Main entry point for the clima CLI.
///
/// # Startup Sequence
/// 1. Load a `.env` file if present
/// 2. Initialize tracing subscriber for logging (stderr)
/// 3. Load configuration from environment variables
/// 4. Build the resolver, fetcher and optional cache
/// 5. Prompt once, look up, print
///
/// Lookup failures are printed and the process still exits with status 0.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Defaults to "warn" so logs do not interleave with the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clima=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }

    let config = Config::from_env();
    info!(
        "Configuration loaded: geocoding_url={}, weather_url={}, language={}, cache_enabled={}",
        config.geocoding_url, config.weather_url, config.language, config.cache_enabled
    );

    let mut app = App::from_config(&config).context("failed to initialize HTTP client")?;

    app.run(io::stdin().lock(), io::stdout(), io::stderr())
        .await
        .context("failed to read city from terminal")?;

    Ok(())
}
