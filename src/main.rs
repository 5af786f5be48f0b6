//! countfeed: a deliberately small TCP server with selectable behavior.
//!
//! One fixed endpoint (127.0.0.1:4000), one client at a time, and three
//! service modes:
//! - `echo`: send bytes, get the same bytes back
//! - `feed`: numbered `Data Count` lines pushed until the client leaves
//! - `command`: GET/QUIT requests against a per-connection counter
//!
//! Configuration via CLI arguments or TOML file.

mod config;
mod protocols;
mod runtime;
mod server;

use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(mode = ?config.mode, "Starting countfeed server");

    // Single-threaded runtime; sessions run strictly one at a time.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(server::run(config))?;

    Ok(())
}
