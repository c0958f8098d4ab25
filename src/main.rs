//! Mini LRU - A fixed-capacity key/value store
//!
//! Runs the interactive cache menu on stdin/stdout. Logs go to stderr.

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_lru::{Config, Menu};

/// Main entry point for the Mini LRU menu.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the menu until the user exits or input ends
fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines stay out of the menu; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_lru=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: initial_capacity={}, show_state={}, state_format={:?}",
        config.initial_capacity, config.show_state, config.state_format
    );

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), config);
    menu.run()?;

    info!("Menu closed");
    Ok(())
}
