//! Logging setup for the embedding process.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Filter comes from `RUST_LOG`,
/// with a quiet default for everything outside this workspace. Fails if
/// a subscriber is already installed.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "lenta=debug".into()),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
