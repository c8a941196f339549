use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// Stdout is reserved for the URL and response body, so log lines never go
/// there. Quiet by default; `RUST_LOG` raises the level.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!("logging initialized");
    Ok(())
}
