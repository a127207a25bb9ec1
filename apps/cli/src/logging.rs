//! Logging initialization for the vsgen binary
//!
//! Logs always go to stderr: stdout carries the ValueSet when no
//! `--output` is given. `RUST_LOG` overrides the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber, either human-readable or JSON lines
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    let env_filter = build_env_filter(level);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json {
        let layer = fmt::layer()
            .json()
            .with_current_span(true) // Include span fields
            .with_span_list(false)
            .with_writer(std::io::stderr);
        subscriber
            .with(layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install JSON logger: {e}"))?;
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr);
        subscriber
            .with(layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    }

    tracing::debug!(level, json, "Logging initialized");
    Ok(())
}

/// Build environment filter
fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Binary and both library crates share the configured level
        EnvFilter::new(format!(
            "vsgen={level},vsgen_convert={level},vsgen_models={level}"
        ))
    })
}
