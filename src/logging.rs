//! Diagnostic logging setup.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a stderr subscriber filtered by `filter` (`EnvFilter` syntax).
///
/// Stdout is reserved for prompts and the task table.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
