use crate::types::LogLevel;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive, e.g. `SUB_LOG=sub_runtime=trace`
pub const LOG_ENV: &str = "SUB_LOG";

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout stays usable for completions and command listings.
pub fn init(level: LogLevel) -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::new(level.to_string()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
