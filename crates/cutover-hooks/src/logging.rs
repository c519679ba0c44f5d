//! Tracing subscriber setup shared by the binaries.

use cutover_common::config::LogFormat;
use cutover_common::constants::DEFAULT_LOG_FILTER;
use cutover_common::error::{CutoverError, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Output goes to
/// stderr so that stdout stays free for hook results.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(format: LogFormat, ansi: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| CutoverError::Config {
        message: format!("failed to install tracing subscriber: {e}"),
    })
}

