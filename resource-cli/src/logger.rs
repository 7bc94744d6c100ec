//! Logging setup
//!
//! Console logging on stderr so command output on stdout stays clean.
//! `RUST_LOG` takes precedence over the level passed on the command line.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging system (console only)
///
/// # Arguments
/// * `level` - default filter (e.g., "info", "debug", "resource_client=debug")
/// * `json_format` - JSON lines instead of the human-readable format
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false);
        subscriber.with(console_layer).try_init()?;
    }

    Ok(())
}
