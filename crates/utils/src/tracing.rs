//! Logging setup shared by binaries and tests embedding the volume manager

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use volman_core::{DEFAULT_LOG_FILTER, VOLMAN_LOG_VAR};

pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// The filter is read from `VOLMAN_LOG`, then `RUST_LOG`, falling back to
/// `info`. Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let directives = std::env::var(VOLMAN_LOG_VAR)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    init_with_filter(&directives)
}

/// Initialize the tracing system with explicit filter directives
pub fn init_with_filter(
    directives: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_new(directives).or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_names(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Create a span scoping log lines to a single volume
pub fn volume_span(volume: &str) -> Span {
    span!(Level::DEBUG, "volume", volume = %volume)
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
