//! Tracing subscriber setup.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// An error raised while setting up a binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// A global subscriber is already installed.
    #[error("Failed to initialize the tracing subscriber: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}

/// Maps a `-v` count to a level. `0` disables logging.
pub const fn verbosity_level(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::ERROR),
        2 => Some(Level::WARN),
        3 => Some(Level::INFO),
        4 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Installs a global fmt subscriber.
///
/// Without an explicit `env_filter` the filter is read from `RUST_LOG`. The verbosity level is
/// added on top as the default directive.
pub fn init_tracing_subscriber(
    verbosity: u8,
    env_filter: Option<impl Into<EnvFilter>>,
) -> Result<(), CliError> {
    let filter = env_filter.map(Into::into).unwrap_or_else(EnvFilter::from_default_env);
    let filter = match verbosity_level(verbosity) {
        Some(level) => filter.add_directive(level.into()),
        None => filter.add_directive(tracing::level_filters::LevelFilter::OFF.into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}
