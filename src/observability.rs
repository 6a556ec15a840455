//! Tracing initialization for the cavy binary.
//!
//! Logs go to stderr so that stdout only carries command output (tag names,
//! JSON). `CAVY_LOG` takes precedence over the configured level.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "CAVY_LOG";

/// Verbosity requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only warnings and errors
    Quiet,
    /// The configured level
    #[default]
    Normal,
    /// Debug output from cavy itself
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

/// Filter directive used when `CAVY_LOG` is not set
pub fn filter_directive(config: &LoggingConfig, verbosity: Verbosity) -> String {
    match verbosity {
        Verbosity::Quiet => "warn".to_string(),
        Verbosity::Verbose => "cavy=debug".to_string(),
        Verbosity::Normal => config.level.clone(),
    }
}

/// Initialize tracing. Call once at process startup; later calls are no-ops.
pub fn init_tracing(config: &LoggingConfig, verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbosity)));

    let _ = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };
}
