//! Tracing subscriber setup.
//!
//! Library crates only emit `tracing` events. Binaries (and tests that want
//! to see layout traces) call [`init_logging`] once at startup.

use crate::{CommonError, Result};
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Output format for the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directive applied on top of `RUST_LOG` (e.g. `"barkit_layout=trace"`).
    pub default_directive: String,
    /// Output format.
    pub format: LogFormat,
    /// Include the event target (module path) in output.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Config with a different default directive.
    pub fn with_directive(directive: impl Into<String>) -> Self {
        Self {
            default_directive: directive.into(),
            ..Self::default()
        }
    }

    /// Build the env filter: `RUST_LOG` first, then the default directive.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let directive = self
            .default_directive
            .parse::<Directive>()
            .map_err(|e: ParseError| CommonError::InvalidFilter {
                directive: self.default_directive.clone(),
                reason: e.to_string(),
            })?;
        Ok(EnvFilter::from_default_env().add_directive(directive))
    }
}

/// Install the global subscriber.
///
/// Fails with [`CommonError::LoggingInit`] if a global subscriber is already
/// set, so callers in tests can ignore the error.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_timer(ChronoLocal::rfc_3339());

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| CommonError::LoggingInit(e.to_string()))
}
