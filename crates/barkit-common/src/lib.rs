//! # BarKit Common
//!
//! Shared plumbing for the BarKit crates:
//!
//! - [`logging`]: `tracing` subscriber setup for binaries and tests
//! - [`diagnostics`]: side-channel for advisory reports (layout overflow and
//!   similar debug findings) that must never abort a frame

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, Severity, TracingSink};
pub use logging::{init_logging, LogConfig, LogFormat};

use thiserror::Error;

/// Errors for the shared BarKit plumbing.
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),

    #[error("Invalid log filter directive '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },
}

/// Result alias for [`CommonError`].
pub type Result<T> = std::result::Result<T, CommonError>;
