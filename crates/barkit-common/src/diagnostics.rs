//! Diagnostics side-channel.
//!
//! Debug instrumentation (such as the layout overflow indicator) reports
//! findings here instead of returning errors. A report never interrupts
//! layout or paint.

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Severity of a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Error,
}

/// A single advisory report.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Component that filed the report (e.g. `"ButtonBarRow"`).
    pub source: String,
    /// Severity.
    pub severity: Severity,
    /// One-line summary.
    pub summary: String,
    /// Additional explanation lines, in order.
    pub hints: Vec<String>,
}

impl Diagnostic {
    /// Create a warning-level diagnostic with no hints.
    pub fn new(source: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            severity: Severity::Warning,
            summary: summary.into(),
            hints: Vec::new(),
        }
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Append a hint line.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        for hint in &self.hints {
            write!(f, "\n{hint}")?;
        }
        Ok(())
    }
}

/// Receiver of diagnostic reports.
pub trait DiagnosticSink: Send + Sync + fmt::Debug {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that forwards reports to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let hints = diagnostic.hints.join("\n");
        match diagnostic.severity {
            Severity::Info => info!(
                source = %diagnostic.source,
                hints = %hints,
                "{}",
                diagnostic.summary
            ),
            Severity::Warning => warn!(
                source = %diagnostic.source,
                hints = %hints,
                "{}",
                diagnostic.summary
            ),
            Severity::Error => error!(
                source = %diagnostic.source,
                hints = %hints,
                "{}",
                diagnostic.summary
            ),
        }
    }
}

/// Sink that keeps every report in memory.
///
/// Clones share the same buffer, so a host can keep one handle and give
/// another to the component under inspection.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    reports: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports collected so far.
    pub fn reports(&self) -> Vec<Diagnostic> {
        match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of reports collected so far.
    pub fn len(&self) -> usize {
        match self.reports.lock() {
            Ok(reports) => reports.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all collected reports.
    pub fn clear(&self) {
        match self.reports.lock() {
            Ok(mut reports) => reports.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.reports.lock() {
            Ok(mut reports) => reports.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
