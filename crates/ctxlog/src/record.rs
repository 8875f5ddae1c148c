//! Log records and severity levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::LogContext;

/// Severity of a log record, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fine-grained tracing detail.
    Trace,
    /// Diagnostic information.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that does not prevent progress.
    Warn,
    /// A failure the caller should act on.
    Error,
}

impl Severity {
    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log record, as handed to a [`LogSink`](crate::LogSink).
///
/// The `context` field is the fixed metadata key under which a
/// [`ContextLogger`](crate::ContextLogger) attaches its merged context.
/// Records emitted directly through a sink carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Record severity.
    pub severity: Severity,
    /// The message exactly as supplied by the caller.
    pub message: String,
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
    /// Merged context metadata, if emitted through a context logger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
}

impl LogRecord {
    /// Create a record with no context, stamped with the current time.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp: Utc::now(),
            context: None,
        }
    }

    /// Attach a context mapping.
    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }
}
