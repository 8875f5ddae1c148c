//! Log sinks - the base logging facilities records are emitted through.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{ContextLogError, ContextLogResult};
use crate::record::{LogRecord, Severity};

/// A base logging facility.
///
/// Sinks receive fully formed records and own everything downstream:
/// rendering, filtering, transport. Implementations must be safe for
/// concurrent emission from multiple callers.
pub trait LogSink: Send + Sync {
    /// Emit one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be rendered or written; the
    /// caller receives it unchanged.
    fn emit(&self, record: &LogRecord) -> ContextLogResult<()>;
}

/// Forwards records to the [`tracing`] macros at the matching level.
///
/// The host application's subscriber decides what happens next; this
/// crate never installs one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) -> ContextLogResult<()> {
        let context = record
            .context
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        macro_rules! forward {
            ($level:ident) => {
                match &context {
                    Some(context) => tracing::$level!(context = %context, "{}", record.message),
                    None => tracing::$level!("{}", record.message),
                }
            };
        }

        match record.severity {
            Severity::Trace => forward!(trace),
            Severity::Debug => forward!(debug),
            Severity::Info => forward!(info),
            Severity::Warn => forward!(warn),
            Severity::Error => forward!(error),
        }
        Ok(())
    }
}

/// Renders each record as one JSON line on a writer.
///
/// The writer sits behind a mutex so the sink can be shared across
/// threads; records never interleave within a line.
pub struct JsonLineSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineSink<W> {
    /// Wrap a writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl JsonLineSink<io::Stdout> {
    /// A sink writing JSON lines to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonLineSink<io::Stderr> {
    /// A sink writing JSON lines to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> LogSink for JsonLineSink<W> {
    fn emit(&self, record: &LogRecord) -> ContextLogResult<()> {
        let line = serde_json::to_string(record)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ContextLogError::SinkError("writer lock poisoned".to_string()))?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// In-memory sink that keeps every emitted record, for tests.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of records emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl LogSink for CaptureSink {
    fn emit(&self, record: &LogRecord) -> ContextLogResult<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}
