//! The context logger adapter and its construction sources.

use std::sync::Arc;

use crate::context::LogContext;
use crate::error::ContextLogResult;
use crate::record::{LogRecord, Severity};
use crate::sink::LogSink;

/// A source to build a [`ContextLogger`] from.
///
/// Either a plain sink with no attached context, or an existing context
/// logger contributing both its root sink and its merged context. Making
/// the two cases explicit variants keeps construction a pattern match
/// instead of probing the source for optional attributes.
#[derive(Clone)]
pub enum LogSource {
    /// A root sink with no context of its own.
    Plain(Arc<dyn LogSink>),
    /// A root sink plus the context accumulated on top of it.
    Scoped {
        /// The root sink.
        base: Arc<dyn LogSink>,
        /// Context inherited by loggers built from this source.
        context: LogContext,
    },
}

impl From<Arc<dyn LogSink>> for LogSource {
    fn from(sink: Arc<dyn LogSink>) -> Self {
        Self::Plain(sink)
    }
}

impl<S: LogSink + 'static> From<Arc<S>> for LogSource {
    fn from(sink: Arc<S>) -> Self {
        Self::Plain(sink)
    }
}

impl From<&ContextLogger> for LogSource {
    fn from(logger: &ContextLogger) -> Self {
        Self::Scoped {
            base: Arc::clone(&logger.base),
            context: logger.context.clone(),
        }
    }
}

impl From<ContextLogger> for LogSource {
    fn from(logger: ContextLogger) -> Self {
        Self::Scoped {
            base: logger.base,
            context: logger.context,
        }
    }
}

/// A logger that attaches a merged context mapping to every record it
/// emits through a shared base sink.
///
/// Wrapping a `ContextLogger` in another one flattens: the new logger
/// points straight at the root sink and overlays the new context on top
/// of the inherited one, new keys winning on collision. Instances are
/// immutable after construction and safe to share across threads.
#[derive(Clone)]
pub struct ContextLogger {
    base: Arc<dyn LogSink>,
    context: LogContext,
}

impl ContextLogger {
    /// Build a logger from a source and a context mapping.
    ///
    /// For a plain sink the logger carries `context` as given. For a
    /// source that is itself a context logger, the logger points at that
    /// source's root sink and carries the source's context shallow-merged
    /// with `context`, `context` keys winning.
    #[must_use]
    pub fn new(source: impl Into<LogSource>, context: LogContext) -> Self {
        match source.into() {
            LogSource::Plain(base) => Self { base, context },
            LogSource::Scoped {
                base,
                context: inherited,
            } => Self {
                context: inherited.merged(&context),
                base,
            },
        }
    }

    /// Build a child logger overlaying `context` on this logger's own.
    #[must_use]
    pub fn child(&self, context: LogContext) -> Self {
        Self::new(self, context)
    }

    /// The fully merged context attached to every record.
    #[must_use]
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// The root sink records are emitted through.
    #[must_use]
    pub fn base(&self) -> &Arc<dyn LogSink> {
        &self.base
    }

    /// Emit a record at the given severity.
    ///
    /// The message is forwarded unmodified, with this logger's context
    /// attached; exactly one emission reaches the root sink per call,
    /// regardless of how deeply this logger was nested.
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink unchanged.
    pub fn log(&self, severity: Severity, message: impl Into<String>) -> ContextLogResult<()> {
        let record = LogRecord::new(severity, message).with_context(self.context.clone());
        self.base.emit(&record)
    }

    /// Emit at [`Severity::Trace`].
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink unchanged.
    pub fn trace(&self, message: impl Into<String>) -> ContextLogResult<()> {
        self.log(Severity::Trace, message)
    }

    /// Emit at [`Severity::Debug`].
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink unchanged.
    pub fn debug(&self, message: impl Into<String>) -> ContextLogResult<()> {
        self.log(Severity::Debug, message)
    }

    /// Emit at [`Severity::Info`].
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink unchanged.
    pub fn info(&self, message: impl Into<String>) -> ContextLogResult<()> {
        self.log(Severity::Info, message)
    }

    /// Emit at [`Severity::Warn`].
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink unchanged.
    pub fn warn(&self, message: impl Into<String>) -> ContextLogResult<()> {
        self.log(Severity::Warn, message)
    }

    /// Emit at [`Severity::Error`].
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink unchanged.
    pub fn error(&self, message: impl Into<String>) -> ContextLogResult<()> {
        self.log(Severity::Error, message)
    }
}
