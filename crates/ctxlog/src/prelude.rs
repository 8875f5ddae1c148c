//! Prelude module - commonly used types for convenient import.
//!
//! Use `use ctxlog::prelude::*;` to import all essential types.

// Errors
pub use crate::{ContextLogError, ContextLogResult};

// Context and records
pub use crate::{LogContext, LogRecord, Severity};

// The adapter and its construction sources
pub use crate::{ContextLogger, LogSource};

// Sinks
pub use crate::{CaptureSink, JsonLineSink, LogSink, TracingSink};
