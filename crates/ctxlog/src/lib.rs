//! Nestable context-scoped logging.
//!
//! This crate provides:
//! - [`ContextLogger`], an adapter that attaches a merged key/value
//!   context to every record it emits
//! - [`LogContext`], the mapping itself, composed by shallow merge with
//!   child keys winning on collision
//! - [`LogSink`], the trait for the base logging facility, with tracing,
//!   JSON line, and in-memory capture implementations
//!
//! Wrapping a [`ContextLogger`] in another one never chains adapters: the
//! child points straight at the root sink and carries the fully merged
//! context, so emission cost and behavior are independent of nesting
//! depth.
//!
//! # Example
//!
//! ```rust
//! use ctxlog::{CaptureSink, ContextLogger, context};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), ctxlog::ContextLogError> {
//! let sink = Arc::new(CaptureSink::new());
//!
//! let request = ContextLogger::new(sink.clone(), context! { "request_id" => "r-17" });
//! let handler = request.child(context! { "handler" => "checkout" });
//!
//! handler.info("starting checkout")?;
//!
//! let records = sink.records();
//! assert_eq!(records[0].context.as_ref().unwrap().len(), 2);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

mod context;
mod error;
mod logger;
mod record;
mod sink;

pub use context::LogContext;
pub use error::{ContextLogError, ContextLogResult};
pub use logger::{ContextLogger, LogSource};
pub use record::{LogRecord, Severity};
pub use sink::{CaptureSink, JsonLineSink, LogSink, TracingSink};
