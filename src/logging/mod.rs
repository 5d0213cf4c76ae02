//! Structured logging setup and ndjson tick records.

mod format;

pub use format::{StructuredLogger, TickRecord};
