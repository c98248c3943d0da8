//! # irqsim-telemetry
//!
//! Observability glue: tracing initialization and the durable audit-log sink.
//!
//! ### Components:
//! - `logging`: tracing-subscriber setup with env-filter defaults
//! - `sink`: append-only file sink for audit records, flushed per entry

pub mod logging;
pub mod sink;

pub use sink::FileAuditSink;
