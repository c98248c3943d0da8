//! Audit trail types and the durable sink contract.
//!
//! Every dispatched event produces exactly one [`AuditRecord`]. The in-memory
//! history lives in the controller; mirroring each record to a durable sink
//! is best-effort and must never stall dispatch.

use chrono::{DateTime, Local};
use std::fmt;
use std::io;

use crate::device::Device;

/// Timestamp layout shared by audit lines; stable for external tailing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Dispatch outcome for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    IgnoredMasked,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Handled => f.write_str("HANDLED"),
            Outcome::IgnoredMasked => f.write_str("IGNORED (MASKED)"),
        }
    }
}

/// One entry in the append-only audit history.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub timestamp: DateTime<Local>,
    pub device: Device,
    pub sequence: u64,
    pub outcome: Outcome,
}

impl AuditRecord {
    /// Stamps a record with the current wall-clock time.
    pub fn new(device: Device, sequence: u64, outcome: Outcome) -> Self {
        Self {
            timestamp: Local::now(),
            device,
            sequence,
            outcome,
        }
    }

    /// The stable line format: `<timestamp> | <device name> | <outcome>`.
    pub fn format_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.device,
            self.outcome
        )
    }
}

/// Append-only destination for audit records.
///
/// Implementations flush per entry so external tooling can tail the output.
/// Failures are reported to the caller, which logs and keeps dispatching.
pub trait AuditSink: Send {
    fn append(&mut self, record: &AuditRecord) -> io::Result<()>;
}

/// Sink that discards every record. Useful in tests and headless runs that
/// only care about the in-memory history.
#[derive(Debug, Default)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn append(&mut self, _record: &AuditRecord) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format_is_stable() {
        let record = AuditRecord::new(Device::Printer, 3, Outcome::IgnoredMasked);
        let line = record.format_line();
        let fields: Vec<&str> = line.split(" | ").collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], "Printer");
        assert_eq!(fields[2], "IGNORED (MASKED)");
    }

    #[test]
    fn outcomes_render_verbatim() {
        assert_eq!(Outcome::Handled.to_string(), "HANDLED");
        assert_eq!(Outcome::IgnoredMasked.to_string(), "IGNORED (MASKED)");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        let record = AuditRecord::new(Device::Keyboard, 1, Outcome::Handled);
        assert!(sink.append(&record).is_ok());
    }
}
