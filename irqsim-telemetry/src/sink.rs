//! Append-only file sink for the audit trail.
//!
//! One line per record in the stable `<timestamp> | <device> | <outcome>`
//! format, flushed per entry so external tooling can tail the file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use irqsim_core::audit::{AuditRecord, AuditSink};

/// Durable audit log backed by an append-mode file.
pub struct FileAuditSink {
    file: File,
}

impl FileAuditSink {
    /// Opens (or creates) the log file in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self { file })
    }
}

impl AuditSink for FileAuditSink {
    fn append(&mut self, record: &AuditRecord) -> io::Result<()> {
        writeln!(self.file, "{}", record.format_line())?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irqsim_core::audit::Outcome;
    use irqsim_core::Device;

    #[test]
    fn appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");

        let mut sink = FileAuditSink::open(&path).unwrap();
        sink.append(&AuditRecord::new(Device::Keyboard, 1, Outcome::Handled))
            .unwrap();
        sink.append(&AuditRecord::new(Device::Printer, 1, Outcome::IgnoredMasked))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| Keyboard | HANDLED"));
        assert!(lines[1].ends_with("| Printer | IGNORED (MASKED)"));
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");

        {
            let mut sink = FileAuditSink::open(&path).unwrap();
            sink.append(&AuditRecord::new(Device::Mouse, 1, Outcome::Handled))
                .unwrap();
        }
        {
            let mut sink = FileAuditSink::open(&path).unwrap();
            sink.append(&AuditRecord::new(Device::Mouse, 2, Outcome::Handled))
                .unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
