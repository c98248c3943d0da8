//! Durable audit-log settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Audit-log configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AuditConfig {
    /// Append-only text log path.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("isr_log.txt")
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
        }
    }
}
