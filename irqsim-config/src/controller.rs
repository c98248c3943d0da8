//! Dispatch-loop tunables.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Controller configuration parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ControllerConfig {
    /// Upper bound on one dispatch-loop wait, in milliseconds. Keeps the loop
    /// responsive to shutdown when no events arrive.
    #[serde(default = "default_dispatch_timeout_ms")]
    #[validate(range(min = 10, max = 10_000))]
    pub dispatch_timeout_ms: u64,

    /// Fixed latency simulating ISR execution, in milliseconds.
    #[serde(default = "default_isr_latency_ms")]
    #[validate(range(max = 5_000))]
    pub isr_latency_ms: u64,
}

fn default_dispatch_timeout_ms() -> u64 {
    500
}

fn default_isr_latency_ms() -> u64 {
    150
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            dispatch_timeout_ms: default_dispatch_timeout_ms(),
            isr_latency_ms: default_isr_latency_ms(),
        }
    }
}
