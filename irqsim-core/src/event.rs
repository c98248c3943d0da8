//! Immutable interrupt events.

use chrono::{DateTime, Local};

use crate::device::Device;

/// A single raised interrupt.
///
/// Sequence numbers are per-device and monotonically increasing; the pair
/// `(device, sequence)` is globally unique. Events are never mutated after
/// creation and are dispatched at most once.
#[derive(Debug, Clone)]
pub struct InterruptEvent {
    pub device: Device,
    pub sequence: u64,
    pub created_at: DateTime<Local>,
}

impl InterruptEvent {
    /// Fabricates an event stamped with the current wall-clock time.
    pub fn new(device: Device, sequence: u64) -> Self {
        Self {
            device,
            sequence,
            created_at: Local::now(),
        }
    }
}
