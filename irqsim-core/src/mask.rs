//! Per-device suppression flags.
//!
//! Read on the hot dispatch path, written rarely from the control thread, so
//! each entry is an independent atomic instead of sharing the queue lock.
//! Staleness by one dispatch decision is tolerable; mask state never needs to
//! be consistent with queue state atomically.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::device::Device;

/// One suppression flag per known device, always fully populated.
#[derive(Debug, Default)]
pub struct MaskTable {
    flags: [AtomicBool; Device::COUNT],
}

impl MaskTable {
    /// All devices start unmasked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears a device's flag. Idempotent.
    pub fn set(&self, device: Device, masked: bool) {
        self.flags[device.index()].store(masked, Ordering::Release);
    }

    /// Point-in-time read of a device's flag.
    #[inline]
    pub fn is_masked(&self, device: Device) -> bool {
        self.flags[device.index()].load(Ordering::Acquire)
    }

    /// Snapshot of every device's flag, in priority order.
    pub fn snapshot(&self) -> Vec<(Device, bool)> {
        Device::ALL
            .iter()
            .map(|&device| (device, self.is_masked(device)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_populated_and_unmasked() {
        let table = MaskTable::new();
        for device in Device::ALL {
            assert!(!table.is_masked(device));
        }
    }

    #[test]
    fn set_is_idempotent() {
        let table = MaskTable::new();
        table.set(Device::Keyboard, true);
        table.set(Device::Keyboard, true);
        assert!(table.is_masked(Device::Keyboard));

        table.set(Device::Keyboard, false);
        table.set(Device::Keyboard, false);
        assert!(!table.is_masked(Device::Keyboard));
    }

    #[test]
    fn masking_one_device_leaves_others_alone() {
        let table = MaskTable::new();
        table.set(Device::Printer, true);
        assert!(table.is_masked(Device::Printer));
        assert!(!table.is_masked(Device::Keyboard));
        assert!(!table.is_masked(Device::Mouse));
    }

    #[test]
    fn snapshot_lists_every_device() {
        let table = MaskTable::new();
        table.set(Device::Mouse, true);
        let snapshot = table.snapshot();
        assert_eq!(snapshot.len(), Device::COUNT);
        assert!(snapshot.contains(&(Device::Mouse, true)));
        assert!(snapshot.contains(&(Device::Keyboard, false)));
    }
}
