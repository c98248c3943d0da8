//! Event-source timing profiles.
//!
//! One profile per device: base inter-arrival interval plus bounded uniform
//! jitter. The registry is data-driven so timing changes never touch dispatch
//! logic.

use serde::{Deserialize, Serialize};
use validator::Validate;

use irqsim_core::Device;

use crate::validation;

/// Event-source configuration: the device registry.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct DevicesConfig {
    /// Timing profile per device.
    #[validate(nested)]
    #[serde(default = "default_profiles")]
    pub profiles: Vec<DeviceProfile>,
}

/// Inter-arrival timing for one device's event source.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = validation::validate_jitter_bounds))]
pub struct DeviceProfile {
    /// Which device this profile drives.
    pub device: Device,

    /// Base sleep between emissions, in milliseconds.
    #[validate(range(min = 1, max = 60_000))]
    pub base_interval_ms: u64,

    /// Lower jitter bound added to the base interval, in milliseconds.
    pub jitter_min_ms: u64,

    /// Upper jitter bound, in milliseconds. Must be >= `jitter_min_ms`.
    #[validate(range(max = 60_000))]
    pub jitter_max_ms: u64,
}

impl DeviceProfile {
    fn new(device: Device, base_interval_ms: u64) -> Self {
        Self {
            device,
            base_interval_ms,
            jitter_min_ms: 100,
            jitter_max_ms: 500,
        }
    }
}

fn default_profiles() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile::new(Device::Keyboard, 300),
        DeviceProfile::new(Device::Mouse, 700),
        DeviceProfile::new(Device::Printer, 1200),
    ]
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_device() {
        let config = DevicesConfig::default();
        for device in Device::ALL {
            assert!(config.profiles.iter().any(|p| p.device == device));
        }
        config.validate().unwrap();
    }

    #[test]
    fn jitter_bounds_must_be_ordered() {
        let profile = DeviceProfile {
            jitter_min_ms: 300,
            jitter_max_ms: 100,
            ..DeviceProfile::new(Device::Mouse, 700)
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn equal_jitter_bounds_are_allowed() {
        let profile = DeviceProfile {
            jitter_min_ms: 0,
            jitter_max_ms: 0,
            ..DeviceProfile::new(Device::Printer, 1200)
        };
        profile.validate().unwrap();
    }
}
