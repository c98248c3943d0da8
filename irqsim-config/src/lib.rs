//! # irqsim configuration
//!
//! Hierarchical configuration for the interrupt-dispatch simulation.
//!
//! ## Features
//! - **Unified Configuration**: one source of truth across all components
//! - **Validation**: runtime validation of every tunable
//! - **Environment Awareness**: file settings overridable via `IRQSIM_*`

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod audit;
mod controller;
mod devices;
mod error;
mod validation;

pub use audit::AuditConfig;
pub use controller::ControllerConfig;
pub use devices::{DeviceProfile, DevicesConfig};
pub use error::ConfigError;

/// Top-level configuration container for all irqsim components.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct IrqsimConfig {
    /// Dispatch-loop tunables (wait timeout, simulated ISR latency).
    #[validate(nested)]
    pub controller: ControllerConfig,

    /// Event-source timing profiles, one per device.
    #[validate(nested)]
    pub devices: DevicesConfig,

    /// Durable audit-log settings.
    #[validate(nested)]
    pub audit: AuditConfig,
}

impl IrqsimConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/irqsim.yaml` - base settings. If missing, defaults are used.
    /// 3. `IRQSIM_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(IrqsimConfig::default()));

        if Path::new("config/irqsim.yaml").exists() {
            figment = figment.merge(Yaml::file("config/irqsim.yaml"));
        }

        figment
            .merge(Env::prefixed("IRQSIM_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::from(Serialized::defaults(IrqsimConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("IRQSIM_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irqsim_core::Device;
    use std::io::Write;

    #[test]
    fn default_config_validates() {
        let config = IrqsimConfig::default();
        config.validate().expect("default config should validate");
    }

    #[test]
    fn missing_file_is_reported() {
        let result = IrqsimConfig::load_from_path("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "controller:\n  isr_latency_ms: 5\naudit:\n  log_path: /tmp/audit.log"
        )
        .unwrap();

        let config = IrqsimConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.controller.isr_latency_ms, 5);
        assert_eq!(config.audit.log_path, PathBuf::from("/tmp/audit.log"));
        // Untouched sections keep their defaults.
        assert_eq!(config.controller.dispatch_timeout_ms, 500);
        assert_eq!(config.devices.profiles.len(), Device::COUNT);
    }

    #[test]
    fn invalid_jitter_bounds_are_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "devices:\n  profiles:\n    - device: keyboard\n      base_interval_ms: 300\n      jitter_min_ms: 500\n      jitter_max_ms: 100"
        )
        .unwrap();

        let result = IrqsimConfig::load_from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
