//! Custom validation functions for configuration.

use validator::ValidationError;

use crate::devices::DeviceProfile;

/// Validate that a profile's jitter window is well-formed.
pub fn validate_jitter_bounds(profile: &DeviceProfile) -> Result<(), ValidationError> {
    if profile.jitter_min_ms > profile.jitter_max_ms {
        return Err(ValidationError::new("jitter_min_exceeds_max")
            .with_message("jitter_min_ms must not exceed jitter_max_ms".into()));
    }
    Ok(())
}
