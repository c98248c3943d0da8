//! Configuration error reporting.

use std::path::PathBuf;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Failure to load or validate the simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// One or more tunables are out of range or inconsistent.
    #[error("invalid configuration:\n{}", format_validation_errors(.0))]
    Validation(#[source] ValidationErrors),

    /// The file or environment could not be parsed into the config schema.
    #[error("configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}

/// Renders every violation with its dotted path. Descends into nested
/// sections and the profile list, so schema-level errors (such as an
/// inverted jitter window) are reported alongside field-level ones.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut output = String::new();
    append_errors(&mut output, "", errors);
    output
}

fn append_errors(output: &mut String, path: &str, errors: &ValidationErrors) {
    use std::fmt::Write;

    for (field, kind) in errors.errors() {
        let field = field.to_string();
        // Schema-level violations carry no field of their own; report them
        // at the enclosing struct's path.
        let location = if field == "__all__" {
            path.to_string()
        } else if path.is_empty() {
            field
        } else {
            format!("{path}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = match &violation.message {
                        Some(message) => message.to_string(),
                        None => violation.code.to_string(),
                    };
                    let _ = writeln!(output, "  {location}: {message}");
                }
            }
            ValidationErrorsKind::Struct(nested) => append_errors(output, &location, nested),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    append_errors(output, &format!("{location}[{index}]"), nested);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IrqsimConfig;
    use validator::Validate;

    #[test]
    fn renders_field_violations_with_their_path() {
        let mut config = IrqsimConfig::default();
        config.controller.dispatch_timeout_ms = 0;

        let rendered = ConfigError::from(config.validate().unwrap_err()).to_string();
        assert!(
            rendered.contains("controller.dispatch_timeout_ms"),
            "missing field path in: {rendered}"
        );
    }

    #[test]
    fn renders_schema_violations_inside_the_profile_list() {
        let mut config = IrqsimConfig::default();
        config.devices.profiles[0].jitter_min_ms = 900;
        config.devices.profiles[0].jitter_max_ms = 100;

        let rendered = ConfigError::from(config.validate().unwrap_err()).to_string();
        assert!(
            rendered.contains("jitter_min_ms must not exceed jitter_max_ms"),
            "missing violation message in: {rendered}"
        );
        assert!(
            rendered.contains("devices.profiles[0]"),
            "missing list path in: {rendered}"
        );
    }
}
