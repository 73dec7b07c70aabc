//! Configuration validation.

use crate::schema::Config;

const ALGORITHMS: [&str; 3] = ["sha256", "sha-256", "md5"];
const BACKENDS: [&str; 3] = ["memory", "file", "sqlite"];
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_tenant(config, &mut result);
        Self::validate_identity(config, &mut result);
        Self::validate_store(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_tenant(config: &Config, result: &mut ValidationResult) {
        match config.tenant.id.as_deref() {
            Some(id) if id.trim().is_empty() => {
                result.add_error(ValidationError::new("tenant.id", "Tenant id cannot be blank"));
            }
            None => {
                result.add_warning(ValidationWarning::new(
                    "tenant.id",
                    "No default tenant, every command must pass --tenant",
                ));
            }
            Some(_) => {}
        }
    }

    fn validate_identity(config: &Config, result: &mut ValidationResult) {
        let algorithm = config.identity.algorithm.to_ascii_lowercase();
        if !ALGORITHMS.contains(&algorithm.as_str()) {
            result.add_error(ValidationError::new(
                "identity.algorithm",
                format!(
                    "Unknown digest algorithm '{}', valid values: {:?}",
                    config.identity.algorithm, ALGORITHMS
                ),
            ));
        }
    }

    fn validate_store(config: &Config, result: &mut ValidationResult) {
        if !BACKENDS.contains(&config.store.backend.as_str()) {
            result.add_error(ValidationError::new(
                "store.backend",
                format!(
                    "Unknown store backend '{}', valid values: {:?}",
                    config.store.backend, BACKENDS
                ),
            ));
            return;
        }

        if config.store.backend != "memory" && config.store.path.as_os_str().is_empty() {
            result.add_error(ValidationError::new(
                "store.path",
                "A path is required for persistent backends",
            ));
        }

        if config.store.backend == "memory" {
            result.add_warning(ValidationWarning::new(
                "store.backend",
                "Memory store loses all definitions when the process exits",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "'{}' is not a plain level, it will be used as a filter directive",
                    config.logging.level
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
