//! Validation utilities.

use std::fmt::Write;

use prwatch_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config, requires_notifier: bool) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Check watched repository
    if config.repository.owner.is_empty() {
        _missing(&mut error, "PRWATCH_REPOSITORY_OWNER");
    }
    if config.repository.name.is_empty() {
        _missing(&mut error, "PRWATCH_REPOSITORY_NAME");
    }
    if config.alerts.age_threshold_hours == 0 {
        _invalid(&mut error, "PRWATCH_AGE_THRESHOLD_HOURS", "must be positive");
    }

    // Check API credentials
    if config.api.driver == ApiDriver::GitHub && config.api.github.token.is_empty() {
        _missing(&mut error, "GITHUB_TOKEN");
    }

    // Check webhook
    if requires_notifier && config.notifier.slack_webhook_url.is_empty() {
        _missing(&mut error, "SLACK_WEBHOOK_URL");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(
    config: &Config,
    requires_notifier: bool,
) -> Result<(), ValidationError> {
    validate_env_vars(config, requires_notifier)
}
