//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AlertsConfig {
    /// Minimum pull request age (in hours) before it gets checked.
    pub age_threshold_hours: u64,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Slack incoming webhook URL.
    pub slack_webhook_url: String,
    /// Webhook connect timeout (in milliseconds).
    pub connect_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Watcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Watched repository.
    pub repository: RepositoryConfig,
    /// Alert options.
    pub alerts: AlertsConfig,
    /// API options.
    pub api: ApiConfig,
    /// Notifier options.
    pub notifier: NotifierConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            repository: RepositoryConfig {
                owner: env_to_str("PRWATCH_REPOSITORY_OWNER", "openai"),
                name: env_to_str("PRWATCH_REPOSITORY_NAME", "openai-python"),
            },
            alerts: AlertsConfig {
                age_threshold_hours: env_to_u64("PRWATCH_AGE_THRESHOLD_HOURS", 12),
            },
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("PRWATCH_API_DRIVER", "github"))
                    .unwrap_or_default(),
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("PRWATCH_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("PRWATCH_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("GITHUB_TOKEN", ""),
                },
            },
            notifier: NotifierConfig {
                slack_webhook_url: env_to_str("SLACK_WEBHOOK_URL", ""),
                connect_timeout: env_to_u64("PRWATCH_NOTIFIER_CONNECT_TIMEOUT", 5000),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("PRWATCH_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("PRWATCH_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("PRWATCH_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
