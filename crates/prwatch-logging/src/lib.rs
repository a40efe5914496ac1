//! Log configuration.

use std::str::FromStr;

use prwatch_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "info,prwatch=debug";

/// Subscriber setup failure.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("A global tracing subscriber is already installed: {source}")]
    SetSubscriberError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not bridge `log` records to tracing: {source}")]
    LogBridgeError {
        source: tracing_log::log::SetLoggerError,
    },
    #[error("Invalid log filter `{directives}`: {source}")]
    InvalidFilter {
        source: tracing_subscriber::filter::ParseError,
        directives: String,
    },
}

/// Configure logging.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::LogBridgeError { source: e })?;

    let log_config = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_ENV_CONFIG.to_string());
    let app_name = format!("prwatch-{}", config.version);

    let filter_layer = build_filter_layer(log_config)?;
    let hierarchical_layer = HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_bracketed_fields(true);
    let error_layer = ErrorLayer::default();
    let json_storage_layer = config.logging.use_bunyan.then_some(JsonStorageLayer);
    let bunyan_layer = config
        .logging
        .use_bunyan
        .then(|| BunyanFormattingLayer::new(app_name, std::io::stderr));

    let subscriber = tracing_subscriber::registry()
        .with(error_layer)
        .with(hierarchical_layer)
        .with(filter_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::SetSubscriberError { source: e })?;

    Ok(())
}

fn build_filter_layer(log_config: String) -> Result<EnvFilter, LoggingError> {
    EnvFilter::from_str(&log_config).map_err(|e| LoggingError::InvalidFilter {
        source: e,
        directives: log_config,
    })
}
