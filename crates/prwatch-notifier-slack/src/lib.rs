//! Slack incoming webhook notifier.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::time::Duration;

use async_trait::async_trait;
use prwatch_config::Config;
use prwatch_notifier_interface::{DeliveryReceipt, NotifierError, NotifierService, Result};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;

/// Slack adapter error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum SlackError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::HttpError { source: e }
    }
}

impl From<SlackError> for NotifierError {
    fn from(e: SlackError) -> Self {
        NotifierError::ImplementationError { source: e.into() }
    }
}

/// Slack incoming webhook notifier.
#[derive(Clone)]
pub struct SlackNotifierService {
    config: Config,
}

impl SlackNotifierService {
    /// Creates new Slack notifier.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, SlackError> {
        Ok(ClientBuilder::new()
            .connect_timeout(Duration::from_millis(self.config.notifier.connect_timeout))
            .user_agent(format!("prwatch/{}", self.config.version))
            .build()?)
    }

    async fn post_message(&self, text: &str) -> Result<DeliveryReceipt, SlackError> {
        #[derive(Serialize)]
        struct Request<'a> {
            text: &'a str,
        }

        let response = self
            .get_client()?
            .post(&self.config.notifier.slack_webhook_url)
            .json(&Request { text })
            .send()
            .await?;

        Ok(DeliveryReceipt {
            status_code: response.status().as_u16(),
        })
    }
}

#[async_trait]
impl NotifierService for SlackNotifierService {
    #[tracing::instrument(skip(self), ret)]
    async fn send_message(&self, text: &str) -> Result<DeliveryReceipt> {
        Ok(self.post_message(text).await?)
    }
}
