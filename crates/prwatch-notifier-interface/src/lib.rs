//! Notifier interface.

use async_trait::async_trait;
use thiserror::Error;

/// Notifier error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `NotifierError`.
pub type Result<T, E = NotifierError> = core::result::Result<T, E>;

/// Answer from the messaging endpoint.
///
/// Delivery is best-effort: a non-success status is reported here, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP status code.
    pub status_code: u16,
}

impl DeliveryReceipt {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Outgoing message channel.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait NotifierService: Send + Sync {
    /// Post a text message.
    async fn send_message(&self, text: &str) -> Result<DeliveryReceipt>;
}
