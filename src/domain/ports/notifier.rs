use async_trait::async_trait;
use thiserror::Error;

/// Delivery failure at the alert boundary. Never escapes the pipeline:
/// the caller logs it and the decision stands.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("credentials rejected: {0}")]
    Credentials(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Outbound port for the alert channel. Best-effort, single
/// preconfigured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_alert(&self, asset_name: &str, justification: &str) -> Result<(), NotifyError>;
}
