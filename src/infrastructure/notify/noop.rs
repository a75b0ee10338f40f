use crate::domain::ports::notifier::{Notifier, NotifyError};
use tracing::info;

/// Notifier that records the alert in the log and delivers nothing.
/// Used for dry runs and when no mail transport is configured.
pub struct NoopNotifier;

#[async_trait::async_trait]
impl Notifier for NoopNotifier {
    async fn send_alert(&self, asset_name: &str, _justification: &str) -> Result<(), NotifyError> {
        info!(asset = %asset_name, "drop alert suppressed (no-op notifier)");
        Ok(())
    }
}
