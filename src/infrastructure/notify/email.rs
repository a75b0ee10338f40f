use crate::domain::ports::notifier::{Notifier, NotifyError};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Alert delivery through a transactional mail HTTP API: one POST with
/// recipient, subject, and plain-text body, authenticated with a bearer
/// key. Best-effort by contract; callers swallow failures.
pub struct MailApiNotifier {
    client: Client,
    endpoint: String,
    api_key: String,
    recipient: String,
}

impl MailApiNotifier {
    pub fn new(endpoint: String, api_key: String, recipient: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            endpoint,
            api_key,
            recipient,
        }
    }
}

#[derive(Serialize)]
struct MailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[async_trait::async_trait]
impl Notifier for MailApiNotifier {
    async fn send_alert(&self, asset_name: &str, justification: &str) -> Result<(), NotifyError> {
        let subject = format!("Alert: Potential {asset_name} Market Drop Detected");
        let text = format!(
            "Based on the latest news, the sentiment analysis suggests a possible drop in {asset_name} market value.\n\
             Consider reviewing the news and market trends immediately.\n\n\
             Justification:\n{justification}"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&MailRequest {
                to: &self.recipient,
                subject: &subject,
                text: &text,
            })
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        match resp.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(NotifyError::Credentials(
                format!("mail API rejected credentials ({})", resp.status()),
            )),
            s => {
                let body = resp.text().await.unwrap_or_default();
                Err(NotifyError::Delivery(format!("mail API returned {s}: {body}")))
            }
        }
    }
}
