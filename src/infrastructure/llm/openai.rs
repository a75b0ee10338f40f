use crate::domain::error::PipelineError;
use crate::domain::ports::classifier::CompletionClient;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed persona for every classification call. Single-turn only.
const SYSTEM_PROMPT: &str = "You are a helpful cryptocurrency and market specialist assistant.";

pub struct OpenAiClassifier {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClassifier {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait::async_trait]
impl CompletionClient for OpenAiClassifier {
    async fn classify(&self, prompt: &str) -> Result<String, PipelineError> {
        let resp = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: prompt,
                    },
                ],
            })
            .send()
            .await
            .map_err(|e| PipelineError::Classification(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(PipelineError::Classification(format!(
                "completion API returned {status}: {body}"
            )));
        }

        let data: ChatResponse = resp
            .json()
            .await
            .map_err(|e| PipelineError::Classification(format!("invalid completion body: {e}")))?;

        let text = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(PipelineError::Classification(
                "completion API returned an empty response".into(),
            ));
        }
        Ok(text)
    }
}
