//! Shared test doubles for the pipeline's collaborator ports.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use cryptosentinel::application::pipeline::PipelineSettings;
use cryptosentinel::application::prompt::PromptVerbosity;
use cryptosentinel::domain::entities::article::{Article, ArticleBatch};
use cryptosentinel::domain::error::PipelineError;
use cryptosentinel::domain::ports::article_source::ArticleSource;
use cryptosentinel::domain::ports::classifier::CompletionClient;
use cryptosentinel::domain::ports::notifier::{Notifier, NotifyError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        description: format!("{title} description"),
        content: format!("{title} content"),
        published_at: Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
        url: None,
        source: None,
        author: None,
        image_url: None,
    }
}

pub fn batch(n: usize) -> ArticleBatch {
    (0..n).map(|i| article(&format!("article-{i}"))).collect()
}

pub fn settings(sample_size: usize) -> PipelineSettings {
    PipelineSettings {
        asset_name: "Bitcoin".to_string(),
        fetch_limit: 50,
        sample_size,
        verbosity: PromptVerbosity::Full,
    }
}

/// Article source serving a fixed in-memory batch.
pub struct StaticSource {
    batch: ArticleBatch,
}

impl StaticSource {
    pub fn new(batch: ArticleBatch) -> Self {
        Self { batch }
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    async fn fetch(
        &self,
        _query: &str,
        _as_of: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<ArticleBatch, PipelineError> {
        Ok(self.batch.iter().take(limit).cloned().collect())
    }
}

/// Article source that always fails with a transport error.
pub struct FailingSource;

#[async_trait]
impl ArticleSource for FailingSource {
    async fn fetch(
        &self,
        _query: &str,
        _as_of: Option<DateTime<Utc>>,
        _limit: usize,
    ) -> Result<ArticleBatch, PipelineError> {
        Err(PipelineError::Transport("connection refused".into()))
    }
}

/// Classifier returning a canned response, recording every prompt it sees.
pub struct ScriptedClassifier {
    response: String,
    pub calls: Arc<AtomicUsize>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClassifier {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for ScriptedClassifier {
    async fn classify(&self, prompt: &str) -> Result<String, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Notifier that counts deliveries and always succeeds.
pub struct CountingNotifier {
    pub calls: Arc<AtomicUsize>,
}

impl CountingNotifier {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn send_alert(&self, _asset_name: &str, _justification: &str) -> Result<(), NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Notifier whose transport always rejects the credentials.
pub struct FailingNotifier {
    pub calls: Arc<AtomicUsize>,
}

impl FailingNotifier {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send_alert(&self, _asset_name: &str, _justification: &str) -> Result<(), NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Credentials("invalid API key".into()))
    }
}
