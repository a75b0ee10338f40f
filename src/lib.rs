pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::pipeline::{DecisionPipeline, PipelineSettings};
use crate::application::prompt::PromptVerbosity;
use crate::domain::entities::article::ArticleBatch;
use crate::domain::entities::verdict::Decision;
use crate::domain::error::PipelineError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::classifier::CompletionClient;
use crate::domain::ports::notifier::Notifier;
use crate::infrastructure::config::Config;
use crate::infrastructure::llm::openai::OpenAiClassifier;
use crate::infrastructure::news::newsapi::NewsApiSource;
use crate::infrastructure::notify::email::MailApiNotifier;
use crate::infrastructure::notify::noop::NoopNotifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

/// Facade wiring the pipeline to its real collaborators. One instance
/// per invocation; no state survives a run.
pub struct CryptoSentinel {
    source: Arc<dyn ArticleSource>,
    pipeline: DecisionPipeline,
    fetch_limit: usize,
}

impl CryptoSentinel {
    pub fn new(config: &Config, dry_run: bool, verbosity: PromptVerbosity) -> Self {
        let source: Arc<dyn ArticleSource> = Arc::new(NewsApiSource::new(
            config.news_api_url.clone(),
            config.news_api_key.clone(),
        ));
        let classifier: Arc<dyn CompletionClient> = Arc::new(OpenAiClassifier::new(
            config.classification_api_key.clone(),
            None,
        ));

        let notifier: Arc<dyn Notifier> = if dry_run {
            Arc::new(NoopNotifier)
        } else {
            match (&config.alert_api_url, &config.alert_api_key) {
                (Some(url), Some(key)) => Arc::new(MailApiNotifier::new(
                    url.clone(),
                    key.clone(),
                    config.alert_recipient.clone(),
                )),
                _ => {
                    warn!("no mail transport configured; alerts will only be logged");
                    Arc::new(NoopNotifier)
                }
            }
        };

        let settings = PipelineSettings {
            asset_name: config.asset_name.clone(),
            fetch_limit: config.fetch_limit,
            sample_size: config.sample_size,
            verbosity,
        };

        Self::with_collaborators(source, classifier, notifier, settings)
    }

    /// Wire the pipeline with caller-supplied collaborators. Tests use
    /// this to substitute in-memory doubles for the network adapters.
    pub fn with_collaborators(
        source: Arc<dyn ArticleSource>,
        classifier: Arc<dyn CompletionClient>,
        notifier: Arc<dyn Notifier>,
        settings: PipelineSettings,
    ) -> Self {
        let fetch_limit = settings.fetch_limit;
        Self {
            source: source.clone(),
            pipeline: DecisionPipeline::new(source, classifier, notifier, settings),
            fetch_limit,
        }
    }

    /// Run the news-to-decision pipeline once.
    pub async fn run(&self, as_of: Option<DateTime<Utc>>) -> Result<Decision, PipelineError> {
        self.pipeline.run(as_of).await
    }

    /// Fetch the ranked article batch without classifying it. Debugging aid.
    pub async fn fetch_articles(
        &self,
        query: &str,
        as_of: Option<DateTime<Utc>>,
        limit: Option<usize>,
    ) -> Result<ArticleBatch, PipelineError> {
        self.source
            .fetch(query, as_of, limit.unwrap_or(self.fetch_limit))
            .await
    }
}
