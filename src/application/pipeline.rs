use crate::application::prompt::{self, PromptVerbosity};
use crate::application::{parser, selector};
use crate::domain::entities::verdict::Decision;
use crate::domain::error::PipelineError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::classifier::CompletionClient;
use crate::domain::ports::notifier::Notifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tunables for one run. Resolved once from configuration and passed in
/// explicitly; nothing here is ambient state.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub asset_name: String,
    /// Upper bound on articles taken from the provider, applied after ranking.
    pub fetch_limit: usize,
    /// Fixed sample size handed to the classifier.
    pub sample_size: usize,
    pub verbosity: PromptVerbosity,
}

/// The news-to-decision pipeline: fetch, sample, prompt, classify,
/// parse, decide. Strictly sequential and single-shot; any component
/// error aborts the run. Only alert delivery failure is tolerated.
pub struct DecisionPipeline {
    source: Arc<dyn ArticleSource>,
    classifier: Arc<dyn CompletionClient>,
    notifier: Arc<dyn Notifier>,
    settings: PipelineSettings,
}

impl DecisionPipeline {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        classifier: Arc<dyn CompletionClient>,
        notifier: Arc<dyn Notifier>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            source,
            classifier,
            notifier,
            settings,
        }
    }

    /// Run the pipeline once. `as_of` pins the 24-hour news window;
    /// `None` lets provider relevance alone govern the result set.
    pub async fn run(&self, as_of: Option<DateTime<Utc>>) -> Result<Decision, PipelineError> {
        let batch = self
            .source
            .fetch(&self.settings.asset_name, as_of, self.settings.fetch_limit)
            .await?;

        if batch.is_empty() {
            info!(asset = %self.settings.asset_name, "no articles found");
            return Ok(Decision::no_articles());
        }
        debug!(fetched = batch.len(), "fetched article batch");

        let sample = selector::select(&batch, self.settings.sample_size)?;
        let payload = prompt::build(&sample, &self.settings.asset_name, self.settings.verbosity);

        let raw = self.classifier.classify(payload.as_str()).await?;
        let verdict = parser::parse(&raw)?;
        debug!(value_will_drop = verdict.value_will_drop, "verdict parsed");

        if verdict.value_will_drop {
            // Delivery is best-effort: a failed alert never flips the decision.
            if let Err(e) = self
                .notifier
                .send_alert(&self.settings.asset_name, &verdict.reasoning)
                .await
            {
                warn!(error = %e, "alert delivery failed; decision stands");
            }
            Ok(Decision::notified(verdict))
        } else {
            Ok(Decision::no_action(verdict))
        }
    }
}
