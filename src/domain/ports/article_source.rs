use crate::domain::entities::article::ArticleBatch;
use crate::domain::error::PipelineError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outbound port for the news search provider.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch up to `limit` articles matching `query`, most relevant first.
    /// `query` must be non-empty. When `as_of` is given, results are
    /// restricted to the 24-hour calendar-day window ending at `as_of`;
    /// otherwise provider relevance alone governs. Truncation to `limit`
    /// happens after ranking and never re-orders the results.
    async fn fetch(
        &self,
        query: &str,
        as_of: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<ArticleBatch, PipelineError>;
}
