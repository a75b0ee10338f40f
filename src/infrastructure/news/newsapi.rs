use crate::domain::entities::article::{Article, ArticleBatch, ArticleOrigin};
use crate::domain::error::PipelineError;
use crate::domain::ports::article_source::ArticleSource;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, NaiveDate, Utc};
use std::time::Duration;

/// NewsAPI-style article source. Maps the provider's `articles` array
/// 1:1 onto the Article entity and validates required fields at this
/// boundary so nothing downstream has to.
pub struct NewsApiSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiSource {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("cryptosentinel/0.1")
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            base_url,
            api_key,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<WireSource>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct WireSource {
    id: Option<String>,
    name: Option<String>,
}

impl WireArticle {
    /// Required fields absent or null are a provider contract violation.
    /// `index` is the article's position in the ranked response, for the
    /// error message.
    fn into_article(self, index: usize) -> Result<Article, PipelineError> {
        let missing = |field: &str| {
            PipelineError::Transport(format!(
                "news provider contract violation: article {index} missing required field '{field}'"
            ))
        };
        Ok(Article {
            title: self.title.ok_or_else(|| missing("title"))?,
            description: self.description.ok_or_else(|| missing("description"))?,
            content: self.content.ok_or_else(|| missing("content"))?,
            published_at: self.published_at.ok_or_else(|| missing("publishedAt"))?,
            url: self.url,
            source: self.source.map(|s| ArticleOrigin {
                id: s.id,
                name: s.name,
            }),
            author: self.author,
            image_url: self.url_to_image,
        })
    }
}

/// Calendar-day bounds of the 24-hour window ending at `as_of`. Day
/// granularity is deliberate; news volume is too low for most assets to
/// warrant exact instants.
fn day_window(as_of: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
    let to = as_of.date_naive();
    (to - ChronoDuration::days(1), to)
}

#[async_trait]
impl ArticleSource for NewsApiSource {
    async fn fetch(
        &self,
        query: &str,
        as_of: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<ArticleBatch, PipelineError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("apiKey", self.api_key.clone()),
            ("language", "en".into()),
            ("sortBy", "relevance".into()),
        ];
        if let Some(as_of) = as_of {
            let (from, to) = day_window(as_of);
            params.push(("from", from.format("%Y-%m-%d").to_string()));
            params.push(("to", to.format("%Y-%m-%d").to_string()));
        }

        let resp = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(PipelineError::Transport(format!(
                "news API returned {status}: {body}"
            )));
        }

        let data: SearchResponse = resp
            .json()
            .await
            .map_err(|e| PipelineError::Transport(format!("invalid news API body: {e}")))?;

        // Truncate after provider ranking; never re-sort client-side.
        data.articles
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, wire)| wire.into_article(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wire(json: &str) -> WireArticle {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn window_is_previous_calendar_day_through_as_of_day() {
        let as_of = Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap();
        let (from, to) = day_window(as_of);
        assert_eq!(from.to_string(), "2025-03-09");
        assert_eq!(to.to_string(), "2025-03-10");
    }

    #[test]
    fn complete_article_maps_cleanly() {
        let article = wire(
            r#"{
                "title": "BTC dips",
                "description": "A dip",
                "content": "Long form",
                "publishedAt": "2025-03-10T08:00:00Z",
                "url": "https://example.com/a",
                "source": {"id": null, "name": "Example Wire"},
                "author": "jane",
                "urlToImage": "https://example.com/a.png"
            }"#,
        )
        .into_article(0)
        .unwrap();

        assert_eq!(article.title, "BTC dips");
        assert_eq!(article.source.unwrap().name.as_deref(), Some("Example Wire"));
    }

    #[test]
    fn null_optionals_do_not_fail_construction() {
        let article = wire(
            r#"{
                "title": "BTC dips",
                "description": "A dip",
                "content": "Long form",
                "publishedAt": "2025-03-10T08:00:00Z",
                "url": null,
                "source": null,
                "author": null,
                "urlToImage": null
            }"#,
        )
        .into_article(3)
        .unwrap();

        assert!(article.url.is_none());
        assert!(article.author.is_none());
    }

    #[test]
    fn missing_required_field_is_a_contract_violation() {
        let err = wire(
            r#"{
                "title": "BTC dips",
                "description": null,
                "content": "Long form",
                "publishedAt": "2025-03-10T08:00:00Z"
            }"#,
        )
        .into_article(2)
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("article 2"));
        assert!(msg.contains("description"));
    }
}
