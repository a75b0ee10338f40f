use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news article as ranked and returned by the news provider.
/// Validated at the provider boundary; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub url: Option<String>,
    pub source: Option<ArticleOrigin>,
    pub author: Option<String>,
    pub image_url: Option<String>,
}

/// Outlet the provider attributes the article to. Both fields may be
/// absent; some outlets are unregistered with the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleOrigin {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Articles in provider relevance order. Truncation keeps this order;
/// nothing downstream re-sorts.
pub type ArticleBatch = Vec<Article>;
