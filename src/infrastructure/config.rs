use crate::domain::error::PipelineError;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

const DEFAULT_FETCH_LIMIT: usize = 50;
const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Immutable run configuration, resolved once from the environment
/// before any pipeline step executes and passed explicitly into the
/// collaborators that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub news_api_url: String,
    pub classification_api_key: String,
    pub asset_name: String,
    pub alert_recipient: String,
    /// Mail API endpoint for alert delivery. Optional: without it the
    /// run still decides, it just cannot deliver.
    pub alert_api_url: Option<String>,
    pub alert_api_key: Option<String>,
    pub fetch_limit: usize,
    pub sample_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, PipelineError> {
        let asset_name = require("CRYPTO_NAME")?;
        if asset_name.trim().is_empty() {
            return Err(PipelineError::Configuration(
                "CRYPTO_NAME must be non-empty".into(),
            ));
        }

        Ok(Self {
            news_api_key: require("NEWS_API_KEY")?,
            news_api_url: std::env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.into()),
            classification_api_key: require("OPENAI_API_KEY")?,
            asset_name,
            alert_recipient: require("ALERT_EMAIL")?,
            alert_api_url: std::env::var("ALERT_API_URL").ok(),
            alert_api_key: std::env::var("ALERT_API_KEY").ok(),
            fetch_limit: numeric_var("FETCH_LIMIT", DEFAULT_FETCH_LIMIT)?,
            sample_size: numeric_var("SAMPLE_SIZE", DEFAULT_SAMPLE_SIZE)?,
        })
    }
}

fn require(key: &str) -> Result<String, PipelineError> {
    std::env::var(key).map_err(|_| {
        PipelineError::Configuration(format!("missing required environment variable {key}"))
    })
}

fn numeric_var(key: &str, default: usize) -> Result<usize, PipelineError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| {
            PipelineError::Configuration(format!("{key} must be a positive integer, got '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
