use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("News transport error: {0}")]
    Transport(String),

    #[error("Classification service error: {0}")]
    Classification(String),

    #[error("Insufficient articles: requested {requested}, only {available} available")]
    InsufficientData { requested: usize, available: usize },

    #[error("Verdict parse error: {message}\n\nRaw response:\n{raw}")]
    VerdictParse { message: String, raw: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
