use serde::{Deserialize, Serialize};

/// Structured output of the classifier: free-text reasoning plus the
/// drop prediction. Both fields are mandatory; an incomplete verdict is
/// a parse failure upstream, never defaulted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub reasoning: String,
    pub value_will_drop: bool,
}

/// Terminal status of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionStatus {
    /// The news provider returned nothing; a normal, non-error outcome.
    NoArticles,
    /// Drop predicted; the alert collaborator was invoked.
    Notified,
    /// No drop predicted.
    NoAction,
}

impl DecisionStatus {
    /// Human-readable body for the invocation response envelope.
    pub fn summary(&self) -> &'static str {
        match self {
            DecisionStatus::NoArticles => "No news articles available.",
            DecisionStatus::Notified => "Alert email sent.",
            DecisionStatus::NoAction => "No market drop detected.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub status: DecisionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

impl Decision {
    pub fn no_articles() -> Self {
        Self {
            status: DecisionStatus::NoArticles,
            verdict: None,
        }
    }

    pub fn notified(verdict: Verdict) -> Self {
        Self {
            status: DecisionStatus::Notified,
            verdict: Some(verdict),
        }
    }

    pub fn no_action(verdict: Verdict) -> Self {
        Self {
            status: DecisionStatus::NoAction,
            verdict: Some(verdict),
        }
    }
}
