use crate::domain::entities::verdict::Verdict;
use crate::domain::error::PipelineError;
use serde::Deserialize;

/// Verdict as the classifier spells it. Unknown extra keys are ignored;
/// missing or ill-typed required keys make deserialization fail.
#[derive(Deserialize)]
struct WireVerdict {
    #[serde(rename = "Reasoning")]
    reasoning: String,
    #[serde(rename = "ValueWillDrop")]
    value_will_drop: bool,
}

/// Extract the structured verdict from a raw completion. The provider
/// sometimes wraps its JSON in a fenced code block; bare JSON is equally
/// valid. Any failure carries the original raw text for diagnostics.
pub fn parse(raw: &str) -> Result<Verdict, PipelineError> {
    let body = strip_code_fence(raw);
    let wire: WireVerdict = serde_json::from_str(body).map_err(|e| PipelineError::VerdictParse {
        message: e.to_string(),
        raw: raw.to_string(),
    })?;
    Ok(Verdict {
        reasoning: wire.reasoning,
        value_will_drop: wire.value_will_drop,
    })
}

/// Remove a surrounding fenced code block if present. Only whole fence
/// lines are stripped: a leading opener line (with or without a language
/// tag) and a trailing closer on its own line. JSON that merely contains
/// backticks is left untouched.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(after_open) = text.strip_prefix("```") else {
        return text;
    };
    let Some(newline) = after_open.find('\n') else {
        // Opener with no body. Not a fence we can unwrap.
        return text;
    };
    let body = after_open[newline + 1..].trim_end();
    if let Some(inner) = body.strip_suffix("```") {
        if inner.is_empty() || inner.ends_with('\n') {
            return inner.trim();
        }
    }
    body
}
